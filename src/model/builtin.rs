//! The built-in technique list.

use super::TechniqueRecord;

/// Techniques shown on the published cheat sheet, in display order.
pub static TECHNIQUES: [TechniqueRecord; 9] = [
    TechniqueRecord::from_static(
        1,
        "Role Assignment",
        "Tell the model who it should act as",
        "Sets context and shapes tone, style, and depth of response",
        "❌ \"Explain recursion.\"\n✅ \"You are a computer science professor. Explain recursion to a beginner.\"",
    ),
    TechniqueRecord::from_static(
        2,
        "Few-Shot Prompting",
        "Provide examples of the task before asking the model to perform it",
        "Helps model learn pattern and format from concrete examples",
        "Q: Translate \"Hello\" to Spanish\nA: Hola\n\nQ: Translate \"Goodbye\" to Spanish\nA: Adiós\n\nQ: Translate \"Thank you\" to Spanish\nA: [model completes]",
    ),
    TechniqueRecord::from_static(
        3,
        "Chain-of-Thought (CoT)",
        "Ask the model to reason step by step before giving final answer",
        "Reduces errors in complex reasoning by making intermediate steps visible",
        "\"Solve this problem. Explain your reasoning step by step before giving the final answer.\"",
    ),
    TechniqueRecord::from_static(
        4,
        "Self-Consistency",
        "Generate multiple reasoning paths and select the most consistent answer",
        "Avoids relying on single potentially flawed reasoning path",
        "\"Give three different ways to solve this problem, then identify which answer appears most often.\"",
    ),
    TechniqueRecord::from_static(
        5,
        "Scoring / Ranking",
        "Generate multiple outputs and have the model evaluate and rank them",
        "Improves quality by leveraging model's ability to critique its own work",
        "\"Generate 3 marketing slogans. Then score each from 1–5 on creativity and clarity.\"",
    ),
    TechniqueRecord::from_static(
        6,
        "Reflexion / Self-Critique",
        "Ask model to review and refine its own output",
        "Encourages error detection and iterative improvement",
        "\"Draft an answer to this question. Then review your answer and improve it.\"",
    ),
    TechniqueRecord::from_static(
        7,
        "Multi-Step Prompting",
        "Break complex task into sequential smaller steps",
        "Makes complex workflows more reliable and easier to debug",
        "Step 1: \"List key themes in this text\"\nStep 2: \"For each theme, find supporting quotes\"\nStep 3: \"Summarize the main argument\"",
    ),
    TechniqueRecord::from_static(
        8,
        "Reframing / Style Transfer",
        "Ask model to rewrite content in a different style or for different audience",
        "Adapts complexity and tone for specific contexts or readers",
        "\"Rewrite this technical explanation for a 10-year-old.\"",
    ),
    TechniqueRecord::from_static(
        9,
        "External Knowledge Grounding",
        "Provide relevant documents or data before asking questions",
        "Reduces hallucination by anchoring responses in provided facts",
        "\"Based on the following document: [paste text]\n\nQuestion: What are the key findings?\"",
    ),
];
