//! A single prompt engineering technique.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One entry of the cheat sheet.
///
/// Text fields are `Cow` so the built-in catalog can live in static memory
/// while catalogs loaded from disk own their strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueRecord {
    /// Position in the sheet, starting at 1
    pub id: u32,
    /// Short technique name
    pub name: Cow<'static, str>,
    /// What it is
    pub definition: Cow<'static, str>,
    /// Why it works
    pub rationale: Cow<'static, str>,
    /// Example prompt; may contain line breaks and ❌/✅ markers
    pub example: Cow<'static, str>,
}

impl TechniqueRecord {
    /// Build a record from static text.
    #[must_use]
    pub const fn from_static(
        id: u32,
        name: &'static str,
        definition: &'static str,
        rationale: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
            definition: Cow::Borrowed(definition),
            rationale: Cow::Borrowed(rationale),
            example: Cow::Borrowed(example),
        }
    }

    /// Build a record from owned text.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        definition: impl Into<String>,
        rationale: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: Cow::Owned(name.into()),
            definition: Cow::Owned(definition.into()),
            rationale: Cow::Owned(rationale.into()),
            example: Cow::Owned(example.into()),
        }
    }

    /// Named text fields in display order, used by validation.
    pub fn text_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_ref()),
            ("definition", self.definition.as_ref()),
            ("rationale", self.rationale.as_ref()),
            ("example", self.example.as_ref()),
        ]
    }

    /// Whether the example spans more than one line.
    pub fn has_multiline_example(&self) -> bool {
        self.example.contains('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_and_owned_compare_equal() {
        let a = TechniqueRecord::from_static(1, "A", "d", "r", "e");
        let b = TechniqueRecord::new(1, "A", "d", "r", "e");
        assert_eq!(a, b);
    }

    #[test]
    fn test_multiline_example() {
        let rec = TechniqueRecord::new(1, "A", "d", "r", "Q: one\nA: two");
        assert!(rec.has_multiline_example());
    }

    #[test]
    fn test_deserialize_owned() {
        let json = r#"{"id":3,"name":"N","definition":"D","rationale":"R","example":"E"}"#;
        let rec: TechniqueRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, 3);
        assert_eq!(rec.name, "N");
    }
}
