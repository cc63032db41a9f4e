//! The ordered technique catalog and its invariants.

use super::{builtin::TECHNIQUES, TechniqueRecord};
use crate::error::{CatalogErrorKind, CheatsheetError, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Minimum normalized similarity for a fuzzy name match.
pub const NAME_MATCH_THRESHOLD: f64 = 0.6;

/// A single broken invariant in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogViolation {
    /// Path of the offending field, e.g. `techniques[2].name`
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl std::fmt::Display for CatalogViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered, immutable list of techniques.
///
/// Order is display order. A valid catalog numbers its records `1..=N`
/// in list order; see [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    techniques: Vec<TechniqueRecord>,
}

/// On-disk catalog layout: either a bare list or a `techniques:` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { techniques: Vec<TechniqueRecord> },
    Bare(Vec<TechniqueRecord>),
}

impl From<CatalogFile> for Vec<TechniqueRecord> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Wrapped { techniques } | CatalogFile::Bare(techniques) => techniques,
        }
    }
}

/// Result of a name lookup.
#[derive(Debug, Clone, Copy)]
pub struct NameMatch<'a> {
    pub record: &'a TechniqueRecord,
    /// Normalized similarity in `0.0..=1.0`; 1.0 for exact matches
    pub score: f64,
    pub exact: bool,
}

impl Catalog {
    /// The catalog published on the cheat sheet.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            techniques: TECHNIQUES.to_vec(),
        }
    }

    /// Wrap records as-is. Call [`Catalog::validate`] or
    /// [`Catalog::validated`] before rendering untrusted input.
    #[must_use]
    pub fn from_records(techniques: Vec<TechniqueRecord>) -> Self {
        Self { techniques }
    }

    /// Consume the catalog, failing if any invariant is broken.
    pub fn validated(self) -> Result<Self> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(self)
        } else {
            Err(CheatsheetError::catalog(
                "catalog failed validation",
                CatalogErrorKind::Invalid(violations.into()),
            ))
        }
    }

    /// Parse and validate a YAML catalog.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::from_records(file.into()).validated()
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::from_records(file.into()).validated()
    }

    /// Load a catalog file, choosing the parser by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CheatsheetError::io(path, e))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let catalog = match ext.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            other => Err(CheatsheetError::catalog(
                "cannot infer catalog format",
                CatalogErrorKind::UnsupportedFormat(other.to_string()),
            )),
        }
        .with_context(|| format!("loading catalog {}", path.display()))?;

        tracing::debug!(
            "Loaded {} techniques from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Check every invariant, returning all violations found.
    ///
    /// - the list is non-empty
    /// - ids are `1..=N` in list order, hence unique
    /// - no text field is empty or whitespace only
    #[must_use]
    pub fn validate(&self) -> Vec<CatalogViolation> {
        let mut violations = Vec::new();

        if self.techniques.is_empty() {
            violations.push(CatalogViolation {
                field: "techniques".to_string(),
                message: "catalog must contain at least one technique".to_string(),
            });
            return violations;
        }

        let mut seen = std::collections::HashSet::new();
        for (index, record) in self.techniques.iter().enumerate() {
            let expected = index as u32 + 1;
            if !seen.insert(record.id) {
                violations.push(CatalogViolation {
                    field: format!("techniques[{index}].id"),
                    message: format!("duplicate id {}", record.id),
                });
            } else if record.id != expected {
                violations.push(CatalogViolation {
                    field: format!("techniques[{index}].id"),
                    message: format!("expected id {expected}, found {}", record.id),
                });
            }

            for (name, value) in record.text_fields() {
                if value.trim().is_empty() {
                    violations.push(CatalogViolation {
                        field: format!("techniques[{index}].{name}"),
                        message: "must not be empty".to_string(),
                    });
                }
            }
        }

        violations
    }

    /// Whether [`Catalog::validate`] finds nothing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TechniqueRecord> {
        self.techniques.iter()
    }

    /// Records in display order.
    #[must_use]
    pub fn records(&self) -> &[TechniqueRecord] {
        &self.techniques
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&TechniqueRecord> {
        self.techniques.iter().find(|t| t.id == id)
    }

    /// Find a technique by name.
    ///
    /// A case-insensitive exact match wins; otherwise the most similar name
    /// is returned if it clears [`NAME_MATCH_THRESHOLD`].
    #[must_use]
    pub fn find_by_name(&self, query: &str) -> Option<NameMatch<'_>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        if let Some(record) = self
            .techniques
            .iter()
            .find(|t| t.name.to_lowercase() == needle)
        {
            return Some(NameMatch {
                record,
                score: 1.0,
                exact: true,
            });
        }

        self.ranked_by_name(&needle)
            .into_iter()
            .next()
            .filter(|m| m.score >= NAME_MATCH_THRESHOLD)
    }

    /// Up to `limit` names most similar to `query`, best first.
    #[must_use]
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.ranked_by_name(&needle)
            .into_iter()
            .take(limit)
            .map(|m| m.record.name.as_ref())
            .collect()
    }

    /// Resolve a user-supplied key: a numeric id, otherwise a name.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NameMatch<'_>> {
        if let Ok(id) = key.trim().parse::<u32>() {
            return self.get(id).map(|record| NameMatch {
                record,
                score: 1.0,
                exact: true,
            });
        }
        self.find_by_name(key)
    }

    fn ranked_by_name(&self, needle: &str) -> Vec<NameMatch<'_>> {
        let mut ranked: Vec<_> = self
            .techniques
            .iter()
            .map(|record| {
                let name = record.name.to_lowercase();
                // Partial queries like "few-shot" should rank their technique first
                let score = if name.contains(needle) {
                    strsim::normalized_levenshtein(needle, &name).max(NAME_MATCH_THRESHOLD)
                } else {
                    strsim::normalized_levenshtein(needle, &name)
                };
                NameMatch {
                    record,
                    score,
                    exact: false,
                }
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TechniqueRecord;
    type IntoIter = std::slice::Iter<'a, TechniqueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.techniques.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str) -> TechniqueRecord {
        TechniqueRecord::new(id, name, "def", "why", "example")
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);
        assert!(catalog.validate().is_empty());
    }

    #[test]
    fn test_builtin_ids_are_contiguous() {
        let ids: Vec<u32> = Catalog::builtin().iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_catalog_invalid() {
        let violations = Catalog::from_records(Vec::new()).validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "techniques");
    }

    #[test]
    fn test_gap_in_ids() {
        let catalog = Catalog::from_records(vec![record(1, "A"), record(3, "B")]);
        let violations = catalog.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "techniques[1].id");
        assert!(violations[0].message.contains("expected id 2"));
    }

    #[test]
    fn test_duplicate_ids() {
        let catalog = Catalog::from_records(vec![record(1, "A"), record(1, "B")]);
        let violations = catalog.validate();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("duplicate id 1"));
    }

    #[test]
    fn test_blank_fields_reported() {
        let catalog = Catalog::from_records(vec![TechniqueRecord::new(1, "  ", "", "r", "e")]);
        let fields: Vec<String> = catalog.validate().into_iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec!["techniques[0].name", "techniques[0].definition"]
        );
    }

    #[test]
    fn test_validated_rejects_invalid() {
        let err = Catalog::from_records(Vec::new()).validated().unwrap_err();
        assert!(err.to_string().contains("catalog failed validation"));
    }

    #[test]
    fn test_yaml_wrapped_and_bare() {
        let wrapped = "techniques:\n  - id: 1\n    name: A\n    definition: d\n    rationale: r\n    example: e\n";
        let bare = "- id: 1\n  name: A\n  definition: d\n  rationale: r\n  example: e\n";
        assert_eq!(Catalog::from_yaml_str(wrapped).unwrap().len(), 1);
        assert_eq!(Catalog::from_yaml_str(bare).unwrap().len(), 1);
    }

    #[test]
    fn test_json_invalid_ids_rejected() {
        let json = r#"[{"id":2,"name":"A","definition":"d","rationale":"r","example":"e"}]"#;
        assert!(Catalog::from_json_str(json).is_err());
    }

    #[test]
    fn test_find_by_name_exact_case_insensitive() {
        let catalog = Catalog::builtin();
        let found = catalog.find_by_name("role assignment").unwrap();
        assert!(found.exact);
        assert_eq!(found.record.id, 1);
    }

    #[test]
    fn test_find_by_name_fuzzy() {
        let catalog = Catalog::builtin();
        let found = catalog.find_by_name("Few Shot Prompting").unwrap();
        assert!(!found.exact);
        assert_eq!(found.record.id, 2);
    }

    #[test]
    fn test_find_by_name_partial() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find_by_name("self-consistency").unwrap().record.id, 4);
        assert_eq!(catalog.find_by_name("grounding").unwrap().record.id, 9);
    }

    #[test]
    fn test_find_by_name_no_match() {
        assert!(Catalog::builtin().find_by_name("zzzzzzzzzzzz").is_none());
        assert!(Catalog::builtin().find_by_name("   ").is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.lookup("7").unwrap().record.name, "Multi-Step Prompting");
        assert!(catalog.lookup("42").is_none());
    }

    #[test]
    fn test_suggestions_limit() {
        let catalog = Catalog::builtin();
        let suggestions = catalog.suggestions("prompting", 3);
        assert_eq!(suggestions.len(), 3);
    }
}
