#![forbid(unsafe_code)]

//! The ordered rule table
//!
//! A table is built once, validated as a whole and then only read. Rule order
//! is significant: every rule sees the text as the rules before it left it, so
//! a table is never sorted, merged or deduplicated.

use crate::error::RuleError;
use crate::rules::builtin::BUILTIN_RULES;
use crate::rules::{PatternCache, Rule};
use crate::types::RuleId;
use fancy_regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// TOML structure of a rule table file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleTableFile {
    #[serde(default)]
    table: TableSection,
    #[serde(default, rename = "rule")]
    rules: Vec<RuleDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableSection {
    name: String,
    #[serde(default)]
    #[allow(dead_code)] // Read by the schema only; one table format exists
    version: Option<String>,
}

impl Default for TableSection {
    fn default() -> Self {
        Self {
            name: "custom".to_string(),
            version: None,
        }
    }
}

/// An uncompiled rule as written in a table file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Collects rule definitions in order and compiles them into a [`RuleTable`]
#[derive(Debug, Clone)]
pub struct RuleTableBuilder {
    name: String,
    definitions: Vec<RuleDefinition>,
    backtrack_limit: Option<usize>,
}

impl RuleTableBuilder {
    /// Starts an empty table with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definitions: Vec::new(),
            backtrack_limit: None,
        }
    }

    /// Starts a builder from a TOML rule table
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if the TOML does not match the
    /// rule table schema. Patterns are not compiled until [`build`].
    ///
    /// [`build`]: RuleTableBuilder::build
    pub fn from_toml(content: &str) -> Result<Self, RuleError> {
        let file: RuleTableFile = toml::from_str(content)
            .map_err(|e| RuleError::InvalidDefinition(format!("Failed to parse TOML: {}", e)))?;

        Ok(Self {
            name: file.table.name,
            definitions: file.rules,
            backtrack_limit: None,
        })
    }

    /// Appends a rule after all rules added so far
    pub fn rule(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.definitions.push(RuleDefinition {
            pattern: pattern.into(),
            replacement: replacement.into(),
            note: None,
        });
        self
    }

    /// Appends an already assembled definition
    pub fn definition(mut self, definition: RuleDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Caps regex backtracking per match for every rule in the table
    pub fn backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = Some(limit);
        self
    }

    /// Number of rules added so far
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if no rules were added
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Compiles and validates every rule
    ///
    /// # Errors
    ///
    /// Fails on the first rule that does not hold up:
    /// - `RuleError::EmptyTable` if no rules were added
    /// - `RuleError::InvalidRegex` if a pattern does not compile
    /// - `RuleError::InvalidTemplate` if a replacement refers to a missing group
    pub fn build(self) -> Result<RuleTable, RuleError> {
        if self.definitions.is_empty() {
            return Err(RuleError::EmptyTable);
        }

        let mut cache = PatternCache::with_capacity(self.definitions.len());
        if let Some(limit) = self.backtrack_limit {
            cache = cache.with_backtrack_limit(limit);
        }
        let templates = TemplateChecker::new()
            .map_err(|e| RuleError::InvalidDefinition(format!("Template checker: {}", e)))?;

        let mut rules = Vec::with_capacity(self.definitions.len());
        for (index, definition) in self.definitions.into_iter().enumerate() {
            let id = RuleId::from_index(index);

            let pattern = cache.get_or_compile(&definition.pattern).map_err(|e| {
                RuleError::InvalidRegex {
                    rule: id,
                    pattern: definition.pattern.clone(),
                    message: e.to_string(),
                }
            })?;

            templates
                .check(&pattern, &definition.replacement)
                .map_err(|message| RuleError::InvalidTemplate {
                    rule: id,
                    template: definition.replacement.clone(),
                    message,
                })?;

            rules.push(Rule {
                id,
                pattern,
                replacement: definition.replacement,
                note: definition.note,
            });
        }

        tracing::debug!(
            table = %self.name,
            rules = rules.len(),
            patterns = cache.len(),
            "compiled rule table"
        );

        Ok(RuleTable {
            name: self.name,
            rules,
            cache,
        })
    }
}

/// Checks replacement templates against the groups of their pattern
///
/// Template syntax follows the `regex` crate: `$name` takes the longest run of
/// word characters as the group name, so `$1e` names a group `1e` rather than
/// group 1 followed by `e`. Such references are rejected here instead of
/// silently expanding to nothing.
struct TemplateChecker {
    reference: regex::Regex,
}

impl TemplateChecker {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            reference: regex::Regex::new(r"\$(?:(\$)|\{([^}]*)\}|([0-9A-Za-z_]+))")?,
        })
    }

    fn check(&self, pattern: &Regex, template: &str) -> Result<(), String> {
        for caps in self.reference.captures_iter(template) {
            if caps.get(1).is_some() {
                continue; // `$$` is a literal dollar
            }

            let Some(name) = caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str()) else {
                continue;
            };

            let known = match name.parse::<usize>() {
                Ok(group) => group < pattern.captures_len(),
                Err(_) => pattern.capture_names().flatten().any(|n| n == name),
            };

            if !known {
                return Err(format!(
                    "refers to group '{}' but the pattern has {} capturing group(s); write ${{N}} when a reference is followed by letters or digits",
                    name,
                    pattern.captures_len() - 1
                ));
            }
        }
        Ok(())
    }
}

/// An ordered, immutable, validated list of rewrite rules
#[derive(Debug)]
pub struct RuleTable {
    name: String,
    rules: Vec<Rule>,
    cache: PatternCache,
}

impl RuleTable {
    /// Builds the Haags rule table compiled into the crate
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if the embedded table does not validate.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::builtin_builder()?.build()
    }

    /// Returns a builder preloaded with the embedded Haags rules
    ///
    /// Use this to set a backtrack limit before compiling.
    pub fn builtin_builder() -> Result<RuleTableBuilder, RuleError> {
        RuleTableBuilder::from_toml(BUILTIN_RULES)
    }

    /// Parses and compiles a table from TOML content
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if the TOML is malformed or any rule is invalid.
    pub fn from_toml(content: &str) -> Result<Self, RuleError> {
        RuleTableBuilder::from_toml(content)?.build()
    }

    /// Reads, parses and compiles a table file
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if the file cannot be read or the table is invalid.
    pub fn from_path(path: &Path) -> Result<Self, RuleError> {
        Self::builder_from_path(path)?.build()
    }

    /// Reads a table file into a builder without compiling it
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if the file cannot be read or parsed.
    pub fn builder_from_path(path: &Path) -> Result<RuleTableBuilder, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuleError::InvalidDefinition(format!("Failed to read file {}: {}", path.display(), e))
        })?;
        RuleTableBuilder::from_toml(&content)
    }

    /// Starts an empty table
    pub fn builder(name: impl Into<String>) -> RuleTableBuilder {
        RuleTableBuilder::new(name)
    }

    /// The table's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false for a built table; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Looks up a rule by its position
    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id.index())
    }

    /// The compiled patterns behind this table
    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_keeps_file_order() {
        let toml = r#"
[table]
name = "test"

[[rule]]
pattern = "oo"
replacement = "au"

[[rule]]
pattern = "ui"
replacement = "ùi"
note = "moet voor ooi"
"#;

        let table = RuleTable::from_toml(toml).unwrap();
        assert_eq!(table.name(), "test");
        assert_eq!(table.len(), 2);

        let patterns: Vec<&str> = table.iter().map(|r| r.pattern()).collect();
        assert_eq!(patterns, vec!["oo", "ui"]);
        assert_eq!(table.get(RuleId::new(2).unwrap()).unwrap().note(), Some("moet voor ooi"));
    }

    #[test]
    fn test_from_toml_without_table_section() {
        let toml = r#"
[[rule]]
pattern = "ij\\b"
replacement = "è"
"#;

        let table = RuleTable::from_toml(toml).unwrap();
        assert_eq!(table.name(), "custom");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_toml_rejects_unknown_fields() {
        let toml = r#"
[[rule]]
pattern = "a"
replacment = "b"
"#;

        let result = RuleTable::from_toml(toml);
        assert!(matches!(result.unwrap_err(), RuleError::InvalidDefinition(_)));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let result = RuleTable::from_toml("[table]\nname = \"leeg\"\n");
        assert!(matches!(result.unwrap_err(), RuleError::EmptyTable));
    }

    #[test]
    fn test_invalid_regex_names_the_rule() {
        let result = RuleTable::builder("test")
            .rule("oo", "au")
            .rule("(unclosed", "x")
            .build();

        match result.unwrap_err() {
            RuleError::InvalidRegex { rule, pattern, .. } => {
                assert_eq!(rule.position(), 2);
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("Expected InvalidRegex, got {:?}", other),
        }
    }

    #[test]
    fn test_template_with_missing_group_is_rejected() {
        let result = RuleTable::builder("test").rule("(a|b)c", "${2}").build();
        assert!(matches!(result.unwrap_err(), RuleError::InvalidTemplate { .. }));
    }

    #[test]
    fn test_unbraced_reference_followed_by_letters_is_rejected() {
        let result = RuleTable::builder("test").rule("(N|n)erd", "$1euâhd").build();
        assert!(matches!(result.unwrap_err(), RuleError::InvalidTemplate { .. }));
    }

    #[test]
    fn test_valid_templates_are_accepted() {
        let table = RuleTable::builder("test")
            .rule("(N|n)erd", "${1}euâhd")
            .rule("a(t|l) ik", "a$1${1}ik")
            .rule("(?P<v>V|v)an je", "${v}ajje")
            .rule("euro", "$$")
            .build()
            .unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_duplicate_patterns_share_cache_entry() {
        let table = RuleTable::builder("test")
            .rule("io(?![oen])", "iau")
            .rule("io\\b", "iau")
            .rule("io(?![oen])", "iau")
            .build()
            .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.cache().len(), 2);
        assert!(table.cache().capacity() >= table.len());
    }

    #[test]
    fn test_backtrack_limit_reaches_cache() {
        let table = RuleTable::builder("test")
            .rule("a", "b")
            .backtrack_limit(5_000)
            .build()
            .unwrap();
        assert_eq!(table.cache().backtrack_limit(), Some(5_000));
    }

    #[test]
    fn test_builtin_table_compiles() {
        let table = RuleTable::builtin().unwrap();
        assert_eq!(table.name(), "haags");
        assert!(table.len() > 500);
        assert!(table.cache().capacity() >= table.len());
    }

    #[test]
    fn test_get_out_of_range() {
        let table = RuleTable::builder("test").rule("a", "b").build().unwrap();
        assert!(table.get(RuleId::new(2).unwrap()).is_none());
    }
}
