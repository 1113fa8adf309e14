#![forbid(unsafe_code)]

//! A single rewrite rule: a pattern and the template its matches become

use crate::error::TranslateError;
use crate::types::RuleId;
use fancy_regex::Regex;
use std::borrow::Cow;
use std::sync::Arc;

/// One step of the rewrite cascade
///
/// The compiled pattern is shared with the table's [`PatternCache`], so rules
/// with identical patterns point at the same regex.
///
/// [`PatternCache`]: crate::rules::PatternCache
#[derive(Debug, Clone)]
pub struct Rule {
    pub(crate) id: RuleId,
    pub(crate) pattern: Arc<Regex>,
    pub(crate) replacement: String,
    pub(crate) note: Option<String>,
}

impl Rule {
    /// Returns this rule's position in its table
    pub fn id(&self) -> RuleId {
        self.id
    }

    /// Returns the pattern source as written in the table
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the replacement template, back-references unexpanded
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Returns the author's note for this rule, if any
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Replaces every non-overlapping match in `text`
    ///
    /// Back-references in the template are filled with the text each match
    /// captured. Returns `Cow::Borrowed` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `TranslateError::Match` if the regex engine hits its backtrack
    /// limit while matching.
    pub fn apply<'t>(&self, text: &'t str) -> Result<Cow<'t, str>, TranslateError> {
        self.pattern
            .try_replacen(text, 0, self.replacement.as_str())
            .map_err(|e| TranslateError::Match {
                rule: self.id,
                pattern: self.pattern.as_str().to_string(),
                message: e.to_string(),
            })
    }
}
