#![forbid(unsafe_code)]

//! Hit records: which rules changed the text on a given input

use crate::types::RuleId;
use serde::Serialize;

/// Whether one rule changed the text at the point it ran
///
/// `changed` compares the text just before and just after this rule, not
/// against the original input. A rule can match and still leave the text
/// as it was, in which case it did not hit. The comparison is exact, so a
/// rewrite that only changes letter case or diacritics counts as a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit<'a> {
    pub rule: RuleId,
    pub pattern: &'a str,
    pub changed: bool,
}

/// Hits for every rule, in table order, plus the translated text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HitReport<'a> {
    hits: Vec<Hit<'a>>,
    output: String,
}

impl<'a> HitReport<'a> {
    pub(crate) fn new(hits: Vec<Hit<'a>>, output: String) -> Self {
        Self { hits, output }
    }

    /// Report for empty input: no hits, empty output
    pub fn empty() -> Self {
        Self::default()
    }

    /// One hit per rule, in table order
    pub fn hits(&self) -> &[Hit<'a>] {
        &self.hits
    }

    pub fn into_hits(self) -> Vec<Hit<'a>> {
        self.hits
    }

    /// The translated text, identical to what `Translator::translate` returns
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    /// Only the rules that changed the text
    pub fn fired(&self) -> impl Iterator<Item = &Hit<'a>> {
        self.hits.iter().filter(|hit| hit.changed)
    }

    pub fn fired_count(&self) -> usize {
        self.fired().count()
    }

    /// Number of rules recorded
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
