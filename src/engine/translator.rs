#![forbid(unsafe_code)]

//! The rewrite cascade
//!
//! A translation folds the rule table over the input: rule N rewrites the
//! output of rule N-1, every match replaced, and the last rule's output is the
//! result. Each call owns its working string, so a `Translator` can be shared
//! between threads freely.
//!
//! The cascade is tuned for one pass over standard Dutch. Feeding a
//! translation back in is not expected to give the same text again.

use crate::engine::hits::{Hit, HitReport};
use crate::error::{RuleError, TranslateError};
use crate::rules::{Rule, RuleTable};
use rayon::prelude::*;
use std::borrow::Cow;
use std::sync::Arc;

/// Translates standard Dutch into Haags with a fixed rule table
#[derive(Debug, Clone)]
pub struct Translator {
    table: Arc<RuleTable>,
}

impl Translator {
    /// Creates a translator over an already validated table
    pub fn new(table: RuleTable) -> Self {
        Self::from_shared(Arc::new(table))
    }

    /// Creates a translator over a table shared with other translators
    pub fn from_shared(table: Arc<RuleTable>) -> Self {
        Self { table }
    }

    /// Creates a translator over the built-in Haags table
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if the built-in table fails to compile.
    pub fn builtin() -> Result<Self, RuleError> {
        Ok(Self::new(RuleTable::builtin()?))
    }

    /// The rule table this translator applies
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Translates `text`, returning an empty string for empty input
    ///
    /// A rule the regex engine fails to evaluate (backtrack limit exceeded)
    /// is skipped with a warning; the remaining rules still run.
    pub fn translate(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut current = text.to_string();
        for rule in self.table.iter() {
            if let Some(next) = step(rule, &current) {
                current = next;
            }
        }
        current
    }

    /// Translates `text`, stopping at the first rule that fails to evaluate
    ///
    /// # Errors
    ///
    /// Returns `TranslateError::Match` naming the rule whose match failed.
    pub fn try_translate(&self, text: &str) -> Result<String, TranslateError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let mut current = text.to_string();
        for rule in self.table.iter() {
            let next = match rule.apply(&current)? {
                Cow::Owned(next) => next,
                Cow::Borrowed(_) => continue,
            };
            current = next;
        }
        Ok(current)
    }

    /// Reports, per rule in table order, whether it changed the text
    ///
    /// Empty input gives an empty list.
    pub fn hits(&self, text: &str) -> Vec<Hit<'_>> {
        self.trace(text).into_hits()
    }

    /// Runs the same cascade as [`translate`] and records a hit per rule
    ///
    /// The report's output always equals what [`translate`] returns for the
    /// same input.
    ///
    /// [`translate`]: Translator::translate
    pub fn trace(&self, text: &str) -> HitReport<'_> {
        if text.is_empty() {
            return HitReport::empty();
        }

        let mut hits = Vec::with_capacity(self.table.len());
        let mut current = text.to_string();

        for rule in self.table.iter() {
            let changed = match step(rule, &current) {
                Some(next) => {
                    let changed = next != current;
                    current = next;
                    changed
                }
                None => false,
            };

            if changed {
                tracing::trace!(rule = %rule.id(), pattern = rule.pattern(), "rule fired");
            }

            hits.push(Hit {
                rule: rule.id(),
                pattern: rule.pattern(),
                changed,
            });
        }

        HitReport::new(hits, current)
    }

    /// Like [`trace`], but stops at the first rule that fails to evaluate
    ///
    /// # Errors
    ///
    /// Returns `TranslateError::Match` naming the rule whose match failed.
    ///
    /// [`trace`]: Translator::trace
    pub fn try_trace(&self, text: &str) -> Result<HitReport<'_>, TranslateError> {
        if text.is_empty() {
            return Ok(HitReport::empty());
        }

        let mut hits = Vec::with_capacity(self.table.len());
        let mut current = text.to_string();

        for rule in self.table.iter() {
            let next = match rule.apply(&current)? {
                Cow::Owned(next) => Some(next),
                Cow::Borrowed(_) => None,
            };
            let changed = match next {
                Some(next) => {
                    let changed = next != current;
                    current = next;
                    changed
                }
                None => false,
            };

            if changed {
                tracing::trace!(rule = %rule.id(), pattern = rule.pattern(), "rule fired");
            }

            hits.push(Hit {
                rule: rule.id(),
                pattern: rule.pattern(),
                changed,
            });
        }

        Ok(HitReport::new(hits, current))
    }

    /// Translates independent inputs in parallel, keeping input order
    pub fn translate_all<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.translate(text.as_ref())).collect()
    }

    /// Like [`translate_all`], but fails if any input hits a failing rule
    ///
    /// # Errors
    ///
    /// Returns a `TranslateError::Match` from one of the failing inputs.
    ///
    /// [`translate_all`]: Translator::translate_all
    pub fn try_translate_all<S>(&self, texts: &[S]) -> Result<Vec<String>, TranslateError>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.try_translate(text.as_ref()))
            .collect()
    }
}

/// Applies one rule, returning the new text if the rule produced one
fn step(rule: &Rule, current: &str) -> Option<String> {
    match rule.apply(current) {
        Ok(Cow::Owned(next)) => Some(next),
        Ok(Cow::Borrowed(_)) => None,
        Err(err) => {
            tracing::warn!(
                rule = %rule.id(),
                pattern = rule.pattern(),
                error = %err,
                "rule could not be evaluated; text left as is"
            );
            None
        }
    }
}
