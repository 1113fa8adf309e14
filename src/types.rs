#![forbid(unsafe_code)]

//! Core domain types for haags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a rule in its table
///
/// Rule ids are 1-based and follow table order, so `RuleId(1)` is the first
/// rule applied to every input. Two tables can share ids; an id only means
/// something next to the table it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(usize);

impl RuleId {
    /// Creates a RuleId from a 1-based position
    ///
    /// Returns None for position 0
    pub fn new(position: usize) -> Option<Self> {
        if position == 0 {
            return None;
        }
        Some(RuleId(position))
    }

    /// Creates a RuleId from a 0-based index into a rule list
    pub fn from_index(index: usize) -> Self {
        RuleId(index + 1)
    }

    /// Returns the 1-based position
    pub fn position(&self) -> usize {
        self.0
    }

    /// Returns the 0-based index into the rule list
    pub fn index(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
