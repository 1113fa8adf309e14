#![forbid(unsafe_code)]

//! Compiled pattern cache
//!
//! The cache is filled while a [`RuleTable`] is built and never written to
//! afterwards, so any number of threads can read it without locking. Rules
//! with the same pattern source share one compiled regex.
//!
//! [`RuleTable`]: crate::rules::RuleTable

use fancy_regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::Arc;

/// Pattern source to compiled regex
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: HashMap<String, Arc<Regex>>,
    backtrack_limit: Option<usize>,
}

impl PatternCache {
    /// Creates a cache with room for at least `capacity` patterns
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            patterns: HashMap::with_capacity(capacity),
            backtrack_limit: None,
        }
    }

    /// Caps the backtracking steps each compiled pattern may take per match
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = Some(limit);
        self
    }

    /// Returns the compiled regex for `pattern`, compiling it on first use
    pub(crate) fn get_or_compile(&mut self, pattern: &str) -> Result<Arc<Regex>, fancy_regex::Error> {
        if let Some(regex) = self.patterns.get(pattern) {
            return Ok(Arc::clone(regex));
        }

        let mut builder = RegexBuilder::new(pattern);
        if let Some(limit) = self.backtrack_limit {
            builder.backtrack_limit(limit);
        }
        let regex = Arc::new(builder.build()?);

        self.patterns.insert(pattern.to_string(), Arc::clone(&regex));
        Ok(regex)
    }

    /// Looks up an already compiled pattern
    pub fn get(&self, pattern: &str) -> Option<&Arc<Regex>> {
        self.patterns.get(pattern)
    }

    /// Number of distinct patterns compiled
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if nothing has been compiled
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of patterns the cache can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.patterns.capacity()
    }

    /// The backtrack limit applied to every compiled pattern, if set
    pub fn backtrack_limit(&self) -> Option<usize> {
        self.backtrack_limit
    }
}
