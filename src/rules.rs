#![forbid(unsafe_code)]

//! Rewrite rules, the ordered rule table and the pattern cache behind it

mod builtin;
mod cache;
mod rule;
mod table;

pub use builtin::BUILTIN_RULES;
pub use cache::PatternCache;
pub use rule::Rule;
pub use table::{RuleDefinition, RuleTable, RuleTableBuilder};
