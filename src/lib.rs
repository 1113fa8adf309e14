#![forbid(unsafe_code)]

//! Haags: translate standard Dutch into the dialect of The Hague
//!
//! Translation is an ordered cascade of regex rewrite rules. Each rule sees
//! the text as the rules before it left it, so the table order is part of the
//! table's meaning. Hit reports show which rules changed a given input.
//!
//! ```no_run
//! use haags::Translator;
//!
//! let translator = Translator::builtin()?;
//! assert_eq!(translator.translate("Den Haag"), "De Haag");
//! # Ok::<(), haags::RuleError>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, HaagsError, RuleError, TranslateError};

// Re-export core domain types for convenient access
pub use engine::{Hit, HitReport, Translator};
pub use rules::{Rule, RuleTable, RuleTableBuilder};
pub use types::RuleId;
