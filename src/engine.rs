//! Rewrite engine and per-rule hit diagnostics

pub mod hits;
pub mod translator;

pub use hits::{Hit, HitReport};
pub use translator::Translator;
