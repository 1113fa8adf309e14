#![forbid(unsafe_code)]

//! Built-in Haags rule table embedded at compile time
//!
//! The table is compiled into the binary with `include_str!` so the crate
//! works without any rule files on disk.

/// TOML source of the Haags rule table
pub const BUILTIN_RULES: &str = include_str!("../../rules/haags.toml");
