//! CLI argument parsing and command dispatch

pub mod args;
pub mod check;
pub mod common;
pub mod hits;
pub mod rules;
pub mod translate;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, GlobalArgs, OutputFormat};
