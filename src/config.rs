//! Configuration file parsing and validation

pub mod haags_toml;

pub use haags_toml::{ColorOption, Config, EngineConfig, OutputConfig, OutputFormat};
