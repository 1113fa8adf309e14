//! Test utilities for haags integration tests

#![allow(dead_code)]

use haags::Translator;
use serde::Deserialize;
use std::path::Path;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// One Dutch sentence and its expected Haags rendering
#[derive(Debug, Deserialize)]
pub struct CorpusCase {
    pub dutch: String,
    pub haags: String,
}

#[derive(Debug, Deserialize)]
struct Corpus {
    #[serde(rename = "case")]
    cases: Vec<CorpusCase>,
}

/// Loads the regression corpus from tests/fixtures
pub fn load_corpus() -> TestResult<Vec<CorpusCase>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/corpus.toml");
    let content = std::fs::read_to_string(path)?;
    let corpus: Corpus = toml::from_str(&content)?;
    Ok(corpus.cases)
}

/// Translator over the built-in table
pub fn builtin() -> Translator {
    assert_ok!(Translator::builtin(), "built-in rule table must compile")
}
