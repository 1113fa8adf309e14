//! Translate command implementation
//!
//! Inputs come from the command-line arguments, from `--file` (one input per
//! line) or, with neither, from stdin lines. Each input is translated on its
//! own and results are printed in input order. If any rule cannot be
//! evaluated (backtrack limit reached), nothing is printed and the command
//! fails.

use crate::cli::args::{GlobalArgs, OutputFormat};
use crate::cli::common::{self, EXIT_SUCCESS};
use crate::config;
use crate::engine::Translator;
use crate::error::HaagsError;
use crate::output::human::{self, HumanFormatter};
use crate::output::JsonlFormatter;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run the translate command
pub fn run_translate(
    global: &GlobalArgs,
    text: &[String],
    file: Option<&Path>,
    format: Option<OutputFormat>,
) -> i32 {
    match run_translate_inner(global, text, file, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => common::fail(&e),
    }
}

fn run_translate_inner(
    global: &GlobalArgs,
    text: &[String],
    file: Option<&Path>,
    format: Option<OutputFormat>,
) -> Result<(), HaagsError> {
    let (loaded, table) = common::prepare(global)?;
    let inputs = collect_inputs(text, file)?;
    let translator = Translator::new(table);

    let outputs = translator.try_translate_all(&inputs)?;

    match common::output_format(format, &loaded.config) {
        config::OutputFormat::Human => {
            let formatter = HumanFormatter::new(common::color_option(global, &loaded.config));
            let mut out = formatter.stdout();
            formatter.write_translations(&mut out, &outputs)?;
            human::finish(&mut out)?;
        }
        config::OutputFormat::Jsonl => {
            let pairs: Vec<(&str, &str)> = inputs
                .iter()
                .map(String::as_str)
                .zip(outputs.iter().map(String::as_str))
                .collect();
            let mut out = io::stdout().lock();
            out.write_all(JsonlFormatter::new().format_translations(&pairs).as_bytes())?;
            human::finish(&mut out)?;
        }
    }

    Ok(())
}

fn collect_inputs(text: &[String], file: Option<&Path>) -> io::Result<Vec<String>> {
    if let Some(path) = file {
        let content = fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to read {}: {}", path.display(), e))
        })?;
        return Ok(content.lines().map(str::to_string).collect());
    }

    if !text.is_empty() {
        return Ok(text.to_vec());
    }

    io::stdin().lock().lines().collect()
}
