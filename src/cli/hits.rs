//! Hits command implementation
//!
//! Traces one input through the rule table and lists, per rule, whether it
//! changed the text. A rule that cannot be evaluated fails the command.

use crate::cli::args::{GlobalArgs, OutputFormat};
use crate::cli::common::{self, EXIT_SUCCESS};
use crate::config;
use crate::engine::Translator;
use crate::error::HaagsError;
use crate::output::human::{self, HumanFormatter};
use crate::output::JsonlFormatter;
use std::io::{self, Write};

/// Run the hits command
pub fn run_hits(global: &GlobalArgs, text: &str, fired: bool, format: Option<OutputFormat>) -> i32 {
    match run_hits_inner(global, text, fired, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => common::fail(&e),
    }
}

fn run_hits_inner(
    global: &GlobalArgs,
    text: &str,
    fired: bool,
    format: Option<OutputFormat>,
) -> Result<(), HaagsError> {
    let (loaded, table) = common::prepare(global)?;
    let translator = Translator::new(table);
    let report = translator.try_trace(text)?;

    match common::output_format(format, &loaded.config) {
        config::OutputFormat::Human => {
            let formatter = HumanFormatter::new(common::color_option(global, &loaded.config));
            let mut out = formatter.stdout();
            formatter.write_hits(&mut out, &report, fired)?;
            human::finish(&mut out)?;
        }
        config::OutputFormat::Jsonl => {
            let mut out = io::stdout().lock();
            out.write_all(JsonlFormatter::new().format_hits(&report, fired).as_bytes())?;
            human::finish(&mut out)?;
        }
    }

    Ok(())
}
