//! Rules command implementation

use crate::cli::args::{GlobalArgs, OutputFormat};
use crate::cli::common::{self, EXIT_SUCCESS};
use crate::config;
use crate::error::HaagsError;
use crate::output::human::{self, HumanFormatter};
use crate::output::JsonlFormatter;
use std::io::{self, Write};

/// Run the rules command, listing the table in application order
pub fn run_rules(global: &GlobalArgs, format: Option<OutputFormat>) -> i32 {
    match run_rules_inner(global, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => common::fail(&e),
    }
}

fn run_rules_inner(global: &GlobalArgs, format: Option<OutputFormat>) -> Result<(), HaagsError> {
    let (loaded, table) = common::prepare(global)?;

    match common::output_format(format, &loaded.config) {
        config::OutputFormat::Human => {
            let formatter = HumanFormatter::new(common::color_option(global, &loaded.config));
            let mut out = formatter.stdout();
            formatter.write_rules(&mut out, &table)?;
            human::finish(&mut out)?;
        }
        config::OutputFormat::Jsonl => {
            let mut out = io::stdout().lock();
            out.write_all(JsonlFormatter::new().format_rules(&table).as_bytes())?;
            human::finish(&mut out)?;
        }
    }

    Ok(())
}
