//! Check command implementation
//!
//! Loads the configuration, compiles the rule table it selects and reports
//! whether every rule is usable. Nothing is translated.

use crate::cli::args::GlobalArgs;
use crate::cli::common::{self, EXIT_SUCCESS};
use crate::error::HaagsError;
use crate::output::human::{self, HumanFormatter};

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: the rule table compiled and validated
/// - 2: configuration, rule table or I/O error
pub fn run_check(global: &GlobalArgs) -> i32 {
    match run_check_inner(global) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => common::fail(&e),
    }
}

fn run_check_inner(global: &GlobalArgs) -> Result<(), HaagsError> {
    let (loaded, table) = common::prepare(global)?;

    let formatter = HumanFormatter::new(common::color_option(global, &loaded.config));
    let mut out = formatter.stdout();
    formatter.write_check(&mut out, &table)?;
    human::finish(&mut out)?;

    Ok(())
}
