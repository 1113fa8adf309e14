#![forbid(unsafe_code)]

//! Human-readable output
//!
//! Translations print as plain lines. Hit listings print one line per rule
//! in table order, `<pattern> => hit: <true|false>`, then the translated
//! text as `output: <text>` and a `<fired>/<total> rules fired` summary.
//! Rules that fired are highlighted when color is enabled.

use crate::config::ColorOption;
use crate::engine::HitReport;
use crate::rules::RuleTable;
use std::io::{self, IsTerminal, Write};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Maps the configured color option onto a terminal color choice
///
/// `Auto` only colors when stdout is a terminal.
pub fn color_choice(option: ColorOption) -> ColorChoice {
    match option {
        ColorOption::Always => ColorChoice::Always,
        ColorOption::Never => ColorChoice::Never,
        ColorOption::Auto if io::stdout().is_terminal() => ColorChoice::Auto,
        ColorOption::Auto => ColorChoice::Never,
    }
}

/// Human-readable formatter
pub struct HumanFormatter {
    color: ColorChoice,
}

impl HumanFormatter {
    /// Creates a formatter with the given color setting
    pub fn new(color: ColorOption) -> Self {
        Self {
            color: color_choice(color),
        }
    }

    /// Writes translated lines, one per input
    pub fn write_translations<W: WriteColor>(
        &self,
        out: &mut W,
        outputs: &[String],
    ) -> io::Result<()> {
        for output in outputs {
            writeln!(out, "{}", output)?;
        }
        Ok(())
    }

    /// Writes one line per rule, the translated text and the fired summary
    ///
    /// With `fired_only`, rules that left the text unchanged are omitted from
    /// the listing; the summary still counts the whole table.
    pub fn write_hits<W: WriteColor>(
        &self,
        out: &mut W,
        report: &HitReport<'_>,
        fired_only: bool,
    ) -> io::Result<()> {
        let mut fired = ColorSpec::new();
        fired.set_fg(Some(Color::Green)).set_bold(true);

        for hit in report.hits() {
            if fired_only && !hit.changed {
                continue;
            }
            if hit.changed {
                out.set_color(&fired)?;
            }
            write!(out, "{} => hit: {}", hit.pattern, hit.changed)?;
            if hit.changed {
                out.reset()?;
            }
            writeln!(out)?;
        }

        writeln!(out, "output: {}", report.output())?;
        writeln!(out, "{}/{} rules fired", report.fired_count(), report.len())
    }

    /// Writes the rule table in application order
    pub fn write_rules<W: WriteColor>(&self, out: &mut W, table: &RuleTable) -> io::Result<()> {
        let mut dim = ColorSpec::new();
        dim.set_dimmed(true);

        writeln!(out, "Rule table '{}' ({} rules):", table.name(), table.len())?;
        writeln!(out)?;

        for rule in table {
            write!(out, "{:>4}  {} => {}", rule.id(), rule.pattern(), rule.replacement())?;
            if let Some(note) = rule.note() {
                out.set_color(&dim)?;
                write!(out, "  # {}", note)?;
                out.reset()?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Writes the validation summary of a compiled table
    pub fn write_check<W: WriteColor>(&self, out: &mut W, table: &RuleTable) -> io::Result<()> {
        let mut ok = ColorSpec::new();
        ok.set_fg(Some(Color::Green));

        out.set_color(&ok)?;
        write!(out, "✓")?;
        out.reset()?;
        writeln!(
            out,
            " Rule table '{}' is valid: {} rules, {} distinct patterns",
            table.name(),
            table.len(),
            table.cache().len()
        )
    }

    /// Formats hits without color, for tests and non-terminal use
    pub fn format_hits(&self, report: &HitReport<'_>, fired_only: bool) -> String {
        let mut buffer = Buffer::no_color();
        // Writing into an in-memory buffer does not fail
        let _ = self.write_hits(&mut buffer, report, fired_only);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Formats the rule table without color
    pub fn format_rules(&self, table: &RuleTable) -> String {
        let mut buffer = Buffer::no_color();
        let _ = self.write_rules(&mut buffer, table);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Standard output stream honoring the configured color choice
    pub fn stdout(&self) -> StandardStream {
        StandardStream::stdout(self.color)
    }
}

/// Flushes a stream, treating a closed pipe as success
pub fn finish<W: Write>(out: &mut W) -> io::Result<()> {
    match out.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
