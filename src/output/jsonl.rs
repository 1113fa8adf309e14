#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! One JSON object per line, each tagged with a `type`:
//! - `translation`: one per input, in input order
//! - `hit`: one per rule, in table order, followed by one `summary`
//! - `rule`: one per rule, in table order

use crate::engine::HitReport;
use crate::rules::RuleTable;
use crate::types::RuleId;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Formats input/output pairs as translation records
    pub fn format_translations<I, O>(&self, pairs: &[(I, O)]) -> String
    where
        I: AsRef<str>,
        O: AsRef<str>,
    {
        let mut output = String::new();
        for (input, translated) in pairs {
            push_record(
                &mut output,
                &TranslationRecord {
                    record_type: "translation",
                    input: input.as_ref(),
                    output: translated.as_ref(),
                },
            );
        }
        output
    }

    /// Formats a hit report as hit records followed by a summary record
    ///
    /// With `fired_only`, hit records are written only for rules that changed
    /// the text. The summary always covers the whole table.
    pub fn format_hits(&self, report: &HitReport<'_>, fired_only: bool) -> String {
        let mut output = String::new();

        for hit in report.hits() {
            if fired_only && !hit.changed {
                continue;
            }
            push_record(
                &mut output,
                &HitRecord {
                    record_type: "hit",
                    rule: hit.rule,
                    pattern: hit.pattern,
                    changed: hit.changed,
                },
            );
        }

        push_record(
            &mut output,
            &SummaryRecord {
                record_type: "summary",
                rules: report.len(),
                fired: report.fired_count(),
                output: report.output(),
            },
        );

        output
    }

    /// Formats the rule table as rule records
    pub fn format_rules(&self, table: &RuleTable) -> String {
        let mut output = String::new();
        for rule in table {
            push_record(
                &mut output,
                &RuleRecord {
                    record_type: "rule",
                    rule: rule.id(),
                    pattern: rule.pattern(),
                    replacement: rule.replacement(),
                    note: rule.note(),
                },
            );
        }
        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

#[derive(Debug, Serialize)]
struct TranslationRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    input: &'a str,
    output: &'a str,
}

#[derive(Debug, Serialize)]
struct HitRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    rule: RuleId,
    pattern: &'a str,
    changed: bool,
}

#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    rules: usize,
    fired: usize,
    output: &'a str,
}

#[derive(Debug, Serialize)]
struct RuleRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    rule: RuleId,
    pattern: &'a str,
    replacement: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}
