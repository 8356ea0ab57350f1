// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Entry point logic for the `lendscan` binary.
//!
//! Reads one JSON event per line from stdin:
//!
//! ```text
//! {"event": "Withdrawal", "data": {"user": "0x1", "amount": "100", "token": "0x2"}}
//! ```
//!
//! and writes one normalized JSON record per accepted line to stdout. Invalid
//! lines are logged and skipped.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use anyhow::Context;
use dotenvy::dotenv;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::constants::env;
use crate::config::{LendscanConfig, LendscanConfigBuilder};
use crate::events::{EventNormalizer, NormalizedEvent};
use crate::spans;

/// One line of binary input
#[derive(Debug, Deserialize)]
struct InputEvent {
    event: String,
    data: HashMap<String, String>,
}

/// Counts of accepted and rejected input lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Main entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = load_config()?;
    let normalizer = EventNormalizer::new(config);
    info!(
        accumulator_scale = normalizer.config().accumulator_scale,
        "Loaded configuration"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = process_lines(&normalizer, stdin.lock(), stdout.lock())?;

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "Finished processing events"
    );
    Ok(())
}

/// Build a [`LendscanConfig`] from defaults plus `LENDSCAN_*` environment overrides
pub fn load_config() -> anyhow::Result<LendscanConfig> {
    load_config_from(|name| dotenvy::var(name).ok())
}

/// Build a [`LendscanConfig`] from defaults plus overrides returned by `lookup`
///
/// `lookup` receives a variable name and returns its value if set. An
/// unparsable accumulator scale is an error naming the variable.
pub fn load_config_from<F>(lookup: F) -> anyhow::Result<LendscanConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = LendscanConfigBuilder::new();

    if let Some(raw) = lookup(env::ACCUMULATOR_SCALE) {
        let scale = raw
            .parse::<u32>()
            .with_context(|| format!("Invalid {}: {raw:?}", env::ACCUMULATOR_SCALE))?;
        builder = builder.accumulator_scale(scale);
    }

    if let Some(text) = lookup(env::NOTIFICATION_TEXT) {
        builder = builder.notification_text(text);
    }

    Ok(builder.build())
}

/// Normalize every non-blank line of `input`, writing accepted events to `output`
///
/// Only I/O failures abort processing; malformed or invalid events are logged
/// at `warn` and counted as rejected.
pub fn process_lines<R, W>(
    normalizer: &EventNormalizer,
    input: R,
    mut output: W,
) -> anyhow::Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read input line {line_number}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let span = spans::process_input_line(line_number);
        let _guard = span.enter();

        match normalize_line(normalizer, &line) {
            Ok(event) => {
                serde_json::to_writer(&mut output, &event)
                    .context("Failed to write normalized event")?;
                writeln!(output).context("Failed to write normalized event")?;
                summary.accepted += 1;
            }
            Err(e) => {
                let reason = format!("{e:#}");
                warn!(line_number, error = %reason, "Skipping invalid event");
                summary.rejected += 1;
            }
        }
    }

    output.flush().context("Failed to flush output")?;
    Ok(summary)
}

fn normalize_line(normalizer: &EventNormalizer, line: &str) -> anyhow::Result<NormalizedEvent> {
    let input: InputEvent = serde_json::from_str(line).context("Malformed event JSON")?;
    Ok(normalizer.normalize_named(&input.event, &input.data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::{ACCUMULATOR_SCALE, DEFAULT_NOTIFICATION_TEXT};

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| pairs.get(name).cloned()
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config_from(vars(&[])).unwrap();
        assert_eq!(config.accumulator_scale, ACCUMULATOR_SCALE);
        assert_eq!(config.notification_text, DEFAULT_NOTIFICATION_TEXT);
    }

    #[test]
    fn test_load_config_scale_override() {
        let config = load_config_from(vars(&[(env::ACCUMULATOR_SCALE, "18")])).unwrap();
        assert_eq!(config.accumulator_scale, 18);
        assert_eq!(config.notification_text, DEFAULT_NOTIFICATION_TEXT);
    }

    #[test]
    fn test_load_config_text_override() {
        let config =
            load_config_from(vars(&[(env::NOTIFICATION_TEXT, "Liquidation alert")])).unwrap();
        assert_eq!(config.notification_text, "Liquidation alert");
        assert_eq!(config.accumulator_scale, ACCUMULATOR_SCALE);
    }

    #[test]
    fn test_load_config_rejects_unparsable_scale() {
        let err = load_config_from(vars(&[(env::ACCUMULATOR_SCALE, "abc")])).unwrap_err();
        assert!(
            err.to_string().contains("LENDSCAN_ACCUMULATOR_SCALE"),
            "unexpected error: {err:#}"
        );
    }

    fn process(input: &str) -> (RunSummary, Vec<serde_json::Value>) {
        let mut output = Vec::new();
        let summary =
            process_lines(&EventNormalizer::default(), input.as_bytes(), &mut output).unwrap();

        let records = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (summary, records)
    }

    #[test]
    fn test_valid_lines_are_written() {
        let input = concat!(
            r#"{"event": "Withdrawal", "data": {"user": "0x1", "amount": "100", "token": "0x2"}}"#,
            "\n",
            r#"{"event": "accumulators_sync", "data": {"token": "0x3", "lending_accumulator": "0x33b2e3c9fd0803ce8000000", "debt_accumulator": "0x0"}}"#,
            "\n",
        );

        let (summary, records) = process(input);

        assert_eq!(summary, RunSummary { accepted: 2, rejected: 0 });
        assert_eq!(records[0]["event"], "Withdrawal");
        assert_eq!(records[1]["event"], "AccumulatorsSync");
    }

    #[test]
    fn test_accumulators_are_written_in_plain_notation() {
        let input = concat!(
            r#"{"event": "AccumulatorsSync", "data": {"token": "0x1", "lending_accumulator": "0x1", "debt_accumulator": "0x33b2e3c9fd0803ce8000000"}}"#,
            "\n",
        );

        let (_, records) = process(input);

        assert_eq!(records[0]["lending_accumulator"], "0.000000000000000000000000001");
        assert_eq!(records[0]["debt_accumulator"], "1.000000000000000000000000000");
    }

    #[test]
    fn test_invalid_lines_are_skipped() {
        let input = concat!(
            "not json\n",
            "\n",
            r#"{"event": "Borrow", "data": {}}"#,
            "\n",
            r#"{"event": "Withdrawal", "data": {"user": "0x1", "amount": "-5", "token": "0x2"}}"#,
            "\n",
            r#"{"event": "Withdrawal", "data": {"user": "0x1", "amount": "5", "token": "0x2"}}"#,
            "\n",
        );

        let (summary, records) = process(input);

        assert_eq!(summary, RunSummary { accepted: 1, rejected: 3 });
        assert_eq!(records.len(), 1);
    }
}
