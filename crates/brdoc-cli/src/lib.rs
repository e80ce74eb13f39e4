//! # brdoc-cli — Command-Line Front End for brdoc
//!
//! Feeds raw text to `brdoc-core` and renders the results. This crate is a
//! consumer of the core library: it owns everything the core deliberately
//! leaves out, namely I/O, configuration, logging, the 14-digit input cap,
//! and user-facing feedback messages.
//!
//! ## Subcommands
//!
//! - `brdoc check` — classify and validate each input.
//! - `brdoc format` — print the masked form of each input.
//! - `brdoc watch` — line-by-line input field session on stdin.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers write to any
//!   `io::Write` so they can be tested without a terminal.
//! - Validation logic lives in `brdoc-core` only.

pub mod check;
pub mod config;
pub mod feedback;
pub mod format;
pub mod watch;

use std::io::BufRead;

use anyhow::{Context, Result};

/// Exit code for a run where every document was valid (or invalid
/// documents are not treated as failures).
pub const EXIT_OK: u8 = 0;

/// Exit code when at least one document was invalid and
/// `fail_on_invalid` is enabled.
pub const EXIT_INVALID: u8 = 1;

/// Exit code for operational errors (bad config, unreadable stdin).
pub const EXIT_ERROR: u8 = 2;

/// Use the positional inputs if any were given, otherwise read one input
/// per line from `reader`.
///
/// Trailing `\r` is stripped so files with CRLF endings behave the same.
pub fn collect_inputs(positional: &[String], reader: impl BufRead) -> Result<Vec<String>> {
    if !positional.is_empty() {
        return Ok(positional.to_vec());
    }
    reader
        .lines()
        .map(|line| {
            line.map(|l| l.trim_end_matches('\r').to_string())
                .context("failed to read input from stdin")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_inputs_win_over_reader() {
        let inputs = collect_inputs(&["123".to_string()], "456\n789\n".as_bytes()).unwrap();
        assert_eq!(inputs, vec!["123"]);
    }

    #[test]
    fn reads_lines_when_no_positional() {
        let inputs = collect_inputs(&[], "123.456.789-09\r\n11222333000181\n".as_bytes()).unwrap();
        assert_eq!(inputs, vec!["123.456.789-09", "11222333000181"]);
    }

    #[test]
    fn empty_reader_yields_no_inputs() {
        let inputs = collect_inputs(&[], "".as_bytes()).unwrap();
        assert!(inputs.is_empty());
    }

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<check::CheckArgs>();
        let _ = std::any::type_name::<format::FormatArgs>();
        let _ = std::any::type_name::<watch::WatchArgs>();
        let _ = std::any::type_name::<config::CliConfig>();
    }
}
