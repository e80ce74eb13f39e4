//! # brdoc CLI entry point
//!
//! Parses command-line arguments, resolves configuration, initializes
//! tracing, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brdoc_cli::check::{run_check, CheckArgs};
use brdoc_cli::config::{CliConfig, OutputFormat};
use brdoc_cli::format::{run_format, FormatArgs};
use brdoc_cli::watch::{run_watch, WatchArgs};
use brdoc_cli::EXIT_ERROR;

/// brdoc — CPF/CNPJ validation and masking.
///
/// Classifies Brazilian taxpayer identifiers by digit count, checks their
/// verification digits, and applies the standard punctuation masks.
#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides config file and BRDOC_OUTPUT).
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Exit with status 1 if any document is invalid.
    #[arg(long, global = true)]
    fail_on_invalid: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify and validate documents.
    Check(CheckArgs),

    /// Apply the CPF/CNPJ mask to documents.
    Format(FormatArgs),

    /// Re-validate a document field on every stdin line.
    Watch(WatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "brdoc starting");

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config.with_flags(cli.output, cli.fail_on_invalid),
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    tracing::debug!(?config, "resolved configuration");

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, &config),
        Commands::Format(args) => run_format(&args, &config),
        Commands::Watch(args) => run_watch(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brdoc_cli::format::MaskKind;

    #[test]
    fn cli_parse_check_with_inputs() {
        let cli = Cli::try_parse_from(["brdoc", "check", "12345678909", "11222333000181"]).unwrap();
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.inputs, vec!["12345678909", "11222333000181"]);
        } else {
            panic!("expected check");
        }
    }

    #[test]
    fn cli_parse_check_without_inputs_reads_stdin() {
        let cli = Cli::try_parse_from(["brdoc", "check"]).unwrap();
        if let Commands::Check(args) = cli.command {
            assert!(args.inputs.is_empty());
        } else {
            panic!("expected check");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "brdoc",
            "check",
            "--output",
            "json",
            "--fail-on-invalid",
            "-vv",
            "123",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.fail_on_invalid);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parse_config_path() {
        let cli = Cli::try_parse_from(["brdoc", "--config", "brdoc.yaml", "watch"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("brdoc.yaml")));
        assert!(matches!(cli.command, Commands::Watch(_)));
    }

    #[test]
    fn cli_parse_format_default_mask() {
        let cli = Cli::try_parse_from(["brdoc", "format", "123"]).unwrap();
        if let Commands::Format(args) = cli.command {
            assert_eq!(args.mask, MaskKind::Auto);
            assert_eq!(args.inputs, vec!["123"]);
        } else {
            panic!("expected format");
        }
    }

    #[test]
    fn cli_parse_format_explicit_mask() {
        let cli = Cli::try_parse_from(["brdoc", "format", "--as", "cnpj", "112"]).unwrap();
        if let Commands::Format(args) = cli.command {
            assert_eq!(args.mask, MaskKind::Cnpj);
        } else {
            panic!("expected format");
        }
    }

    #[test]
    fn cli_parse_watch_initial() {
        let cli = Cli::try_parse_from(["brdoc", "watch", "--initial", "123.456"]).unwrap();
        if let Commands::Watch(args) = cli.command {
            assert_eq!(args.initial, "123.456");
        } else {
            panic!("expected watch");
        }
    }

    #[test]
    fn cli_rejects_unknown_output_format() {
        assert!(Cli::try_parse_from(["brdoc", "--output", "xml", "check"]).is_err());
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["brdoc"]).is_err());
    }
}
