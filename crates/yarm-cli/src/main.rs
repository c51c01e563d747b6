//! `yarm` CLI — convert between YAML and JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # YAML to pretty JSON (stdin → stdout), x-yarm keys stripped from the root
//! cat openapi.yaml | yarm to-json
//!
//! # File to file, keeping x-yarm keys
//! yarm to-json -i openapi.yaml -o openapi.json --keep-x-yarm
//!
//! # Strip x-yarm keys at every depth, single-line output
//! yarm to-json -i openapi.yaml --recursive --compact
//!
//! # JSON back to YAML
//! yarm to-yaml -i openapi.json
//!
//! # Debug logging on stderr (or set RUST_LOG)
//! yarm -vv to-json -i openapi.yaml
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yarm_core::{FilterScope, JsonStyle, ToJsonOptions, YarmError};

#[derive(Parser)]
#[command(
    name = "yarm",
    version,
    about = "Convert between YAML and JSON, stripping x-yarm extension keys"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert YAML to JSON
    ToJson {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Keep keys starting with `x-yarm` instead of stripping them
        #[arg(long)]
        keep_x_yarm: bool,
        /// Strip x-yarm keys from nested mappings too, not just the root
        #[arg(long, conflicts_with = "keep_x_yarm")]
        recursive: bool,
        /// Write single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Convert JSON to YAML
    ToYaml {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::ToJson {
            input,
            output,
            keep_x_yarm,
            recursive,
            compact,
        } => {
            let yaml = read_input(input.as_deref())?;
            let options = ToJsonOptions::default()
                .ignore_x_yarm(!keep_x_yarm)
                .scope(if recursive {
                    FilterScope::Recursive
                } else {
                    FilterScope::Root
                })
                .style(if compact {
                    JsonStyle::Compact
                } else {
                    JsonStyle::Pretty
                });

            let json = yarm_core::to_json_with(Some(yaml.as_str()), &options)
                .map_err(|e| conversion_error(e, "YAML to JSON"))?;
            write_output(output.as_deref(), json.as_deref().unwrap_or_default())?;
        }
        Commands::ToYaml { input, output } => {
            let json = read_input(input.as_deref())?;
            let yaml = yarm_core::to_yaml(Some(json.as_str()))
                .map_err(|e| conversion_error(e, "JSON to YAML"))?;
            write_output(output.as_deref(), yaml.as_deref().unwrap_or_default())?;
        }
    }

    Ok(())
}

/// Wrap a conversion failure, naming the input line when the parser reported one.
fn conversion_error(err: YarmError, direction: &str) -> anyhow::Error {
    let context = match err.line() {
        Some(line) => format!("Failed to convert {direction} (line {line})"),
        None => format!("Failed to convert {direction}"),
    };
    anyhow::Error::new(err).context(context)
}

/// Log to stderr so converted output on stdout stays clean. `RUST_LOG` wins
/// over `-v` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("yarm={level},yarm_core={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            tracing::info!(path, "reading input file");
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            tracing::info!(path, bytes = content.len(), "writing output file");
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
