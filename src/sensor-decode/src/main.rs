// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};

use sensor_app::{init_logging, ConfigFile};
use sensor_codec::{decode, format, SensorRecord};

use config::{validate_log_level, DecoderConfig};

type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const PKG_DESCRIPTION: &str = concat!(env!("CARGO_PKG_NAME"), " - sensor frame decoder");
const EXAMPLE_PAYLOAD: &str = "AbQAewDpBy0=";

#[derive(Debug, Parser)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = PKG_DESCRIPTION,
)]
struct Cli {
    /// Path to configuration file
    #[arg(long = "config", short = 'C', value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print example configuration and exit
    #[arg(long = "print-config")]
    print_config: bool,
    /// Log level (trace, debug, info, warn, error), overrides the config file
    #[arg(short = 'l', long = "log-level")]
    log_level: Option<String>,
    /// Base64-encoded sensor frame
    #[arg(value_name = "BASE64", allow_hyphen_values = true)]
    payload: Option<String>,
    /// Anything after the payload is ignored
    #[arg(
        hide = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    ignored: Vec<String>,
}

fn usage_lines() -> [String; 2] {
    [
        format!("Usage: {} <base64_string>", PKG_NAME),
        format!("Example: {} {}", PKG_NAME, EXAMPLE_PAYLOAD),
    ]
}

/// CLI flag wins over the config file; both are checked before use.
fn resolve_log_level(cli: &Cli, cfg: &DecoderConfig) -> DynResult<Option<String>> {
    validate_log_level("--log-level", cli.log_level.as_deref())?;
    cfg.validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;
    Ok(cli.log_level.clone().or_else(|| cfg.log_level.clone()))
}

fn load_config(cli: &Cli) -> DynResult<(DecoderConfig, Option<PathBuf>)> {
    let loaded = match cli.config {
        Some(ref path) => (DecoderConfig::load_from_file(path)?, Some(path.clone())),
        None => DecoderConfig::load_from_default_paths()?,
    };
    Ok(loaded)
}

fn report_out_of_range(record: &SensorRecord) {
    for field in record.out_of_range_fields() {
        warn!("Node {}: {} outside documented range", record.node_id, field);
    }
}

fn run(cli: &Cli, payload: &str) -> DynResult<()> {
    let (cfg, config_path) = load_config(cli)?;
    let level = resolve_log_level(cli, &cfg)?;
    init_logging(level.as_deref());

    if let Some(ref path) = config_path {
        info!("Loaded configuration from {}", path.display());
    }
    debug!("Payload: {:?} ({} chars)", payload, payload.len());
    if !cli.ignored.is_empty() {
        debug!("Ignoring {} extra argument(s)", cli.ignored.len());
    }

    let record = decode(payload)?;
    report_out_of_range(&record);

    println!("{}", format(&record));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", DecoderConfig::example_combined_toml());
        return ExitCode::SUCCESS;
    }

    let Some(payload) = cli.payload.as_deref() else {
        for line in usage_lines() {
            println!("{}", line);
        }
        return ExitCode::FAILURE;
    };

    match run(&cli, payload) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
