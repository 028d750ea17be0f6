use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use creditnorm::{Config, ReportNormalizer};

#[derive(Parser)]
#[command(name = "creditnorm", about = "Normalise a vendor credit report into the canonical record")]
struct Cli {
    /// Vendor identifier (creditscore360, bizcreditplus, enterprisecreditdata).
    #[arg(short, long)]
    vendor: String,

    /// Payload file. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Config file. Defaults to ~/.config/creditnorm/config.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the record on one line.
    #[arg(long)]
    compact: bool,

    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(vendor = %cli.vendor, "creditnorm debug log started");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading user config")?,
    };

    let raw = read_payload(cli.file.as_deref())?;
    let record = ReportNormalizer::with_config(raw, &cli.vendor, &config)?.get_report()?;

    let out = if cli.compact || !config.output.pretty {
        serde_json::to_string(&record)?
    } else {
        serde_json::to_string_pretty(&record)?
    };
    println!("{out}");
    Ok(())
}

fn read_payload(file: Option<&std::path::Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != std::path::Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("reading payload {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading payload from stdin")?;
            Ok(raw)
        }
    }
}
