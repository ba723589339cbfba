//! `shiftlog`: read a scale or label measurement out of OCR text.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shiftlog_core::{ScanMode, Settings};
use shiftlog_ocr::{scan_text, ScanPipeline, ScanResult};
use tracing_subscriber::EnvFilter;

/// Exit status when the input held no usable measurement.
const EXIT_NOT_FOUND: i32 = 2;

#[derive(Parser)]
#[command(name = "shiftlog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file with recognized OCR output (stdin when omitted)
    file: Option<PathBuf>,

    /// Extraction mode: `weight` or `temperature-weight`
    #[arg(short, long)]
    mode: Option<ScanMode>,

    /// Treat FILE as a photo and run the built-in OCR engine on it
    #[arg(long, requires = "file")]
    image: bool,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let mode = cli.mode.unwrap_or(settings.scan.mode);
    let pretty = cli.pretty || settings.output.pretty;

    let result = if cli.image {
        scan_image(&cli, &settings, mode)?
    } else {
        scan_text(&read_text(cli.file.as_deref())?, mode)
    };

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    if !result.is_found() {
        tracing::info!("no measurement found");
        std::process::exit(EXIT_NOT_FOUND);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_text(file: Option<&std::path::Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn scan_image(cli: &Cli, settings: &Settings, mode: ScanMode) -> anyhow::Result<ScanResult> {
    let path = cli.file.as_deref().context("--image needs a FILE")?;
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let pipeline = ScanPipeline::new(shiftlog_ocr::default_backend(&settings.ocr));
    Ok(pipeline.scan(&bytes, mode)?)
}
