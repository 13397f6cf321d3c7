//! tav-extract - Stage 1 parse & extract
//!
//! Reads the task encoding workbook and every EAF file under the annotations
//! directory, then writes hierarchies, action sequences, vocabulary
//! statistics and action categories as JSON.
//!
//! **Usage:**
//! ```bash
//! tav-extract --encoding "coding manual_UPDATED.xlsx" --annotations annotations --output stage1_output
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tav_common::config::TomlConfig;
use tav_extract::config::{resolve_settings, SettingOverrides};
use tav_extract::export::{ResultExporter, SummaryFormatter};
use tav_extract::services::load_workbook;
use tav_extract::{BatchReport, Stage1Pipeline};
use tracing::info;

/// Command-line arguments for tav-extract
#[derive(Parser, Debug)]
#[command(name = "tav-extract")]
#[command(about = "Extract action sequences and vocabulary from ELAN annotations")]
#[command(version)]
struct Args {
    /// Task encoding workbook (coding manual)
    #[arg(long, value_name = "FILE")]
    encoding: Option<PathBuf>,

    /// Root directory searched recursively for .eaf files
    #[arg(long, value_name = "DIR")]
    annotations: Option<PathBuf>,

    /// Directory receiving the JSON exports
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Worksheet holding the hierarchy
    #[arg(long, value_name = "NAME")]
    sheet: Option<String>,

    /// Config file (default: ~/.config/tav/config.toml if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Process a single EAF file instead of the annotations directory
    #[arg(long, value_name = "EAF")]
    file: Option<PathBuf>,

    /// Do not print the console summary
    #[arg(long)]
    no_summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let toml_config = TomlConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&toml_config.logging.level)),
        )
        .init();

    let overrides = SettingOverrides {
        encoding_file: args.encoding.as_deref(),
        annotations_dir: args.annotations.as_deref(),
        output_dir: args.output.as_deref(),
        sheet_name: args.sheet.as_deref(),
    };
    let settings = resolve_settings(&overrides, &toml_config)?;

    info!("Starting tav-extract {}", env!("CARGO_PKG_VERSION"));
    info!("Encoding workbook: {}", settings.encoding_file.display());

    let hierarchies = load_workbook(&settings.encoding_file, &settings.sheet_name)
        .with_context(|| {
            format!(
                "Failed to load task hierarchy from {}",
                settings.encoding_file.display()
            )
        })?;

    let mut pipeline = Stage1Pipeline::new(hierarchies);

    let report = match &args.file {
        Some(file) => {
            let mut report = BatchReport::begin();
            report.documents_discovered = 1;
            match pipeline.process_file(file) {
                Ok(_) => report.record_success(file.clone()),
                Err(e) => {
                    tracing::warn!("Error processing {}: {}", file.display(), e);
                    report.record_failure(file.clone(), &e);
                }
            }
            report.finish();
            report
        }
        None => pipeline
            .process_directory(&settings.annotations_dir)
            .with_context(|| {
                format!(
                    "Failed to scan annotations directory {}",
                    settings.annotations_dir.display()
                )
            })?,
    };

    if !args.no_summary {
        println!("{}", SummaryFormatter::format_summary(&pipeline));
        println!("{}", SummaryFormatter::format_batch_report(&report));
    }

    let summary = ResultExporter::export(&pipeline, Some(&report), &settings.output_dir)
        .with_context(|| format!("Failed to export results to {}", settings.output_dir.display()))?;

    for line in summary.display_lines() {
        println!("{}", line);
    }

    Ok(())
}
