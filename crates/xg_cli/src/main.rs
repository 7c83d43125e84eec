//! Shot enrichment CLI
//!
//! Pairs per-match shot and tracking files, enriches every shot with the
//! pitch geometry at its aligned tracking frame, and writes the feature
//! table to CSV for the downstream model.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use xg_core::{io, process_matches, EnrichedShot};

#[derive(Parser)]
#[command(name = "xg_cli")]
#[command(about = "Enrich shot events with tracking-frame geometry", long_about = None)]
struct Cli {
    /// Input files: per-match `<key>.json` shots and
    /// `<key>_tracking_data.jsonl` tracking sources
    #[arg(required = true)]
    input_files: Vec<PathBuf>,

    /// Player identity map JSON (event id -> tracking id)
    #[arg(long)]
    player_map: PathBuf,

    /// Team identity map JSON (event id -> tracking id)
    #[arg(long)]
    team_map: PathBuf,

    /// Output CSV path
    #[arg(long)]
    output: PathBuf,

    /// Write only the model's feature columns, dropping incomplete rows
    #[arg(long, default_value = "false")]
    model_features: bool,

    /// Output run-summary metadata JSON
    #[arg(long)]
    metadata: Option<PathBuf>,
}

/// Summary of one enrichment run.
#[derive(Debug, Serialize)]
struct RunMetadata {
    input_files: usize,
    rows_enriched: usize,
    rows_written: usize,
    created_at: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let maps = io::load_identity_maps(&cli.player_map, &cli.team_map)
        .context("failed to load identity maps")?;

    let rows = process_matches(&cli.input_files, &maps)?;

    let written = if cli.model_features {
        write_model_features(&rows, &cli.output)?
    } else {
        write_enriched(&rows, &cli.output)?
    };
    println!("Wrote {} row(s) to {}", written, cli.output.display());

    if let Some(metadata_path) = &cli.metadata {
        let meta = RunMetadata {
            input_files: cli.input_files.len(),
            rows_enriched: rows.len(),
            rows_written: written,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        save_metadata(metadata_path, &meta)?;
        println!("Metadata saved to {}", metadata_path.display());
    }

    Ok(())
}

/// Write the full feature table.
fn write_enriched(rows: &[EnrichedShot], path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Write only the model's expected columns, keeping complete rows.
fn write_model_features(rows: &[EnrichedShot], path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut written = 0;
    for row in rows {
        match row.model_features() {
            Some(features) => {
                writer.serialize(features)?;
                written += 1;
            }
            None => log::debug!("dropping incomplete row at t={:.2}", row.video_timestamp),
        }
    }
    writer.flush()?;

    if written < rows.len() {
        log::warn!("dropped {} incomplete row(s) from model output", rows.len() - written);
    }
    Ok(written)
}

fn save_metadata(path: &Path, meta: &RunMetadata) -> Result<()> {
    let json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write metadata to {}", path.display()))?;
    Ok(())
}
