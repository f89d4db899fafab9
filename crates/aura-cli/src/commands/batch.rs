//! Batch command - ingest every invoice file matching a glob pattern.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use super::upload::{ingest, read_upload};
use super::{load_config, open_service, Service};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching PDF or CSV files
    #[arg(required = true)]
    input: String,

    /// Owner of every ingested invoice
    #[arg(short, long)]
    user_id: Option<i64>,

    /// Ingest every CSV row instead of only the first
    #[arg(long)]
    all_rows: bool,

    /// Also write a per-file report CSV to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of ingesting a single file.
struct FileResult {
    path: PathBuf,
    record_ids: Vec<i64>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let service = open_service(&config);

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "csv")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to ingest",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let file_start = Instant::now();
        let outcome = ingest_file(&service, &path, &args);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok(record_ids) => results.push(FileResult {
                path,
                record_ids,
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to ingest {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        record_ids: Vec::new(),
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to ingest {}: {}", path.display(), error_msg);
                    anyhow::bail!("Ingestion failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if let Some(report_path) = &args.report {
        write_report(report_path, &results)?;
        eprintln!(
            "{} Report written to {}",
            style("✓").green(),
            report_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let stored: usize = results.iter().map(|r| r.record_ids.len()).sum();

    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} invoices stored, {} files failed",
        style(stored).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn ingest_file(service: &Service, path: &Path, args: &BatchArgs) -> anyhow::Result<Vec<i64>> {
    let upload = read_upload(path, None)?;
    let outcomes = ingest(service, &upload, args.user_id, args.all_rows)?;
    Ok(outcomes.into_iter().map(|o| o.record.id).collect())
}

fn write_report(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["filename", "status", "record_ids", "processing_time_ms", "error"])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let ids = result
            .record_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";");
        let status = if result.error.is_some() { "error" } else { "success" };

        wtr.write_record([
            filename,
            status,
            ids.as_str(),
            result.processing_time_ms.to_string().as_str(),
            result.error.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
