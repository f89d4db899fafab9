//! Upload command - ingest a single invoice file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use aura_core::{Upload, UploadKind, UploadOutcome};

use super::output::{format_record, format_records, OutputFormat};
use super::{load_config, open_service, Service};

/// Arguments for the upload command.
#[derive(Args)]
pub struct UploadArgs {
    /// Input file (PDF or CSV)
    #[arg(required = true)]
    input: PathBuf,

    /// Owner of the invoice; overrides a user id column in CSV files
    #[arg(short, long)]
    user_id: Option<i64>,

    /// Declared content type (e.g. "text/csv"); defaults to none
    #[arg(long)]
    content_type: Option<String>,

    /// Ingest every CSV row instead of only the first
    #[arg(long)]
    all_rows: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub async fn run(args: UploadArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let service = open_service(&config);

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let upload = read_upload(&args.input, args.content_type.as_deref())?;
    info!("Uploading {} as {:?}", args.input.display(), upload.kind());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(match upload.kind() {
        UploadKind::Csv => "Parsing CSV rows...",
        UploadKind::Document => "Extracting document text...",
    });

    let outcomes = ingest(&service, &upload, args.user_id, args.all_rows);
    pb.finish_and_clear();
    let outcomes = outcomes?;

    let output = match outcomes.as_slice() {
        [single] => format_record(&single.record, args.format)?,
        many => {
            let records: Vec<_> = many.iter().map(|o| o.record.clone()).collect();
            format_records(&records, args.format)?
        }
    };
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    if let Some(outcome) = outcomes.last() {
        eprintln!(
            "{} {} invoice(s) stored, ledger at {}",
            style("✓").green(),
            outcomes.len(),
            outcome.ledger_path.display()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read a file into an upload named after the file.
pub fn read_upload(path: &Path, content_type: Option<&str>) -> anyhow::Result<Upload> {
    let data = fs::read(path)?;
    let mut upload = Upload::new(data);
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        upload = upload.with_file_name(name);
    }
    if let Some(content_type) = content_type {
        upload = upload.with_content_type(content_type);
    }
    Ok(upload)
}

pub fn ingest(
    service: &Service,
    upload: &Upload,
    user_id: Option<i64>,
    all_rows: bool,
) -> anyhow::Result<Vec<UploadOutcome>> {
    if all_rows {
        Ok(service.upload_all(upload, user_id)?)
    } else {
        Ok(vec![service.upload(upload, user_id)?])
    }
}
