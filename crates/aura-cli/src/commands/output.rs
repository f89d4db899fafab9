//! Output formatting shared by the commands.

use std::fmt::Display;

use aura_core::{InvoiceRecord, RevenueSummary};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

fn opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn opt_or_dash<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_else(|| "-".to_string())
}

pub fn format_records(records: &[InvoiceRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => format_records_csv(records),
        OutputFormat::Text => Ok(format_records_text(records)),
    }
}

pub fn format_record(record: &InvoiceRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        _ => format_records(std::slice::from_ref(record), format),
    }
}

fn format_records_csv(records: &[InvoiceRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "user_id",
        "invoice_date",
        "metal_type",
        "amount_without_gst",
        "gst_amount",
        "total_amount",
        "created_at",
    ])?;

    for record in records {
        wtr.write_record([
            &record.id.to_string(),
            &opt(&record.user_id),
            &opt(&record.invoice_date),
            &opt(&record.metal_type),
            &opt(&record.amount_without_gst),
            &opt(&record.gst_amount),
            &opt(&record.total_amount),
            &record.created_at.to_string(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_records_text(records: &[InvoiceRecord]) -> String {
    if records.is_empty() {
        return "No invoices.\n".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format!(
            "#{:<5} {:<10} {:<10} net {:>12}  gst {:>10}  total {:>12}",
            record.id,
            opt_or_dash(&record.invoice_date),
            opt_or_dash(&record.metal_type),
            opt_or_dash(&record.amount_without_gst),
            opt_or_dash(&record.gst_amount),
            opt_or_dash(&record.total_amount),
        ));
        if let Some(user_id) = record.user_id {
            output.push_str(&format!("  user {}", user_id));
        }
        output.push('\n');
    }
    output
}

pub fn format_summary(summary: &RevenueSummary, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["period", "key", "revenue"])?;
            wtr.write_record(["all", "total", summary.total_revenue.to_string().as_str()])?;
            wtr.write_record(["all", "gst", summary.total_gst.to_string().as_str()])?;
            for (month, revenue) in &summary.monthly_revenue {
                wtr.write_record(["month".to_string(), month.to_string(), revenue.to_string()])?;
            }
            for (year, revenue) in &summary.yearly_revenue {
                wtr.write_record(["year".to_string(), year.to_string(), revenue.to_string()])?;
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str(&format!("Total revenue: {}\n", summary.total_revenue));
            output.push_str(&format!("Total GST:     {}\n", summary.total_gst));

            if !summary.yearly_revenue.is_empty() {
                output.push_str("\nBy year:\n");
                for (year, revenue) in &summary.yearly_revenue {
                    output.push_str(&format!("  {}  {}\n", year, revenue));
                }
            }

            if !summary.monthly_revenue.is_empty() {
                output.push_str("\nBy month:\n");
                for (month, revenue) in &summary.monthly_revenue {
                    output.push_str(&format!("  {:>2}  {}\n", month, revenue));
                }
            }
            Ok(output)
        }
    }
}
