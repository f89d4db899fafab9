//! Bullion invoice data models.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An invoice field set that has not been persisted yet.
///
/// Every field is optional: extraction is best-effort and an unmatched field
/// stays `None` instead of failing the whole upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceDraft {
    /// Owning user, when supplied explicitly or found as a leading CSV column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Invoice date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<NaiveDate>,

    /// Product code or metal name (e.g. `SILVER24`, `GOLD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metal_type: Option<String>,

    /// Net amount before GST.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_without_gst: Option<Decimal>,

    /// GST amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_amount: Option<Decimal>,

    /// Total invoice value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
}

impl InvoiceDraft {
    /// Names of the five core fields that are absent.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.invoice_date.is_none() {
            missing.push("invoice_date");
        }
        if self.metal_type.is_none() {
            missing.push("metal_type");
        }
        if self.amount_without_gst.is_none() {
            missing.push("amount_without_gst");
        }
        if self.gst_amount.is_none() {
            missing.push("gst_amount");
        }
        if self.total_amount.is_none() {
            missing.push("total_amount");
        }
        missing
    }
}

/// A persisted invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Store-assigned identifier.
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metal_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_without_gst: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,

    /// Creation timestamp (UTC).
    pub created_at: NaiveDateTime,

    /// Last update timestamp (UTC).
    pub updated_at: NaiveDateTime,
}

impl InvoiceRecord {
    /// Map a draft into a record with the given identifier and timestamp.
    pub fn from_draft(id: i64, draft: InvoiceDraft, now: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            invoice_date: draft.invoice_date,
            metal_type: draft.metal_type,
            amount_without_gst: draft.amount_without_gst,
            gst_amount: draft.gst_amount,
            total_amount: draft.total_amount,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Aggregated revenue figures over a set of invoices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Sum of every present total amount.
    pub total_revenue: Decimal,

    /// Sum of every present GST amount.
    pub total_gst: Decimal,

    /// Revenue keyed by month number (1-12), across all years.
    pub monthly_revenue: BTreeMap<u32, Decimal>,

    /// Revenue keyed by calendar year.
    pub yearly_revenue: BTreeMap<i32, Decimal>,
}

impl RevenueSummary {
    /// Summarize a slice of records.
    ///
    /// Monthly and yearly buckets only count records that carry both a date
    /// and a total.
    pub fn from_records(records: &[InvoiceRecord]) -> Self {
        let mut summary = Self::default();

        for record in records {
            if let Some(total) = record.total_amount {
                summary.total_revenue += total;
            }
            if let Some(gst) = record.gst_amount {
                summary.total_gst += gst;
            }

            let (Some(date), Some(total)) = (record.invoice_date, record.total_amount) else {
                continue;
            };
            *summary.monthly_revenue.entry(date.month()).or_default() += total;
            *summary.yearly_revenue.entry(date.year()).or_default() += total;
        }

        summary
    }
}
