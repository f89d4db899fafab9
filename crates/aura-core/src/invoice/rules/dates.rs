//! Date extraction for bullion invoices.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::patterns::{DATE_DMY_ANYWHERE, DATE_DMY_EXACT, DATE_ISO_EXACT, LABELED_DATE};
use super::{FieldExtractor, Rule, RuleSet, Scope};

lazy_static! {
    pub static ref DATE_RULES: RuleSet<NaiveDate> = RuleSet::new(
        "invoice_date",
        vec![
            Rule {
                name: "labeled_date",
                scope: Scope::Text,
                pattern: &LABELED_DATE,
                extract: first_group_date,
            },
            Rule {
                name: "any_dmy_date",
                scope: Scope::Text,
                pattern: &DATE_DMY_ANYWHERE,
                extract: first_group_date,
            },
        ],
    );
}

fn first_group_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    parse_date(caps.get(1)?.as_str())
}

/// Extract the invoice date from document text.
pub fn extract_invoice_date(text: &str) -> Option<NaiveDate> {
    DATE_RULES.extract(text)
}

/// Parse `dd/mm/yyyy` or `yyyy-mm-dd`, in that order of preference.
///
/// Returns `None` when neither shape matches or the values do not form a
/// real calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    parse_with(&DATE_DMY_EXACT, s, [3, 2, 1]).or_else(|| parse_with(&DATE_ISO_EXACT, s, [1, 2, 3]))
}

/// `order` gives the capture group indices of year, month, and day.
fn parse_with(pattern: &Regex, s: &str, order: [usize; 3]) -> Option<NaiveDate> {
    let caps = pattern.captures(s)?;
    let year: i32 = caps[order[0]].parse().ok()?;
    let month: u32 = caps[order[1]].parse().ok()?;
    let day: u32 = caps[order[2]].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_dmy() {
        assert_eq!(parse_date("01/03/2024"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_date(" 29/02/2024 "), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(parse_date("2025-10-28"), Some(ymd(2025, 10, 28)));
    }

    #[test]
    fn test_parse_date_rejects_invalid_calendar_values() {
        assert_eq!(parse_date("01/13/2024"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("30/02/2024"), None);
        assert_eq!(parse_date("29/02/2023"), None);
        assert_eq!(parse_date("00/01/2024"), None);
    }

    #[test]
    fn test_parse_date_rejects_other_shapes() {
        assert_eq!(parse_date("1/3/2024"), None);
        assert_eq!(parse_date("01.03.2024"), None);
        assert_eq!(parse_date("2024/03/01"), None);
        assert_eq!(parse_date("01/03/24"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("Date"), None);
    }

    #[test]
    fn test_extract_labeled_date() {
        let text = "Order 05/01/2025\nDate: 2025-10-28\n";
        assert_eq!(extract_invoice_date(text), Some(ymd(2025, 10, 28)));

        let text = "INVOICE DATE 28/10/2025";
        assert_eq!(extract_invoice_date(text), Some(ymd(2025, 10, 28)));
    }

    #[test]
    fn test_extract_date_fallback() {
        let text = "Bill no. 77\nIssued on 05/01/2025, due 05/02/2025";
        assert_eq!(extract_invoice_date(text), Some(ymd(2025, 1, 5)));
    }

    #[test]
    fn test_invalid_labeled_date_falls_back() {
        let text = "Date: 2025-13-40\nDelivered 02/11/2025";
        assert_eq!(extract_invoice_date(text), Some(ymd(2025, 11, 2)));
    }

    #[test]
    fn test_extract_date_absent() {
        assert_eq!(extract_invoice_date("no dates in here"), None);
    }
}
