//! Amount extraction for bullion invoices.

use lazy_static::lazy_static;
use regex::Captures;
use rust_decimal::Decimal;

use super::patterns::{GST_AMOUNT, PRODUCT_LINE, TOTAL_INVOICE_VALUE, TRAILING_AMOUNT};
use super::{FieldExtractor, Rule, RuleSet, Scope};

lazy_static! {
    /// Net amount: last decimal token of the first product line.
    pub static ref NET_AMOUNT_RULES: RuleSet<Decimal> = RuleSet::new(
        "amount_without_gst",
        vec![Rule {
            name: "product_line_trailing_amount",
            scope: Scope::Line,
            pattern: &PRODUCT_LINE,
            extract: trailing_amount,
        }],
    );

    pub static ref GST_AMOUNT_RULES: RuleSet<Decimal> = RuleSet::new(
        "gst_amount",
        vec![Rule {
            name: "gst_with_qualifier",
            scope: Scope::Text,
            pattern: &GST_AMOUNT,
            extract: first_group_amount,
        }],
    );

    pub static ref TOTAL_AMOUNT_RULES: RuleSet<Decimal> = RuleSet::new(
        "total_amount",
        vec![Rule {
            name: "total_invoice_value",
            scope: Scope::Text,
            pattern: &TOTAL_INVOICE_VALUE,
            extract: first_group_amount,
        }],
    );
}

fn trailing_amount(caps: &Captures<'_>) -> Option<Decimal> {
    let line = caps.get(0)?.as_str();
    let amount = TRAILING_AMOUNT.captures(line)?;
    parse_amount(&amount[1])
}

fn first_group_amount(caps: &Captures<'_>) -> Option<Decimal> {
    parse_amount(caps.get(1)?.as_str())
}

/// Extract the net (pre-GST) amount from document text.
pub fn extract_net_amount(text: &str) -> Option<Decimal> {
    NET_AMOUNT_RULES.extract(text)
}

/// Extract the GST amount from document text.
pub fn extract_gst_amount(text: &str) -> Option<Decimal> {
    GST_AMOUNT_RULES.extract(text)
}

/// Extract the total invoice value from document text.
pub fn extract_total_amount(text: &str) -> Option<Decimal> {
    TOTAL_AMOUNT_RULES.extract(text)
}

/// Parse a free-form amount (e.g. "₹ 1,234.56") into an exact decimal.
///
/// Everything except ASCII digits and the decimal point is dropped. Empty or
/// malformed input yields `None`; the value is never rounded.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str_exact(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount_strips_noise() {
        assert_eq!(parse_amount("1234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("  ₹ 1,234.56 "), Some(dec("1234.56")));
        assert_eq!(parse_amount("$12,345,678.90"), Some(dec("12345678.90")));
        assert_eq!(parse_amount("€1000"), Some(dec("1000")));
        assert_eq!(parse_amount("0.5"), Some(dec("0.5")));
    }

    #[test]
    fn test_parse_amount_keeps_scale() {
        let amount = parse_amount("1030.00").unwrap();
        assert_eq!(amount.to_string(), "1030.00");
        assert_eq!(amount.scale(), 2);
    }

    #[test]
    fn test_parse_amount_absent() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("₹ , $"), None);
        assert_eq!(parse_amount("n/a"), None);
    }

    #[test]
    fn test_parse_amount_malformed() {
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("v1.0.2"), None);
    }

    #[test]
    fn test_extract_net_amount_from_product_line() {
        let text = "Invoice\nSILVER24 6.4604 150.28 970.87\nGST(3%) 29.13";
        assert_eq!(extract_net_amount(text), Some(dec("970.87")));

        let text = "Product: GOLD22K 2 5200.00 10400.50  \n";
        assert_eq!(extract_net_amount(text), Some(dec("10400.50")));
    }

    #[test]
    fn test_extract_net_amount_with_thousands_separator() {
        let text = "GOLD22K 10.000 6,500.00 65,000.00";
        assert_eq!(extract_net_amount(text), Some(dec("65000.00")));

        let text = "SILVER24 6.4604 150.28 1,970.87";
        assert_eq!(extract_net_amount(text), Some(dec("1970.87")));

        // Letterhead lines are not product lines.
        let text = "Goldsmiths Bullion 1,000.00\nGOLD 1 ₹ 2,500.50";
        assert_eq!(extract_net_amount(text), Some(dec("2500.50")));
    }

    #[test]
    fn test_extract_net_amount_needs_trailing_decimal() {
        assert_eq!(extract_net_amount("SILVER24 qty 6"), None);
        assert_eq!(extract_net_amount("no product here 1.00"), None);
        // First product line wins even when a later one has an amount.
        assert_eq!(extract_net_amount("SILVER24\nGOLD 1.00"), None);
    }

    #[test]
    fn test_extract_gst_amount() {
        assert_eq!(extract_gst_amount("GST(3%) 29.13"), Some(dec("29.13")));
        assert_eq!(extract_gst_amount("gst ( 3% ) ₹ 1,029.13"), Some(dec("1029.13")));
        assert_eq!(extract_gst_amount("GST 29.13"), None);
    }

    #[test]
    fn test_extract_total_amount() {
        assert_eq!(extract_total_amount("TOTAL INVOICE VALUE 1000"), Some(dec("1000")));
        assert_eq!(
            extract_total_amount("Total  Invoice\tValue ₹1,000.50"),
            Some(dec("1000.50"))
        );
        assert_eq!(extract_total_amount("TOTAL 1000"), None);
    }
}
