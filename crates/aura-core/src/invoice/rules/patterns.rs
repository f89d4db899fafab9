//! Common regex patterns for bullion invoice extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whole-token date shapes used by the date parser
    pub static ref DATE_DMY_EXACT: Regex = Regex::new(
        r"^(\d{2})/(\d{2})/(\d{4})$"
    ).unwrap();

    pub static ref DATE_ISO_EXACT: Regex = Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})$"
    ).unwrap();

    // Labeled date: "Date: 2025-10-28", "DATE 28/10/2025"
    pub static ref LABELED_DATE: Regex = Regex::new(
        r"(?i)Date\s*:?\s*(\d{4}-\d{2}-\d{2}|\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Any dd/mm/yyyy token
    pub static ref DATE_DMY_ANYWHERE: Regex = Regex::new(
        r"(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Product label: "Product: SILVER24"
    pub static ref PRODUCT_LABEL: Regex = Regex::new(
        r"(?i)Product\s*:?\s*([A-Z0-9]+)"
    ).unwrap();

    // Line starting with a metal name, optionally followed by a purity code
    // that begins with a digit: "GOLD22K ...", "SILVER24 ...", "PLATINUM bar"
    pub static ref METAL_LINE: Regex = Regex::new(
        r"(?i)^((?:GOLD|SILVER|PLATINUM|PALLADIUM)(?:[0-9][A-Z0-9]*)?)\b"
    ).unwrap();

    // Whole product line: "SILVER24 6.4604 150.28 970.87"
    pub static ref PRODUCT_LINE: Regex = Regex::new(
        r"(?i)^(?:Product\s*:?\s*)?(?:GOLD|SILVER|PLATINUM|PALLADIUM)(?:[0-9][A-Z0-9]*)?\b.*$"
    ).unwrap();

    // Whole decimal token closing a line, thousands separators included
    pub static ref TRAILING_AMOUNT: Regex = Regex::new(
        r"(?:^|\s)([₹$€£]?[0-9][0-9,]*[.,][0-9]+)\s*$"
    ).unwrap();

    // Tax line: "GST(3%) 29.13", "GST (3%) ₹ 1,029.13"
    pub static ref GST_AMOUNT: Regex = Regex::new(
        r"(?i)GST\s*\([^)]*\)\s*([₹$€£]?\s*[0-9][0-9,]*[.,][0-9]+)"
    ).unwrap();

    // Grand total: "TOTAL INVOICE VALUE 1000", "Total Invoice Value ₹1,000.00"
    pub static ref TOTAL_INVOICE_VALUE: Regex = Regex::new(
        r"(?i)TOTAL\s+INVOICE\s+VALUE\s*([₹$€£]?\s*[0-9][0-9,]*(?:\.[0-9]+)?)"
    ).unwrap();
}
