//! Metal type / product code extraction.

use lazy_static::lazy_static;
use regex::Captures;

use super::patterns::{METAL_LINE, PRODUCT_LABEL};
use super::{FieldExtractor, Rule, RuleSet, Scope};

lazy_static! {
    pub static ref METAL_TYPE_RULES: RuleSet<String> = RuleSet::new(
        "metal_type",
        vec![
            Rule {
                name: "product_label",
                scope: Scope::Text,
                pattern: &PRODUCT_LABEL,
                extract: product_code,
            },
            Rule {
                name: "metal_line",
                scope: Scope::Line,
                pattern: &METAL_LINE,
                extract: metal_name,
            },
        ],
    );
}

/// Labeled product codes are kept verbatim.
fn product_code(caps: &Captures<'_>) -> Option<String> {
    Some(caps.get(1)?.as_str().trim().to_string())
}

fn metal_name(caps: &Captures<'_>) -> Option<String> {
    Some(caps.get(1)?.as_str().to_uppercase())
}

/// Extract the metal type or product code from document text.
pub fn extract_metal_type(text: &str) -> Option<String> {
    METAL_TYPE_RULES.extract(text)
}
