//! Rule-based field extractors for bullion invoices.
//!
//! Every field is extracted by an ordered [`RuleSet`]: the first rule whose
//! pattern matches and whose extractor yields a value wins. Fields never
//! depend on each other, so one field's absence cannot block another.

pub mod amounts;
pub mod dates;
pub mod metal;
pub mod patterns;

pub use amounts::{extract_gst_amount, extract_net_amount, extract_total_amount, parse_amount};
pub use dates::{extract_invoice_date, parse_date};
pub use metal::extract_metal_type;

use regex::{Captures, Regex};
use tracing::trace;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// Where a rule's pattern is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Against the whole document text.
    Text,
    /// Against each line in turn; the first matching line is used.
    Line,
}

/// A tagged pattern paired with the function turning its match into a value.
pub struct Rule<T> {
    /// Name reported in trace output.
    pub name: &'static str,
    pub scope: Scope,
    pub pattern: &'static Regex,
    pub extract: fn(&Captures<'_>) -> Option<T>,
}

impl<T> Rule<T> {
    /// Apply the rule to the first match of its pattern only.
    pub fn apply(&self, text: &str) -> Option<T> {
        let caps = match self.scope {
            Scope::Text => self.pattern.captures(text),
            Scope::Line => text.lines().find_map(|line| self.pattern.captures(line)),
        }?;
        (self.extract)(&caps)
    }
}

/// Ordered list of rules for one field, evaluated first-match-wins.
pub struct RuleSet<T> {
    field: &'static str,
    rules: Vec<Rule<T>>,
}

impl<T> RuleSet<T> {
    pub fn new(field: &'static str, rules: Vec<Rule<T>>) -> Self {
        Self { field, rules }
    }

    /// Name of the field this set extracts.
    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl<T> FieldExtractor for RuleSet<T> {
    type Output = T;

    fn extract(&self, text: &str) -> Option<T> {
        self.rules.iter().find_map(|rule| {
            let value = rule.apply(text);
            if value.is_some() {
                trace!("{}: matched rule {}", self.field, rule.name);
            }
            value
        })
    }
}
