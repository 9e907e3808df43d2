//! Receipt text extraction module.

mod parser;
pub mod rules;

pub use parser::{ReceiptScanner, scan_receipt};

use crate::models::receipt::ScanResult;

/// Trait for receipt parsers.
///
/// The rule-based scanner is the only implementation here; a mapper over
/// pre-tagged document-AI entities would be a second one.
pub trait ReceiptParser {
    /// Parse receipt text into a structured result. Absent input is treated
    /// as empty and yields the all-empty result.
    fn parse(&self, text: Option<&str>) -> ScanResult;
}
