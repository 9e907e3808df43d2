//! Rule-based receipt scanner tying the extraction stages together.

use std::time::Instant;

use tracing::debug;

use crate::error::{Result, ScanError};
use crate::models::receipt::ScanResult;

use super::ReceiptParser;
use super::rules::{extract_items, extract_total, normalize, strip_quantity_blocks, sum_items};

/// Default input ceiling for the checked entry point. The upload handler
/// enforces its own limit upstream; this is a defensive backstop.
const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;

/// Rule-based receipt scanner.
///
/// Stateless between calls; each scan is a pure function of its input and
/// safe to run concurrently on different texts.
pub struct ReceiptScanner {
    /// Maximum input length in bytes accepted by [`Self::scan_checked`].
    max_input_len: usize,
}

impl ReceiptScanner {
    /// Create a scanner with default settings.
    pub fn new() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }

    /// Set the input ceiling for [`Self::scan_checked`].
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Run the full pipeline: normalize, strip quantity blocks, extract
    /// items and total, compute the calculated sum.
    ///
    /// Never fails; absent input and garbage both yield the all-empty
    /// result.
    pub fn scan(&self, text: Option<&str>) -> ScanResult {
        let start = Instant::now();

        let normalized = normalize(text);
        let stripped = strip_quantity_blocks(&normalized);
        let items = extract_items(&stripped.text);
        let total = extract_total(&stripped.text);
        let calculated_sum = sum_items(&items);

        debug!(
            items = items.len(),
            removed_blocks = stripped.removed.len(),
            total_found = total.extracted_total.is_some(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "receipt scan finished"
        );

        ScanResult {
            items,
            calculated_sum,
            extracted_total: total.extracted_total,
            raw_total: total.raw_total,
            removed_quantity_blocks: stripped.removed,
        }
    }

    /// Like [`Self::scan`], but rejects inputs beyond the configured size
    /// ceiling before any matching runs.
    pub fn scan_checked(&self, text: Option<&str>) -> Result<ScanResult> {
        if let Some(text) = text {
            if text.len() > self.max_input_len {
                return Err(ScanError::InputTooLarge {
                    size: text.len(),
                    limit: self.max_input_len,
                });
            }
        }
        Ok(self.scan(text))
    }
}

impl Default for ReceiptScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for ReceiptScanner {
    fn parse(&self, text: Option<&str>) -> ScanResult {
        self.scan(text)
    }
}

/// Scan receipt text with default settings.
pub fn scan_receipt(text: &str) -> ScanResult {
    ReceiptScanner::new().scan(Some(text))
}
