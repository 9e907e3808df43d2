//! Receipt data models matching the JSON contract consumed by the upload
//! handler and UI.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchased line item recognized on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Trimmed, whitespace-collapsed item name.
    pub name: String,

    /// Non-negative price parsed from a German-formatted amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The complete scan result for one receipt text.
///
/// `calculated_sum` is always the 2-decimal rounded sum of the item prices.
/// It is deliberately not reconciled against `extracted_total`; discrepancy
/// detection is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Recognized items in appearance order.
    pub items: Vec<Item>,

    /// Sum of all item prices, rounded half-up to 2 decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub calculated_sum: Decimal,

    /// Parsed value of the first printed grand-total line, if any.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub extracted_total: Option<Decimal>,

    /// Original "NNN,NN" numeral text of the grand total, for display/audit.
    pub raw_total: Option<String>,

    /// Quantity-annotation spans removed before item extraction, in removal
    /// order (audit trail).
    pub removed_quantity_blocks: Vec<String>,
}

impl ScanResult {
    /// The all-empty result returned for absent or unrecognizable input.
    pub fn empty() -> Self {
        Self::default()
    }
}
