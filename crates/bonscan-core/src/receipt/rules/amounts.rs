//! German amount parsing, formatting and the calculated-sum reconciliation.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::models::receipt::Item;

/// Parse a German-formatted amount (e.g. "4,48").
///
/// Everything except digits, comma, dot and minus is stripped, the decimal
/// comma is substituted with a dot and the remainder parsed. Malformed input
/// yields `None`; callers skip such candidates rather than zeroing them.
pub fn parse_german_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    let normalized = cleaned.replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format an amount in German style with a decimal comma (4,48).
pub fn format_german_amount(amount: Decimal) -> String {
    format!("{:.2}", amount).replace('.', ",")
}

/// Sum item prices into the calculated total.
///
/// Summation is exact; rounding to 2 decimals happens half-up at the final
/// step only. Empty input sums to 0. The result is never compared against
/// the printed total here.
pub fn sum_items(items: &[Item]) -> Decimal {
    items
        .iter()
        .map(|item| item.price)
        .sum::<Decimal>()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
