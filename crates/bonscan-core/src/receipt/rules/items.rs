//! Item extraction: name/price line pairs from stripped receipt text.

use std::collections::HashSet;

use crate::models::receipt::Item;

use super::amounts::parse_german_amount;
use super::patterns::{CONTINUATION_BLOCKER, NAME_LINE, PRICE_LINE, RESERVED_NAME_START};

/// Names that are fragments of a total line, never items.
const TOTAL_FRAGMENTS: [&str; 3] = ["SUMME", "GESAMT", "TOTAL"];

/// Extract deduplicated items in appearance order.
///
/// A candidate opens on a name line (not starting with a reserved total
/// keyword), skips continuation lines free of unit/total tokens, and closes
/// on the next bare price line. Candidates with an unparseable amount or a
/// total-fragment name are dropped, not zeroed.
pub fn extract_items(text: &str) -> Vec<Item> {
    let lines: Vec<&str> = text.split('\n').collect();

    // Byte offset of each line start, used as the match position in the
    // deduplication signature.
    let mut offsets = Vec::with_capacity(lines.len());
    let mut pos = 0;
    for line in &lines {
        offsets.push(pos);
        pos += line.len() + 1;
    }

    let mut items = Vec::new();
    let mut seen: HashSet<(String, String, usize)> = HashSet::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if RESERVED_NAME_START.is_match(line) {
            i += 1;
            continue;
        }
        let Some(caps) = NAME_LINE.captures(line) else {
            i += 1;
            continue;
        };
        let raw_name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

        // Walk forward: the price line terminates the item, a line carrying
        // a unit/total token aborts the candidate, anything else is an
        // ignorable continuation.
        let mut j = i + 1;
        let mut raw_price = None;
        while j < lines.len() {
            if let Some(pcaps) = PRICE_LINE.captures(lines[j]) {
                raw_price = Some(pcaps[1].to_string());
                break;
            }
            if CONTINUATION_BLOCKER.is_match(lines[j]) {
                break;
            }
            j += 1;
        }

        let Some(raw_price) = raw_price else {
            i += 1;
            continue;
        };
        let Some(price) = parse_german_amount(&raw_price) else {
            i = j + 1;
            continue;
        };

        let name = collapse_whitespace(raw_name);
        if is_total_fragment(&name) {
            i = j + 1;
            continue;
        }

        let signature = (name.clone(), format!("{:.2}", price), offsets[i]);
        if seen.insert(signature) {
            items.push(Item::new(name, price));
        }
        i = j + 1;
    }

    items
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_total_fragment(name: &str) -> bool {
    let upper = name.to_uppercase();
    TOTAL_FRAGMENTS.contains(&upper.as_str())
}
