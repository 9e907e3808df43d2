//! Line-classification patterns for German receipt extraction.
//!
//! The grammar is line-oriented: every pattern is anchored to the start of a
//! single line, and the rule modules walk classified lines with a small state
//! machine instead of backtracking across the whole text. All matching of
//! unit and keyword tokens is case-insensitive.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Quantity annotations, e.g. "3 Stk Apfel x 1,99". The two-line variant
    // carries the unit price on the following line by itself.
    pub static ref QTY_TWO_LINE_HEAD: Regex = Regex::new(
        r"(?i)^\s*\d+\s*(?:stk|stücke|stück)?.*\sx\s*$"
    ).unwrap();

    pub static ref QTY_SINGLE_LINE: Regex = Regex::new(
        r"(?i)^\s*\d+\s*(?:stk|stücke|stück)?.*\sx\s.*\d+,\d{2}"
    ).unwrap();

    // A line holding nothing but a German-formatted amount.
    pub static ref AMOUNT_ONLY: Regex = Regex::new(
        r"^\s*(\d+,\d{2})\s*$"
    ).unwrap();

    // Item price line: a bare amount, optionally tagged with a single
    // trailing letter (VAT class or currency letter).
    pub static ref PRICE_LINE: Regex = Regex::new(
        r"^\s*(\d+,\d{2})(?:\s*[A-Za-zÄÖÜäöüß])?\s*$"
    ).unwrap();

    // Lines that must never start an item name.
    pub static ref RESERVED_NAME_START: Regex = Regex::new(
        r"(?i)^\s*(?:summe|gesamtbetrag|gesamt|eur|brutto|steuer)"
    ).unwrap();

    // Candidate item name: starts with an uppercase letter, umlaut or digit,
    // restricted charset, at most 120 characters.
    pub static ref NAME_LINE: Regex = Regex::new(
        r#"^\s*([A-ZÄÖÜ0-9][0-9A-Za-zÄÖÜäöüß%&().,:/+'" -]{0,119})"#
    ).unwrap();

    // Unit/total tokens that disqualify a line from being skipped as an item
    // name continuation.
    pub static ref CONTINUATION_BLOCKER: Regex = Regex::new(
        r"(?i)\b(?:stk|stücke|stück|x|kg|g|l|ml|summe|gesamt)\b"
    ).unwrap();

    // Grand-total keyword at start of line.
    pub static ref TOTAL_KEYWORD: Regex = Regex::new(
        r"(?i)^\s*(?:summe|gesamtbetrag|gesamt|total)"
    ).unwrap();

    // First amount after a total keyword, within the same or the next line.
    pub static ref TOTAL_AMOUNT: Regex = Regex::new(
        r"(\d+,\d{2})"
    ).unwrap();
}
