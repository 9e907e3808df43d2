//! Grand-total line recognition.

use rust_decimal::Decimal;

use super::amounts::parse_german_amount;
use super::patterns::{TOTAL_AMOUNT, TOTAL_KEYWORD};

/// The first recognized grand-total line, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotalMatch {
    /// Original "NNN,NN" numeral text.
    pub raw_total: Option<String>,
    /// Parsed numeric value.
    pub extracted_total: Option<Decimal>,
}

/// Locate the first printed grand-total line.
///
/// A line beginning with SUMME, Gesamtbetrag, Gesamt or Total whose
/// remainder, or the immediately following line (optionally via an EUR
/// token), carries a `NNN,NN` amount. Only the first match is used; later
/// total-looking lines are ignored by design, even when the first one is a
/// subtotal.
pub fn extract_total(text: &str) -> TotalMatch {
    let lines: Vec<&str> = text.split('\n').collect();

    for (i, line) in lines.iter().enumerate() {
        let Some(keyword) = TOTAL_KEYWORD.find(line) else {
            continue;
        };

        let mut window = line[keyword.end()..].to_string();
        if let Some(next) = lines.get(i + 1) {
            window.push('\n');
            window.push_str(next);
        }

        if let Some(caps) = TOTAL_AMOUNT.captures(&window) {
            let raw = caps[1].to_string();
            if let Some(value) = parse_german_amount(&raw) {
                return TotalMatch {
                    raw_total: Some(raw),
                    extracted_total: Some(value),
                };
            }
        }
    }

    TotalMatch::default()
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
    fn test_amount_on_keyword_line() {
        let total = extract_total("Brot\n1,99\nSUMME 4,48");
        assert_eq!(total.raw_total.as_deref(), Some("4,48"));
        assert_eq!(total.extracted_total, Some(dec("4.48")));
    }

    #[test]
    fn test_eur_token_on_next_line() {
        let total = extract_total("SUMME\nEUR 12,34");
        assert_eq!(total.raw_total.as_deref(), Some("12,34"));
        assert_eq!(total.extracted_total, Some(dec("12.34")));
    }

    #[test]
    fn test_bare_amount_on_next_line() {
        let total = extract_total("GESAMT\n4,48");
        assert_eq!(total.raw_total.as_deref(), Some("4,48"));
        assert_eq!(total.extracted_total, Some(dec("4.48")));
    }

    #[test]
    fn test_first_match_wins() {
        let total = extract_total("Gesamt 10,00\nSUMME 20,00");
        assert_eq!(total.raw_total.as_deref(), Some("10,00"));
        assert_eq!(total.extracted_total, Some(dec("10.00")));
    }

    #[test]
    fn test_keyword_without_amount_falls_through() {
        let total = extract_total("Gesamt\nkein Betrag\nTotal 5,00");
        assert_eq!(total.raw_total.as_deref(), Some("5,00"));
        assert_eq!(total.extracted_total, Some(dec("5.00")));
    }

    #[test]
    fn test_no_total() {
        let total = extract_total("Brot\n1,99");
        assert_eq!(total, TotalMatch::default());

        let total = extract_total("");
        assert_eq!(total, TotalMatch::default());
    }
}
