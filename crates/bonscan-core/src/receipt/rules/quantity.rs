//! Removal of quantity/unit-price annotations before item extraction.

use super::patterns::{AMOUNT_ONLY, QTY_SINGLE_LINE, QTY_TWO_LINE_HEAD};

/// Text with quantity blocks deleted, plus the removed spans for audit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrippedText {
    pub text: String,
    pub removed: Vec<String>,
}

/// Delete "N units x price" annotations from the text.
///
/// The two-line pattern (head line ending in a bare `x`, amount-only line
/// below) runs first so the single-line pattern cannot consume half of a
/// two-line block. Matched lines are deleted outright, not blanked, and
/// appended to `removed` in encounter order.
pub fn strip_quantity_blocks(text: &str) -> StrippedText {
    let mut removed = Vec::new();

    let lines: Vec<&str> = text.split('\n').collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        if i + 1 < lines.len()
            && QTY_TWO_LINE_HEAD.is_match(lines[i])
            && AMOUNT_ONLY.is_match(lines[i + 1])
        {
            removed.push(format!("{}\n{}", lines[i], lines[i + 1]));
            i += 2;
            continue;
        }
        kept.push(lines[i]);
        i += 1;
    }

    let mut residual: Vec<&str> = Vec::with_capacity(kept.len());
    for line in kept {
        if QTY_SINGLE_LINE.is_match(line) {
            removed.push(line.to_string());
        } else {
            residual.push(line);
        }
    }

    StrippedText {
        text: residual.join("\n"),
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_line_block() {
        let stripped = strip_quantity_blocks("3 Stk Apfel x\n0,79\nBirne\n1,20");
        assert_eq!(stripped.text, "Birne\n1,20");
        assert_eq!(stripped.removed, vec!["3 Stk Apfel x\n0,79".to_string()]);
    }

    #[test]
    fn test_single_line_block() {
        let stripped = strip_quantity_blocks("Brot\n1,99\n2 Stück Brezel x 0,50\nMilch\n2,49");
        assert_eq!(stripped.text, "Brot\n1,99\nMilch\n2,49");
        assert_eq!(stripped.removed, vec!["2 Stück Brezel x 0,50".to_string()]);
    }

    #[test]
    fn test_two_line_pass_runs_first() {
        // The head line of a two-line block must not survive into the
        // single-line pass, and removal order lists two-line blocks first.
        let text = "4 x 0,25\n3 Stk Apfel x\n0,79";
        let stripped = strip_quantity_blocks(text);
        assert_eq!(stripped.text, "");
        assert_eq!(
            stripped.removed,
            vec!["3 Stk Apfel x\n0,79".to_string(), "4 x 0,25".to_string()]
        );
    }

    #[test]
    fn test_head_without_amount_line_is_kept() {
        let stripped = strip_quantity_blocks("3 Stk Apfel x\nBirne\n1,20");
        assert_eq!(stripped.text, "3 Stk Apfel x\nBirne\n1,20");
        assert!(stripped.removed.is_empty());
    }

    #[test]
    fn test_no_blocks() {
        let stripped = strip_quantity_blocks("Brot\n1,99");
        assert_eq!(stripped.text, "Brot\n1,99");
        assert!(stripped.removed.is_empty());
    }
}
