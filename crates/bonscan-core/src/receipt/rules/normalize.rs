//! Line-ending and whitespace normalization for raw OCR text.

/// Canonicalize line endings and per-line whitespace.
///
/// Absent input maps to the empty string. `\r\n` and lone `\r` become `\n`,
/// trailing whitespace is stripped from every line and remaining tabs are
/// replaced with single spaces. Idempotent and infallible.
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified
        .split('\n')
        .map(|line| line.trim_end().replace('\t', " "))
        .collect::<Vec<_>>()
        .join("\n")
}
