//! Escaping of template text for embedding in compiled output.

/// Escapes `input` for use inside a double-quoted compiled string.
///
/// Backslash and double-quote characters are prefixed with a backslash;
/// literal newline, carriage-return, and tab characters become their
/// two-character escape sequences. No other characters are altered. Each
/// source character is consumed exactly once, so backslashes emitted by one
/// substitution are never re-escaped by another.
///
/// Not idempotent: applying it twice escapes the escapes.
pub fn escape_compiled_string(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
