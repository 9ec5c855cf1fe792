//! Input sanitization.
//!
//! Only digits and `+ - * / ( ) .` ever reach the parser. Everything else,
//! including blanks, is dropped.

/// Characters allowed in an expression, besides ASCII digits.
pub const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '(', ')', '.'];

/// Whether `c` may appear in an expression.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || OPERATOR_CHARS.contains(&c)
}

/// Remove every character that may not appear in an expression.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|&c| is_allowed(c)).collect()
}
