//! Classifies an already-dequoted lexeme into a [`Scalar`].
//!
//! This is the parser's lowering step: turns a bare string lexeme into a
//! typed [`Scalar`].

use crate::scalar::Scalar;

/// Classify a raw, already-assembled lexeme (quoting already resolved) into
/// a [`Scalar`]. Call sites that know the lexeme was explicitly quoted
/// should skip this and construct `Scalar::String` directly.
pub fn infer(raw: &str) -> Scalar {
    if raw == "null" {
        return Scalar::Null;
    }
    if raw == "true" || raw == "on" {
        return Scalar::Boolean(true);
    }
    if raw == "false" || raw == "off" {
        return Scalar::Boolean(false);
    }
    if let Some(kind) = classify_numeric(raw) {
        return kind;
    }
    Scalar::String(raw.to_string())
}

/// Every character a digit, at most one `.`, non-empty. No sign handling —
/// the current grammar has none.
fn classify_numeric(raw: &str) -> Option<Scalar> {
    if raw.is_empty() {
        return None;
    }
    let mut seen_dot = false;
    for c in raw.chars() {
        if c == '.' {
            if seen_dot {
                return None;
            }
            seen_dot = true;
        } else if !c.is_ascii_digit() {
            return None;
        }
    }
    if seen_dot {
        raw.parse::<f64>().ok().map(Scalar::Double)
    } else {
        raw.parse::<i64>().ok().map(Scalar::Integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_null_bool_aliases() {
        assert_eq!(infer("null"), Scalar::Null);
        assert_eq!(infer("true"), Scalar::Boolean(true));
        assert_eq!(infer("on"), Scalar::Boolean(true));
        assert_eq!(infer("false"), Scalar::Boolean(false));
        assert_eq!(infer("off"), Scalar::Boolean(false));
    }

    #[test]
    fn infers_integer_and_double() {
        assert_eq!(infer("42"), Scalar::Integer(42));
        assert_eq!(infer("5.0"), Scalar::Double(5.0));
        assert_eq!(infer("3.14"), Scalar::Double(3.14));
    }

    #[test]
    fn multiple_dots_is_a_string() {
        assert_eq!(infer("1.2.3"), Scalar::String("1.2.3".to_string()));
    }

    #[test]
    fn anything_else_is_a_string() {
        assert_eq!(infer("cat"), Scalar::String("cat".to_string()));
        assert_eq!(infer("-5"), Scalar::String("-5".to_string()));
        assert_eq!(infer(""), Scalar::String(String::new()));
    }
}
