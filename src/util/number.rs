//! Lenient decimal integer parsing.
//!
//! Log fields are sometimes followed by units or punctuation (`44203776,`,
//! `512kB`). Parsing consumes an optional sign and as many leading decimal
//! digits as possible and ignores whatever follows.

/// Parses the leading decimal integer of `input`.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is accepted, then
/// digits are consumed until the first non-digit. Returns `None` when there
/// are no leading digits or the value does not fit in `i64`.
///
/// ```
/// use memplot::util::parse_leading_int;
///
/// assert_eq!(parse_leading_int("4096kB"), Some(4096));
/// assert_eq!(parse_leading_int("kB"), None);
/// ```
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        let d = i64::from(b - b'0');
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(d)?
        } else {
            value.checked_add(d)?
        };
    }
    Some(value)
}

/// Like [`parse_leading_int`] but rejects a `-` sign. A `+` sign is accepted.
pub fn parse_leading_uint(input: &str) -> Option<u64> {
    let s = input.trim_start();
    if s.starts_with('-') {
        return None;
    }
    parse_leading_int(s).and_then(|v| u64::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int("44203776"), Some(44203776));
        assert_eq!(parse_leading_int("007"), Some(7));
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_leading_int("7796032,"), Some(7796032));
        assert_eq!(parse_leading_int("12abc34"), Some(12));
        assert_eq!(parse_leading_int("1.5"), Some(1));
        assert_eq!(parse_leading_int("0x10"), Some(0));
    }

    #[test]
    fn test_sign_and_whitespace() {
        assert_eq!(parse_leading_int("-42"), Some(-42));
        assert_eq!(parse_leading_int("+42"), Some(42));
        assert_eq!(parse_leading_int("  42"), Some(42));
    }

    #[test]
    fn test_no_leading_digits() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("- 1"), None);
    }

    #[test]
    fn test_overflow_and_extremes() {
        assert_eq!(parse_leading_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_leading_int("9223372036854775808"), None);
    }

    #[test]
    fn test_unsigned_sign_handling() {
        assert_eq!(parse_leading_uint("59s"), Some(59));
        assert_eq!(parse_leading_uint("-1"), None);
        assert_eq!(parse_leading_uint("-0"), None);
        assert_eq!(parse_leading_uint("+1"), Some(1));
        assert_eq!(parse_leading_uint("+"), None);
    }
}
