use super::types::Classification;

/// Parse a token as a finite number, consuming the whole token.
///
/// Accepts Rust's `f64` literal grammar (sign, fraction, exponent). Non-finite
/// spellings such as `inf` or `NaN` are rejected.
pub fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn is_number(token: &str) -> bool {
    parse_number(token).is_some()
}

/// Non-empty and made only of ASCII letters.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// Non-empty and made only of characters that are not ASCII letters, ASCII
/// digits or whitespace.
pub fn is_special(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
}

/// Truncated integer value of a numeric token and whether it is even.
///
/// Integer literals are taken exactly. Everything else is truncated toward
/// zero and the value saturates at the `i128` bounds. Parity always follows
/// the unclamped value: the last digit for integer literals, the float
/// otherwise.
fn truncate(token: &str, value: f64) -> (i128, bool) {
    if let Ok(exact) = token.parse::<i128>() {
        return (exact, exact % 2 == 0);
    }

    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if let Some(last) = digits
        .bytes()
        .last()
        .filter(|_| digits.bytes().all(|b| b.is_ascii_digit()))
    {
        return (value.trunc() as i128, (last - b'0') % 2 == 0);
    }

    let truncated = value.trunc();
    (truncated as i128, truncated % 2.0 == 0.0)
}

/// Classify one token. Predicates run in a fixed order: number, alphabetic,
/// special. The first match wins.
pub fn classify_token(token: &str) -> Classification {
    if let Some(value) = parse_number(token) {
        let (truncated, even) = truncate(token, value);
        return if even {
            Classification::Even(truncated)
        } else {
            Classification::Odd(truncated)
        };
    }

    if is_alphabetic(token) {
        return Classification::Alphabetic;
    }

    if is_special(token) {
        return Classification::Special;
    }

    Classification::Unclassified
}
