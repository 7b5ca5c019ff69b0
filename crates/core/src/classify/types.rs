use serde::Serialize;
use thiserror::Error;

/// The bucket a single token lands in.
///
/// Numeric variants carry the truncated integer value of the token so the
/// caller can sum without parsing twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Odd(i128),
    Even(i128),
    Alphabetic,
    Special,
    /// Matches no predicate. Dropped from every bucket and from the sum.
    Unclassified,
}

/// Output of [`classify`](super::classify).
///
/// Field names double as the wire format of the HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Odd numeric tokens in their original string form.
    pub odd_numbers: Vec<String>,
    /// Even numeric tokens in their original string form.
    pub even_numbers: Vec<String>,
    /// Alphabetic tokens, upper-cased.
    pub alphabets: Vec<String>,
    /// Special-character tokens as given.
    pub special_characters: Vec<String>,
    /// Base-10 sum of the truncated numeric values.
    pub sum: String,
    /// Reversed, alternating-case concatenation of the alphabetic tokens.
    pub concat_string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Invalid input: data must be an array")]
    NotAnArray,

    #[error("Invalid input: data array cannot be empty")]
    EmptyInput,

    #[error("Invalid input: element at index {index} is not a string")]
    NonStringToken { index: usize },
}
