use super::display::generate_alternating_caps_string;
use super::predicates::classify_token;
use super::types::{Classification, ClassificationResult, ClassifyError};

/// Partition tokens into buckets, sum the numeric ones and build the display
/// string from the alphabetic ones.
///
/// Tokens that match no predicate are dropped. The only failure is an empty
/// input sequence.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Result<ClassificationResult, ClassifyError> {
    if tokens.is_empty() {
        return Err(ClassifyError::EmptyInput);
    }

    let mut result = ClassificationResult::default();
    let mut sum: i128 = 0;
    let mut accumulator = String::new();

    for token in tokens {
        let token = token.as_ref();
        match classify_token(token) {
            Classification::Odd(value) => {
                result.odd_numbers.push(token.to_string());
                sum = sum.saturating_add(value);
            }
            Classification::Even(value) => {
                result.even_numbers.push(token.to_string());
                sum = sum.saturating_add(value);
            }
            Classification::Alphabetic => {
                result.alphabets.push(token.to_ascii_uppercase());
                accumulator.push_str(token);
            }
            Classification::Special => result.special_characters.push(token.to_string()),
            Classification::Unclassified => {}
        }
    }

    result.sum = sum.to_string();
    result.concat_string = generate_alternating_caps_string(&accumulator);

    Ok(result)
}
