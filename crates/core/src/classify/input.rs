use serde_json::Value;

use super::types::ClassifyError;

/// Turn a decoded `data` field into a token list.
///
/// The value must be a non-empty array of JSON strings. Missing fields should
/// be passed as [`Value::Null`].
pub fn parse_tokens(value: &Value) -> Result<Vec<String>, ClassifyError> {
    let items = value.as_array().ok_or(ClassifyError::NotAnArray)?;

    if items.is_empty() {
        return Err(ClassifyError::EmptyInput);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or(ClassifyError::NonStringToken { index })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_tokens_array_of_strings() {
        let tokens = parse_tokens(&json!(["a", "1", "$"])).unwrap();
        assert_eq!(tokens, vec!["a", "1", "$"]);
    }

    #[test]
    fn test_parse_tokens_not_an_array() {
        assert_eq!(
            parse_tokens(&json!("not an array")),
            Err(ClassifyError::NotAnArray)
        );
        assert_eq!(parse_tokens(&json!({"a": 1})), Err(ClassifyError::NotAnArray));
        assert_eq!(parse_tokens(&Value::Null), Err(ClassifyError::NotAnArray));
    }

    #[test]
    fn test_parse_tokens_empty_array() {
        assert_eq!(parse_tokens(&json!([])), Err(ClassifyError::EmptyInput));
    }

    #[test]
    fn test_parse_tokens_reports_first_non_string() {
        assert_eq!(
            parse_tokens(&json!(["a", 1, null])),
            Err(ClassifyError::NonStringToken { index: 1 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClassifyError::NotAnArray.to_string(),
            "Invalid input: data must be an array"
        );
        assert_eq!(
            ClassifyError::EmptyInput.to_string(),
            "Invalid input: data array cannot be empty"
        );
        assert_eq!(
            ClassifyError::NonStringToken { index: 3 }.to_string(),
            "Invalid input: element at index 3 is not a string"
        );
    }
}
