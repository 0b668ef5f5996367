use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Outcome of a single validation. `error` is set if and only if the input was rejected.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<E: Display> From<Result<(), E>> for ValidationResult {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => ValidationResult::valid(),
            Err(err) => ValidationResult::invalid(err.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::BankAccountError;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn valid_result_omits_error() {
        assert_eq!(
            serde_json::to_string(&ValidationResult::valid()).unwrap(),
            r#"{"isValid":true}"#
        );
    }

    #[test]
    fn invalid_result_tokens() {
        assert_tokens(
            &ValidationResult::invalid("Bank code must be 2 digits"),
            &[
                Token::Struct {
                    name: "ValidationResult",
                    len: 2,
                },
                Token::Str("isValid"),
                Token::Bool(false),
                Token::Str("error"),
                Token::Some,
                Token::Str("Bank code must be 2 digits"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn from_result() {
        let ok: Result<(), BankAccountError> = Ok(());
        assert_eq!(ValidationResult::from(ok), ValidationResult::valid());

        let result = ValidationResult::from(Err::<(), _>(BankAccountError::ChecksumMismatch));
        assert!(!result.is_valid());
        assert_eq!(
            result.error(),
            Some("Account number failed checksum validation")
        );
    }

    #[test]
    fn error_is_set_only_when_invalid() {
        let results = [
            ValidationResult::valid(),
            ValidationResult::invalid("IRD number must be 8 or 9 digits"),
            ValidationResult::from(Ok::<(), BankAccountError>(())),
            ValidationResult::from(Err::<(), _>(BankAccountError::InvalidFormat)),
        ];
        for result in results {
            assert_eq!(result.is_valid(), result.error().is_none(), "{result:?}");
        }
    }

    #[test]
    fn deserializes_without_error_field() {
        let result: ValidationResult = serde_json::from_str(r#"{"isValid":true}"#).unwrap();
        assert_eq!(result, ValidationResult::valid());
    }
}
