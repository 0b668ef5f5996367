use crate::error::IrdNumberError;
use crate::observability::labels::Labels;
use crate::observability::metrics::record_validation;
use crate::secondary_validation::Validator;
use crate::validation_result::ValidationResult;
use lazy_static::lazy_static;
use std::ops::RangeInclusive;

pub const VALIDATOR_NAME: &str = "nz_ird_number";

const PRIMARY_WEIGHTS: &[u32; 8] = &[3, 2, 7, 6, 5, 4, 3, 2];
// Only used when the primary weights give a check digit of 10
const SECONDARY_WEIGHTS: &[u32; 8] = &[7, 4, 3, 2, 5, 2, 7, 6];

const VALID_RANGE: RangeInclusive<u32> = 10_000_000..=150_000_000;
const UNUSABLE_CHECK_DIGIT: u32 = 10;

lazy_static! {
    static ref LABELS: Labels = Labels::for_validator(VALIDATOR_NAME);
}

/// New Zealand IRD (tax) number: 8 or 9 digits, the last one being a mod 11 check digit.
/// Spaces and dashes are ignored.
pub struct NzIrdNumberChecksum;

impl NzIrdNumberChecksum {
    pub fn validate(&self, ird_number: &str) -> ValidationResult {
        let result = check_ird_number(ird_number);
        record_validation(&LABELS, result.as_ref().err().map(IrdNumberError::category));
        result.into()
    }
}

impl Validator for NzIrdNumberChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        check_ird_number(regex_match).is_ok()
    }
}

/// 11 - (weighted sum mod 11), with a remainder of 0 giving 0. May return 10.
pub fn check_digit(base_digits: &[u32; 8], weights: &[u32; 8]) -> u32 {
    let sum: u32 = base_digits
        .iter()
        .zip(weights.iter())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match sum % 11 {
        0 => 0,
        remainder => 11 - remainder,
    }
}

fn check_ird_number(ird_number: &str) -> Result<(), IrdNumberError> {
    let cleaned: String = ird_number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IrdNumberError::NonDigit);
    }
    if !(8..=9).contains(&cleaned.len()) {
        return Err(IrdNumberError::InvalidLength);
    }

    let value: u32 = cleaned.parse().map_err(|_| IrdNumberError::NonDigit)?;
    if !VALID_RANGE.contains(&value) {
        return Err(IrdNumberError::OutOfRange);
    }

    let padded = format!("{cleaned:0>9}");
    let mut digits = padded.bytes().map(|b| u32::from(b - b'0'));

    let mut base_digits = [0; 8];
    for slot in base_digits.iter_mut() {
        *slot = digits.next().ok_or(IrdNumberError::InvalidLength)?;
    }
    let actual = digits.next().ok_or(IrdNumberError::InvalidLength)?;

    let mut expected = check_digit(&base_digits, PRIMARY_WEIGHTS);
    if expected == UNUSABLE_CHECK_DIGIT {
        expected = check_digit(&base_digits, SECONDARY_WEIGHTS);
        if expected == UNUSABLE_CHECK_DIGIT {
            return Err(IrdNumberError::UncomputableCheckDigit);
        }
    }

    if expected != actual {
        return Err(IrdNumberError::CheckDigitMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_ird_numbers() {
        let valid_ids = vec![
            "49091850",
            "100000008",
            "35901981",
            "49-091-850",
            "49 091 850",
            " 049-091-850 ",
            // secondary weights
            "10000191",
            "010000223",
        ];
        for id in valid_ids {
            println!("testing for input {}", id);
            assert!(NzIrdNumberChecksum.is_valid_match(id));
            assert_eq!(NzIrdNumberChecksum.validate(id), ValidationResult::valid());
        }
    }

    #[test]
    fn test_invalid_ird_numbers() {
        let invalid_ids = vec![
            ("12345678A", "IRD number must contain only digits"),
            ("", "IRD number must contain only digits"),
            (" - ", "IRD number must contain only digits"),
            ("4909185０", "IRD number must contain only digits"),
            ("1234567", "IRD number must be 8 or 9 digits"),
            ("9999999", "IRD number must be 8 or 9 digits"),
            ("1234567890", "IRD number must be 8 or 9 digits"),
            (
                "09999999",
                "IRD number out of valid range (10,000,000 - 150,000,000)",
            ),
            (
                "150000001",
                "IRD number out of valid range (10,000,000 - 150,000,000)",
            ),
            (
                "49091851",
                "IRD number failed checksum validation (expected check digit: 0, got: 1)",
            ),
            (
                "12345678",
                "IRD number failed checksum validation (expected check digit: 4, got: 8)",
            ),
            (
                "150000000",
                "IRD number failed checksum validation (expected check digit: 9, got: 0)",
            ),
            (
                "10000050",
                "IRD number failed checksum validation (check digit would be 10)",
            ),
        ];
        for (id, error) in invalid_ids {
            println!("testing for input {}", id);
            assert!(!NzIrdNumberChecksum.is_valid_match(id));
            assert_eq!(
                NzIrdNumberChecksum.validate(id),
                ValidationResult::invalid(error)
            );
        }
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(check_digit(&[0, 4, 9, 0, 9, 1, 8, 5], PRIMARY_WEIGHTS), 0);
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0], PRIMARY_WEIGHTS), 8);
        assert_eq!(check_digit(&[0, 1, 0, 0, 0, 0, 0, 0], PRIMARY_WEIGHTS), 9);
        assert_eq!(check_digit(&[0, 1, 0, 0, 0, 0, 0, 0], SECONDARY_WEIGHTS), 7);
    }
}
