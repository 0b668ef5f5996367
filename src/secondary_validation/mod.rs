mod nz_bank_account_checksum;
mod nz_ird_number_checksum;

use crate::config::ValidatorKind;
pub use crate::secondary_validation::nz_bank_account_checksum::{
    branch_ranges, known_bank_codes, select_algorithm, AlgorithmConfig, ChecksumAlgorithm,
    NzBankAccountChecksum, ACCOUNT_DIGITS,
};
pub use crate::secondary_validation::nz_ird_number_checksum::{check_digit, NzIrdNumberChecksum};
use crate::validation_result::ValidationResult;

pub(crate) use crate::secondary_validation::nz_bank_account_checksum::VALIDATOR_NAME as NZ_BANK_ACCOUNT;
pub(crate) use crate::secondary_validation::nz_ird_number_checksum::VALIDATOR_NAME as NZ_IRD_NUMBER;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

impl Validator for ValidatorKind {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            ValidatorKind::NzBankAccount => NzBankAccountChecksum.is_valid_match(regex_match),
            ValidatorKind::NzIrdNumber => NzIrdNumberChecksum.is_valid_match(regex_match),
        }
    }
}

impl ValidatorKind {
    pub fn validate(&self, input: &str) -> ValidationResult {
        match self {
            ValidatorKind::NzBankAccount => NzBankAccountChecksum.validate(input),
            ValidatorKind::NzIrdNumber => NzIrdNumberChecksum.validate(input),
        }
    }
}
