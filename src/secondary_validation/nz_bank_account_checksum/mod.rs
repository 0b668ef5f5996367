mod algorithm;
mod branch_ranges;

pub use algorithm::{select_algorithm, AlgorithmConfig, ChecksumAlgorithm, ACCOUNT_DIGITS};
pub use branch_ranges::{branch_ranges, known_bank_codes};

use crate::error::BankAccountError;
use crate::observability::labels::Labels;
use crate::observability::metrics::record_validation;
use crate::secondary_validation::Validator;
use crate::validation_result::ValidationResult;
use branch_ranges::parse_branch;
use lazy_static::lazy_static;

pub const VALIDATOR_NAME: &str = "nz_bank_account";

lazy_static! {
    static ref LABELS: Labels = Labels::for_validator(VALIDATOR_NAME);
}

/// New Zealand bank account number, written `XX-XXXX-XXXXXXX-XXX` or with spaces
/// between the four parts (bank, branch, base, suffix).
pub struct NzBankAccountChecksum;

impl NzBankAccountChecksum {
    pub fn validate(&self, account_number: &str) -> ValidationResult {
        let result = check_account(account_number);
        record_validation(&LABELS, result.as_ref().err().map(BankAccountError::category));
        result.into()
    }
}

impl Validator for NzBankAccountChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        check_account(regex_match).is_ok()
    }
}

struct AccountParts<'a> {
    bank: &'a str,
    branch: &'a str,
    base: &'a str,
    suffix: &'a str,
}

fn split_parts(account_number: &str) -> Result<AccountParts<'_>, BankAccountError> {
    let parts: Vec<&str> = if account_number.contains('-') {
        account_number.split('-').map(str::trim).collect()
    } else {
        account_number.split_whitespace().collect()
    };

    let [bank, branch, base, suffix] = <[&str; 4]>::try_from(parts)
        .map_err(|_| BankAccountError::InvalidFormat)?;

    // lengths are in UTF-16 code units
    let bank_len = bank.encode_utf16().count();
    let branch_len = branch.encode_utf16().count();
    let base_len = base.encode_utf16().count();
    let suffix_len = suffix.encode_utf16().count();

    if bank_len != 2 {
        return Err(BankAccountError::InvalidBankCodeLength);
    }
    if branch_len > 4 {
        return Err(BankAccountError::InvalidBranchLength);
    }
    if !(7..=8).contains(&base_len) {
        return Err(BankAccountError::InvalidBaseLength);
    }
    if suffix_len > 4 {
        return Err(BankAccountError::InvalidSuffixLength);
    }

    Ok(AccountParts {
        bank,
        branch,
        base,
        suffix,
    })
}

fn check_bank_branch(bank: &str, branch: &str) -> Result<(), BankAccountError> {
    let ranges = branch_ranges(bank).ok_or_else(|| BankAccountError::InvalidBankCode {
        bank: bank.to_string(),
    })?;

    let is_known_branch = parse_branch(branch)
        .map(|branch_number| ranges.iter().any(|range| range.contains(&branch_number)))
        .unwrap_or(false);

    if !is_known_branch {
        return Err(BankAccountError::InvalidBranch {
            bank: bank.to_string(),
            branch: branch.to_string(),
        });
    }
    Ok(())
}

/// Digits of the zero padded account, `None` if any character is not a digit.
fn account_digits(normalized: &str) -> Option<[u32; ACCOUNT_DIGITS]> {
    let mut digits = [0; ACCOUNT_DIGITS];
    let mut chars = normalized.chars();
    for slot in digits.iter_mut() {
        *slot = chars.next()?.to_digit(10)?;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(digits)
}

fn check_account(account_number: &str) -> Result<(), BankAccountError> {
    let parts = split_parts(account_number)?;
    check_bank_branch(parts.bank, parts.branch)?;

    let bank = format!("{:0>2}", parts.bank);
    let branch = format!("{:0>4}", parts.branch);
    let base = format!("{:0>8}", parts.base);
    let suffix = format!("{:0>4}", parts.suffix);

    let algorithm = select_algorithm(&bank, &base)?;
    let normalized = format!("{bank}{branch}{base}{suffix}");

    let passes = match algorithm {
        ChecksumAlgorithm::X => true,
        _ => account_digits(&normalized)
            .map(|digits| algorithm.accepts(&digits))
            .unwrap_or(false),
    };

    if passes {
        Ok(())
    } else {
        Err(BankAccountError::ChecksumMismatch)
    }
}
