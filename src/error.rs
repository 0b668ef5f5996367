use strum::{AsRefStr, Display};
use thiserror::Error;

/// Broad class of a validation failure, used to label metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    /// Wrong number of parts or part lengths
    Format,
    /// Unknown bank or branch
    Lookup,
    /// Non-digit input or value out of bounds
    Range,
    /// The weighted checksum did not hold
    Checksum,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankAccountError {
    #[error("Bank account must be in format: XX-XXXX-XXXXXXX-XXX")]
    InvalidFormat,

    #[error("Bank code must be 2 digits")]
    InvalidBankCodeLength,

    #[error("Branch must be 4 digits or less")]
    InvalidBranchLength,

    #[error("Account base must be 7-8 digits")]
    InvalidBaseLength,

    #[error("Account suffix must be 4 digits or less")]
    InvalidSuffixLength,

    #[error("Invalid bank code: {bank}")]
    InvalidBankCode { bank: String },

    #[error("Branch {branch} is not valid for bank {bank}")]
    InvalidBranch { bank: String, branch: String },

    /// The bank has branch ranges but no checksum algorithm assigned
    #[error("Unknown bank code: {bank}")]
    UnknownBankCode { bank: String },

    #[error("Account number failed checksum validation")]
    ChecksumMismatch,
}

impl BankAccountError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BankAccountError::InvalidFormat
            | BankAccountError::InvalidBankCodeLength
            | BankAccountError::InvalidBranchLength
            | BankAccountError::InvalidBaseLength
            | BankAccountError::InvalidSuffixLength => ErrorCategory::Format,
            BankAccountError::InvalidBankCode { .. }
            | BankAccountError::InvalidBranch { .. }
            | BankAccountError::UnknownBankCode { .. } => ErrorCategory::Lookup,
            BankAccountError::ChecksumMismatch => ErrorCategory::Checksum,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrdNumberError {
    #[error("IRD number must contain only digits")]
    NonDigit,

    #[error("IRD number must be 8 or 9 digits")]
    InvalidLength,

    #[error("IRD number out of valid range (10,000,000 - 150,000,000)")]
    OutOfRange,

    #[error("IRD number failed checksum validation (check digit would be 10)")]
    UncomputableCheckDigit,

    #[error(
        "IRD number failed checksum validation (expected check digit: {expected}, got: {actual})"
    )]
    CheckDigitMismatch { expected: u32, actual: u32 },
}

impl IrdNumberError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IrdNumberError::InvalidLength => ErrorCategory::Format,
            IrdNumberError::NonDigit | IrdNumberError::OutOfRange => ErrorCategory::Range,
            IrdNumberError::UncomputableCheckDigit | IrdNumberError::CheckDigitMismatch { .. } => {
                ErrorCategory::Checksum
            }
        }
    }
}
