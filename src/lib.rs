// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod config;
mod error;
mod observability;
mod secondary_validation;
#[cfg(feature = "server")]
mod server;
mod validation_result;

// This is the public API of the NZ validators library
pub use config::{ConfigError, ServerConfig, ValidatorKind, BIND_ADDRESS_ENV_VAR, DEFAULT_PORT};
pub use error::{BankAccountError, ErrorCategory, IrdNumberError};
pub use observability::labels::Labels;
pub use observability::metrics::{MISSING_PARAMETER, VALIDATIONS};
pub use secondary_validation::{
    branch_ranges, check_digit, known_bank_codes, select_algorithm, AlgorithmConfig,
    ChecksumAlgorithm, NzBankAccountChecksum, NzIrdNumberChecksum, Validator, ACCOUNT_DIGITS,
};
#[cfg(feature = "server")]
pub use server::router;
pub use validation_result::ValidationResult;

/// Validates a New Zealand bank account number such as `01-0902-0068389-00`.
pub fn validate_nz_bank_account(account_number: &str) -> ValidationResult {
    NzBankAccountChecksum.validate(account_number)
}

/// Validates a New Zealand IRD number such as `49-091-850`.
pub fn validate_nz_ird_number(ird_number: &str) -> ValidationResult {
    NzIrdNumberChecksum.validate(ird_number)
}
