use crate::error::BankAccountError;
use crate::secondary_validation::sum_all_digits;
use strum::{Display, EnumIter};

/// Number of digits in a normalized account: bank (2) + branch (4) + base (8) + suffix (4).
pub const ACCOUNT_DIGITS: usize = 18;

/// Banks whose algorithm depends on the account base: A below the threshold, B otherwise.
const AB_BANKS: &[&str] = &[
    "01", "02", "03", "06", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19", "20", "21",
    "22", "23", "24", "27", "30", "35", "38",
];

const AB_ALGORITHM_THRESHOLD: u32 = 990_000;

pub struct AlgorithmConfig {
    pub weights: [u32; ACCOUNT_DIGITS],
    pub modulo: u32,
    /// Replace every non-zero product by the sum of its digits before accumulating
    pub add_digits: bool,
}

const ALGORITHM_A: AlgorithmConfig = AlgorithmConfig {
    weights: [0, 0, 6, 3, 7, 9, 0, 0, 10, 5, 8, 4, 2, 1, 0, 0, 0, 0],
    modulo: 11,
    add_digits: false,
};
const ALGORITHM_B: AlgorithmConfig = AlgorithmConfig {
    weights: [0, 0, 0, 0, 0, 0, 0, 0, 10, 5, 8, 4, 2, 1, 0, 0, 0, 0],
    modulo: 11,
    add_digits: false,
};
const ALGORITHM_D: AlgorithmConfig = AlgorithmConfig {
    weights: [0, 0, 0, 0, 0, 0, 7, 6, 5, 4, 3, 2, 1, 0, 0, 0, 0, 0],
    modulo: 11,
    add_digits: false,
};
const ALGORITHM_E: AlgorithmConfig = AlgorithmConfig {
    weights: [0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 4, 3, 2, 0, 0, 0, 1, 0],
    modulo: 11,
    add_digits: true,
};
const ALGORITHM_F: AlgorithmConfig = AlgorithmConfig {
    weights: [0, 0, 0, 0, 0, 0, 1, 7, 3, 1, 7, 3, 1, 0, 0, 0, 0, 0],
    modulo: 10,
    add_digits: false,
};
const ALGORITHM_G: AlgorithmConfig = AlgorithmConfig {
    weights: [0, 0, 0, 0, 0, 0, 1, 3, 7, 1, 3, 7, 1, 0, 3, 7, 1, 0],
    modulo: 10,
    add_digits: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ChecksumAlgorithm {
    A,
    B,
    D,
    E,
    F,
    G,
    /// No checksum, every account passes
    X,
}

impl ChecksumAlgorithm {
    pub fn config(self) -> Option<&'static AlgorithmConfig> {
        match self {
            ChecksumAlgorithm::A => Some(&ALGORITHM_A),
            ChecksumAlgorithm::B => Some(&ALGORITHM_B),
            ChecksumAlgorithm::D => Some(&ALGORITHM_D),
            ChecksumAlgorithm::E => Some(&ALGORITHM_E),
            ChecksumAlgorithm::F => Some(&ALGORITHM_F),
            ChecksumAlgorithm::G => Some(&ALGORITHM_G),
            ChecksumAlgorithm::X => None,
        }
    }

    /// Algorithm for banks that always use the same one, regardless of the account base.
    fn fixed_for_bank(bank: &str) -> Option<Self> {
        match bank {
            "08" => Some(ChecksumAlgorithm::D),
            "09" => Some(ChecksumAlgorithm::E),
            "25" | "33" => Some(ChecksumAlgorithm::F),
            "26" | "28" | "29" => Some(ChecksumAlgorithm::G),
            "31" => Some(ChecksumAlgorithm::X),
            _ => None,
        }
    }

    /// Runs the weighted sum over a normalized 18 digit account.
    pub fn accepts(self, account: &[u32; ACCOUNT_DIGITS]) -> bool {
        let Some(config) = self.config() else {
            return true;
        };

        let sum: u32 = account
            .iter()
            .zip(config.weights.iter())
            .filter(|(_, weight)| **weight != 0)
            .map(|(digit, weight)| {
                let product = digit * weight;
                if config.add_digits && product > 0 {
                    sum_all_digits(product)
                } else {
                    product
                }
            })
            .sum();

        sum % config.modulo == 0
    }
}

/// Picks the checksum algorithm for a bank.
///
/// `padded_base` must be the 8 character, zero padded account base.
pub fn select_algorithm(
    bank: &str,
    padded_base: &str,
) -> Result<ChecksumAlgorithm, BankAccountError> {
    if AB_BANKS.iter().any(|ab_bank| *ab_bank == bank) {
        // A non numeric base cannot be below the threshold, its checksum fails later anyway
        let algorithm = match padded_base.parse::<u32>() {
            Ok(base) if base < AB_ALGORITHM_THRESHOLD => ChecksumAlgorithm::A,
            _ => ChecksumAlgorithm::B,
        };
        return Ok(algorithm);
    }

    ChecksumAlgorithm::fixed_for_bank(bank).ok_or_else(|| BankAccountError::UnknownBankCode {
        bank: bank.to_string(),
    })
}
