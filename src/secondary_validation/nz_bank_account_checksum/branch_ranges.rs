use ahash::AHashMap;
use lazy_static::lazy_static;
use std::ops::RangeInclusive;

// Valid branch numbers per bank code, inclusive on both ends.
const BANK_BRANCH_RANGES: &[(&str, &[RangeInclusive<u32>])] = &[
    ("01", &[1..=999, 1100..=1199, 1800..=1899]),
    ("02", &[1..=999, 1200..=1299]),
    (
        "03",
        &[1..=999, 1300..=1399, 1500..=1599, 1700..=1799, 1900..=1999],
    ),
    ("06", &[1..=999, 1400..=1499]),
    ("08", &[6500..=6599]),
    ("09", &[0..=0]),
    ("10", &[5165..=5169]),
    ("11", &[5000..=6499, 6600..=8999]),
    ("12", &[3000..=3299, 3400..=3499, 3600..=3699]),
    ("13", &[4900..=4999]),
    ("14", &[4700..=4799]),
    ("15", &[3900..=3999]),
    ("16", &[4400..=4499]),
    ("17", &[3300..=3399]),
    ("18", &[3500..=3599]),
    ("19", &[4600..=4649]),
    ("20", &[4100..=4199]),
    ("21", &[4800..=4899]),
    ("22", &[4000..=4049]),
    ("23", &[3700..=3799]),
    ("24", &[4300..=4349]),
    ("25", &[2500..=2599]),
    ("26", &[2600..=2699]),
    ("27", &[3800..=3849]),
    ("28", &[2100..=2149]),
    ("29", &[2150..=2299]),
    ("30", &[2900..=2949]),
    ("31", &[2800..=2849]),
    ("33", &[6700..=6799]),
    ("35", &[2400..=2499]),
    ("38", &[9000..=9499]),
];

lazy_static! {
    static ref BRANCH_RANGES_BY_BANK: AHashMap<&'static str, &'static [RangeInclusive<u32>]> =
        BANK_BRANCH_RANGES.iter().copied().collect();
}

/// Branch ranges registered for a bank, or `None` if the bank code is unknown.
pub fn branch_ranges(bank: &str) -> Option<&'static [RangeInclusive<u32>]> {
    BRANCH_RANGES_BY_BANK.get(bank).copied()
}

/// All bank codes with registered branch ranges, in ascending order.
pub fn known_bank_codes() -> impl Iterator<Item = &'static str> {
    BANK_BRANCH_RANGES.iter().map(|(bank, _)| *bank)
}

/// Reads the leading digits of a branch, after an optional `+`. Trailing characters are
/// ignored here and fail the checksum later. `None` when no digit comes first.
pub fn parse_branch(branch: &str) -> Option<u32> {
    let unsigned = branch.strip_prefix('+').unwrap_or(branch);
    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    unsigned[..digit_count].parse().ok()
}
