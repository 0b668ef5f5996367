use afl::fuzz;
use nz_validators::{ValidationResult, Validator, ValidatorKind};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    // The first byte picks the validator, the rest is the input
    let (selector, input) = bytes.split_first()?;
    let input = std::str::from_utf8(input).ok()?;

    let kind = if selector % 2 == 0 {
        ValidatorKind::NzBankAccount
    } else {
        ValidatorKind::NzIrdNumber
    };
    run_fuzz(kind, input);

    Some(())
}

fn run_fuzz(kind: ValidatorKind, input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Validator: {:?}", kind);
        println!("Input: {:?}", input);
    }

    let result = kind.validate(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Result: {:?}", result);
    }

    // an error is present exactly when the input is rejected
    assert_eq!(result.is_valid(), result.error().is_none());
    assert_eq!(result.is_valid(), kind.is_valid_match(input));

    // validation is pure
    assert_eq!(kind.validate(input), result);

    let json = serde_json_roundtrip(&result);
    assert_eq!(json, result);
}

fn serde_json_roundtrip(result: &ValidationResult) -> ValidationResult {
    let json = serde_json::to_string(result).unwrap();
    serde_json::from_str(&json).unwrap()
}
