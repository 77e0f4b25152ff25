use festival_forms::core::national_id::{
    sanitize_national_id_input, NationalIdValidator, Rejection, NATIONAL_ID_LENGTH,
};
use festival_forms::{is_valid_national_id, DigitPolicy, Verdict};

#[test]
fn test_every_length_but_ten_is_invalid() {
    let validator = NationalIdValidator::default();
    for len in 0..=20 {
        let candidate = "0010008942".chars().cycle().take(len).collect::<String>();
        let verdict = validator.validate(&candidate);
        if len == NATIONAL_ID_LENGTH {
            assert_eq!(verdict, Verdict::Valid);
        } else {
            assert_eq!(verdict, Verdict::Invalid, "length {len}");
        }
    }
}

#[test]
fn test_single_check_digit_per_prefix() {
    // exactly one of the ten possible check digits is accepted
    for prefix in ["001000894", "123456789", "200000001", "000000121", "460896888"] {
        let accepted: Vec<u32> = (0..=9)
            .filter(|d| is_valid_national_id(&format!("{prefix}{d}")))
            .collect();
        assert_eq!(accepted.len(), 1, "prefix {prefix}: {accepted:?}");
    }
}

#[test]
fn test_remainder_ten_maps_to_check_digit_one() {
    // sum 10 -> remainder 10 -> needs check digit 1
    assert!(is_valid_national_id("0000000051"));
    // sum 0 with nonzero check digit is never valid
    assert!(!is_valid_national_id("0000000001"));
}

#[test]
fn test_mixed_input_never_panics() {
    for policy in [DigitPolicy::Permissive, DigitPolicy::Strict] {
        let validator = NationalIdValidator::new(policy);
        for candidate in ["00100089-2", "۰۰۱۰۰۰۸۹۴۲", "          ", "001000894\n", "🙂🙂🙂🙂🙂🙂🙂🙂🙂🙂"] {
            let _ = validator.validate(candidate);
        }
    }
}

#[test]
fn test_strict_and_permissive_agree_on_plain_digits() {
    let permissive = NationalIdValidator::new(DigitPolicy::Permissive);
    let strict = NationalIdValidator::new(DigitPolicy::Strict);
    for n in (0u64..10_000_000_000).step_by(7_919_191) {
        let candidate = format!("{n:010}");
        assert_eq!(permissive.validate(&candidate), strict.validate(&candidate), "{candidate}");
    }
}

#[test]
fn test_sanitized_input_is_scored_as_typed() {
    let typed = "0010-0089-42";
    let sanitized = sanitize_national_id_input(typed);
    assert_eq!(sanitized, "0010008942");
    assert!(is_valid_national_id(&sanitized));
    assert_eq!(
        NationalIdValidator::default().rejection(typed),
        Some(Rejection::WrongLength)
    );
}
