use crate::domain::model::DigitPolicy;
use regex::Regex;
use std::sync::LazyLock;

pub const MOBILE_PREFIX: &str = "09";
pub const MOBILE_LENGTH: usize = 11;

static MOBILE_GROUPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})(\d{3})(\d{4})").expect("static mobile pattern"));

/// What the phone input keeps while typing: digits and dashes. Once an `09`
/// number reaches eleven characters its first eleven-digit run is grouped
/// as `09XX-XXX-XXXX`.
pub fn sanitize_phone_input(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    if cleaned.chars().count() >= MOBILE_LENGTH && cleaned.starts_with(MOBILE_PREFIX) {
        MOBILE_GROUPS.replace(&cleaned, "$1-$2-$3").into_owned()
    } else {
        cleaned
    }
}

/// Strips dashes and whitespace.
pub fn normalize_phone_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

pub fn is_valid_phone_number(raw: &str, policy: DigitPolicy) -> bool {
    let clean = normalize_phone_number(raw);

    if !clean.starts_with(MOBILE_PREFIX) || clean.chars().count() != MOBILE_LENGTH {
        return false;
    }

    match policy {
        DigitPolicy::Permissive => true,
        DigitPolicy::Strict => clean.chars().all(|c| c.is_ascii_digit()),
    }
}

/// Outcome of checking a phone value as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneCheck {
    /// What the input field would show after sanitising.
    pub display: String,
    pub valid: bool,
}

/// Validates `raw` itself; the sanitised form is only for display.
pub fn check_phone_number(raw: &str, policy: DigitPolicy) -> PhoneCheck {
    PhoneCheck {
        display: sanitize_phone_input(raw),
        valid: is_valid_phone_number(raw, policy),
    }
}
