//! Iranian national identity number (کد ملی) checksum.
//!
//! A candidate is ten digits. The first nine are weighted 10 down to 2 and
//! summed. With `r = sum % 11`, the tenth digit must equal `r` when `r < 2`
//! and `11 - r` otherwise. The ten single-digit repetitions pass the
//! checksum arithmetic but are never issued, so they are rejected up front.

use crate::domain::model::DigitPolicy;
use serde::{Deserialize, Serialize};

pub const NATIONAL_ID_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }
}

/// Why a candidate was rejected. Only for diagnostics; `validate` never
/// distinguishes between these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    WrongLength,
    RepeatedDigit,
    NonDigit,
    ChecksumMismatch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NationalIdValidator {
    policy: DigitPolicy,
}

impl NationalIdValidator {
    pub fn new(policy: DigitPolicy) -> Self {
        Self { policy }
    }

    pub fn strict() -> Self {
        Self::new(DigitPolicy::Strict)
    }

    pub fn policy(&self) -> DigitPolicy {
        self.policy
    }

    pub fn validate(&self, candidate: &str) -> Verdict {
        self.rejection(candidate).is_none().into()
    }

    /// First rule the candidate breaks, in checking order, or `None` when valid.
    pub fn rejection(&self, candidate: &str) -> Option<Rejection> {
        let chars: Vec<char> = candidate.chars().collect();
        if chars.len() != NATIONAL_ID_LENGTH {
            return Some(Rejection::WrongLength);
        }

        if is_repeated_digit(&chars) {
            return Some(Rejection::RepeatedDigit);
        }

        if self.policy == DigitPolicy::Strict && !chars.iter().all(char::is_ascii_digit) {
            return Some(Rejection::NonDigit);
        }

        // Permissive scoring: anything that is not an ASCII digit counts as 0.
        let digits: Vec<u32> = chars.iter().map(|c| c.to_digit(10).unwrap_or(0)).collect();

        let mut first_nine = [0u32; 9];
        first_nine.copy_from_slice(&digits[..9]);

        if digits[9] == expected_check_digit(first_nine) {
            None
        } else {
            Some(Rejection::ChecksumMismatch)
        }
    }
}

fn is_repeated_digit(chars: &[char]) -> bool {
    match chars.first() {
        Some(first) if first.is_ascii_digit() => chars.iter().all(|c| c == first),
        _ => false,
    }
}

/// Check digit implied by the first nine digits.
pub fn expected_check_digit(first_nine: [u32; 9]) -> u32 {
    let sum: u32 = first_nine
        .iter()
        .zip((2..=10).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        remainder
    } else {
        11 - remainder
    }
}

/// Validates with the default (permissive) policy.
pub fn is_valid_national_id(candidate: &str) -> bool {
    NationalIdValidator::default().validate(candidate).is_valid()
}

/// What the national-ID input keeps while typing: ASCII digits, at most ten.
pub fn sanitize_national_id_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(NATIONAL_ID_LENGTH)
        .collect()
}
