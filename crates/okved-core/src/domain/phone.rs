use crate::error::NormalizeError;
use serde::Serialize;
use std::fmt;

const CANONICAL_PREFIX: &str = "+79";
const CANONICAL_LEN: usize = 12;

/// A Russian mobile number in the canonical `+79XXXXXXXXX` shape.
///
/// Only [`normalize_phone`] produces values of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number without its leading `+`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn normalize_phone(raw: &str) -> Result<PhoneNumber, NormalizeError> {
    let trimmed = raw.trim();
    let has_plus = trimmed.starts_with('+');
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();

    let Some(first) = digits.chars().next() else {
        return Err(NormalizeError::NoDigits);
    };

    let rewritten = match (has_plus, first, digits.len()) {
        (true, '7', 11) => format!("+{digits}"),
        (false, '8', 11) => format!("+7{}", &digits[1..]),
        (false, '7', 11) => format!("+{digits}"),
        (false, '9', 10) => format!("+7{digits}"),
        _ => return Err(NormalizeError::UnsupportedFormat),
    };

    if !is_canonical(&rewritten) {
        return Err(NormalizeError::InvalidNormalized);
    }

    Ok(PhoneNumber(rewritten))
}

fn is_canonical(value: &str) -> bool {
    value.len() == CANONICAL_LEN
        && value.starts_with(CANONICAL_PREFIX)
        && value[1..].bytes().all(|b| b.is_ascii_digit())
}
