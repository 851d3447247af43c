use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NoDigits,
    UnsupportedFormat,
    InvalidNormalized,
    ReferenceLoadFailed,
    ReferenceEmpty,
    EmptyReferenceList,
}

impl ErrorKind {
    pub fn as_code(self) -> &'static str {
        match self {
            ErrorKind::NoDigits => "NO_DIGITS",
            ErrorKind::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            ErrorKind::InvalidNormalized => "INVALID_NORMALIZED",
            ErrorKind::ReferenceLoadFailed => "REFERENCE_LOAD_FAILED",
            ErrorKind::ReferenceEmpty => "REFERENCE_EMPTY",
            ErrorKind::EmptyReferenceList => "EMPTY_REFERENCE_LIST",
        }
    }

    /// True for kinds caused by the user's input rather than the reference data.
    pub fn is_input_error(self) -> bool {
        matches!(
            self,
            ErrorKind::NoDigits | ErrorKind::UnsupportedFormat | ErrorKind::InvalidNormalized
        )
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("no phone digits found in input")]
    NoDigits,
    #[error("number is not a recognized Russian mobile format")]
    UnsupportedFormat,
    #[error("number could not be normalized to +79XXXXXXXXX")]
    InvalidNormalized,
}

impl NormalizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NormalizeError::NoDigits => ErrorKind::NoDigits,
            NormalizeError::UnsupportedFormat => ErrorKind::UnsupportedFormat,
            NormalizeError::InvalidNormalized => ErrorKind::InvalidNormalized,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("reference list must not be empty")]
    EmptyReferenceList,
    #[error("reference entry {0} is required")]
    BlankReferenceField(&'static str),
}

impl CoreError {
    /// Round-level kind, if any. A blank field only disqualifies one entry,
    /// so it never surfaces as a round error on its own.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CoreError::EmptyReferenceList => Some(ErrorKind::EmptyReferenceList),
            CoreError::BlankReferenceField(_) => None,
        }
    }
}
