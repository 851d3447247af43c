use crate::domain::PhoneNumber;
use crate::error::{ErrorKind, NormalizeError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<NormalizeError> for ErrorInfo {
    fn from(err: NormalizeError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub normalized_phone: PhoneNumber,
    pub code: String,
    pub name: String,
    pub match_length: usize,
    pub used_fallback: bool,
}

/// Result of a single round: either an error or a match, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameResult {
    Error(ErrorInfo),
    Match(MatchOutcome),
}

impl GameResult {
    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            GameResult::Error(info) => Some(info),
            GameResult::Match(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<&MatchOutcome> {
        match self {
            GameResult::Match(outcome) => Some(outcome),
            GameResult::Error(_) => None,
        }
    }
}

impl From<ErrorInfo> for GameResult {
    fn from(info: ErrorInfo) -> Self {
        GameResult::Error(info)
    }
}

impl From<MatchOutcome> for GameResult {
    fn from(outcome: MatchOutcome) -> Self {
        GameResult::Match(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorInfo, GameResult};
    use crate::error::{ErrorKind, NormalizeError};

    #[test]
    fn game_result_serializes_with_status_tag() {
        let result = GameResult::from(ErrorInfo::from(NormalizeError::NoDigits));
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["status"], "error");
        assert_eq!(value["kind"], "NO_DIGITS");
        assert!(value["message"].as_str().is_some());
        assert_eq!(result.error().map(|info| info.kind), Some(ErrorKind::NoDigits));
        assert!(result.outcome().is_none());
    }
}
