use crate::error::CoreError;
use serde::Serialize;

/// One classification code and its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReferenceEntry {
    code: String,
    name: String,
}

impl ReferenceEntry {
    pub fn new(code: &str, name: &str) -> Result<Self, CoreError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CoreError::BlankReferenceField("code"));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::BlankReferenceField("name"));
        }
        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The code with every non-digit character removed.
    pub fn code_digits(&self) -> String {
        self.code.chars().filter(char::is_ascii_digit).collect()
    }
}
