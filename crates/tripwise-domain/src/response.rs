//! Raw model output

use std::fmt;

/// Unparsed text returned by the model.
///
/// Kept verbatim so it can be shown in a diagnostic view when no
/// structure could be recovered from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawModelResponse(String);

impl RawModelResponse {
    /// Wrap raw model text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the raw text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the reply is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for RawModelResponse {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for RawModelResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
