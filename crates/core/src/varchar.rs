//! JSON-friendly string type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A string that serializes as a JSON string and converts freely to and
/// from bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Varchar(String);

impl Varchar {
    /// Wraps `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrows the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 bytes of the text.
    pub fn bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// True for the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwraps the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Varchar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Varchar {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Varchar {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<Varchar> for String {
    fn from(value: Varchar) -> Self {
        value.0
    }
}

impl AsRef<str> for Varchar {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for Varchar {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
