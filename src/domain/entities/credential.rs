//! Account credential entity.

use serde::{Deserialize, Serialize};

/// Required identifier length, in characters.
pub const IDENTIFIER_LEN: usize = 10;

/// A registered account.
///
/// The secret is stored and compared in plaintext. Serialized with the
/// credential file's `number` / `password` column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "number")]
    pub identifier: String,
    #[serde(rename = "password")]
    pub secret: String,
}

impl Credential {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Returns true if the identifier has exactly [`IDENTIFIER_LEN`] characters.
    pub fn has_valid_identifier(&self) -> bool {
        self.identifier.chars().count() == IDENTIFIER_LEN
    }
}
