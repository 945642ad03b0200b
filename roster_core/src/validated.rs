//! Defines the validated string type for player names

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0} is not a valid player name")]
pub struct InvalidPlayerNameError(pub String);

/// A validated player name.
///
/// Names are 1 to 16 characters from `[A-Za-z0-9_]`, matching what the host
/// runtime will accept at login. Comparison is exact; the store is expected,
/// but not required, to keep names unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Attempt to create a new instance using the given value. Returns
    /// `Ok(_)` if the value passes validation, and `Err(_)` if not.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidPlayerNameError> {
        let value = value.into();
        Self::validate(&value)?;
        Ok(Self(value))
    }

    /// Check whether the provided value is valid according to this type's rules.
    pub fn validate(value: &str) -> Result<(), InvalidPlayerNameError> {
        if value.is_empty() || value.len() > 16 {
            return Err(InvalidPlayerNameError(value.to_string()));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(InvalidPlayerNameError(value.to_string()));
        }
        Ok(())
    }

    /// Access the raw stored value
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for PlayerName {
    type Err = InvalidPlayerNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = InvalidPlayerNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
