//! Opaque account identities.
//!
//! The ledger owns address formats and signatures; the runtime only needs a
//! validated, comparable value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reasons an identity string is refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity is empty")]
    Empty,

    #[error("identity is {len} characters long, at most {max} allowed", max = Identity::MAX_LEN)]
    TooLong { len: usize },

    #[error("identity contains invalid character {character:?}")]
    InvalidCharacter { character: char },
}

/// Validated account identity: 1 to 128 ASCII alphanumeric characters.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    pub const MAX_LEN: usize = 128;

    pub fn parse(value: &str) -> Result<Self, IdentityError> {
        if value.is_empty() {
            return Err(IdentityError::Empty);
        }
        if value.len() > Self::MAX_LEN {
            return Err(IdentityError::TooLong { len: value.len() });
        }
        if let Some(character) = value.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(IdentityError::InvalidCharacter { character });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Identity {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
