//! Artwork identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated artwork identifier.
///
/// Identifiers are opaque and stable for the lifetime of a record. The
/// character rules match what the backing key-value store accepts in a
/// key; NUL is additionally excluded because cursor tokens use it as a
/// field separator.
///
/// # Example
///
/// ```
/// use artwall_core::ArtworkId;
///
/// let id = ArtworkId::new("artwork-123").unwrap();
/// assert_eq!(id.as_str(), "artwork-123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtworkId(String);

impl ArtworkId {
    /// Create a new artwork id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, too long, or contains a
    /// character the store cannot use in a key.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::ArtworkId {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.len() > 256 {
            return Err(InvalidInputError::ArtworkId {
                value: s.to_string(),
                reason: "exceeds maximum length of 256 characters".to_string(),
            }
            .into());
        }

        for c in s.chars() {
            if c.is_control() || matches!(c, '.' | '$' | '#' | '[' | ']' | '/') {
                return Err(InvalidInputError::ArtworkId {
                    value: s.to_string(),
                    reason: format!("contains invalid character '{}'", c.escape_default()),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ArtworkId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ArtworkId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ArtworkId> for String {
    fn from(id: ArtworkId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_ids() {
        for id in ["artwork-123", "post123", "-OaBcDeFg_12345", "a"] {
            assert!(ArtworkId::new(id).is_ok(), "should accept {id}");
        }
    }

    #[test]
    fn rejects_empty() {
        assert!(ArtworkId::new("").is_err());
    }

    #[test]
    fn rejects_store_key_specials() {
        for id in ["a.b", "a$b", "a#b", "a[b", "a]b", "a/b", "a\0b", "a\nb"] {
            assert!(ArtworkId::new(id).is_err(), "should reject {id:?}");
        }
    }

    #[test]
    fn rejects_overlong() {
        assert!(ArtworkId::new("x".repeat(257)).is_err());
        assert!(ArtworkId::new("x".repeat(256)).is_ok());
    }

    #[test]
    fn serde_round_trip() {
        let id = ArtworkId::new("artwork-123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"artwork-123\"");
        let back: ArtworkId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<ArtworkId>("\"a/b\"").is_err());
    }
}
