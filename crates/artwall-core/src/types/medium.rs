//! Creative-work medium type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The creative-work category of an artwork.
///
/// Parsing is lossy rather than fallible: records arrive from a
/// schemaless store, and an unknown medium string becomes [`Medium::Other`]
/// so that neither deserialization nor gradient derivation can fail on
/// malformed data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Medium {
    Writing,
    Audio,
    Drawing,
    Sculpture,
    Video,
    Other,
}

impl Medium {
    /// All mediums, in store-directory order.
    pub const ALL: [Medium; 6] = [
        Medium::Audio,
        Medium::Drawing,
        Medium::Sculpture,
        Medium::Writing,
        Medium::Video,
        Medium::Other,
    ];

    /// Returns the lowercase name used in store paths and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Medium::Writing => "writing",
            Medium::Audio => "audio",
            Medium::Drawing => "drawing",
            Medium::Sculpture => "sculpture",
            Medium::Video => "video",
            Medium::Other => "other",
        }
    }

    /// Parse a medium name, mapping anything unrecognized to `Other`.
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "writing" => Medium::Writing,
            "audio" => Medium::Audio,
            "drawing" => Medium::Drawing,
            "sculpture" => Medium::Sculpture,
            "video" => Medium::Video,
            _ => Medium::Other,
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Medium {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Medium::parse_lossy(s))
    }
}

impl From<String> for Medium {
    fn from(s: String) -> Self {
        Medium::parse_lossy(&s)
    }
}

impl From<Medium> for String {
    fn from(m: Medium) -> Self {
        m.as_str().to_string()
    }
}
