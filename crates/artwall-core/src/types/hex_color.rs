//! Hex color type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated `#rrggbb` hex color.
///
/// # Example
///
/// ```
/// use artwall_core::HexColor;
///
/// let teal = HexColor::new("#0b8783").unwrap();
/// assert_eq!(teal.to_rgb(), (0x0b, 0x87, 0x83));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor([u8; 3]);

impl HexColor {
    /// Create a new color from a `#rrggbb` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a `#` followed by six hex
    /// digits.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let digits = s.strip_prefix('#').ok_or_else(|| InvalidInputError::HexColor {
            value: s.to_string(),
            reason: "missing '#' prefix".to_string(),
        })?;

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidInputError::HexColor {
                value: s.to_string(),
                reason: "expected six hex digits".to_string(),
            }
            .into());
        }

        let parse = |range: std::ops::Range<usize>| {
            // Range is within bounds and all digits are hex per the check above.
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };

        Ok(Self([parse(0..2), parse(2..4), parse(4..6)]))
    }

    /// Returns the `(r, g, b)` channel values.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.0[0], self.0[1], self.0[2])
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.to_string()
    }
}
