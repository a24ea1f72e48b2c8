//! Pagination cursor token.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};
use crate::record::SortKey;
use crate::types::ArtworkId;

/// A resume position for paginated scanning.
///
/// Encodes the `(sort_key, id)` of the last record a page returned; the
/// id breaks ties between records sharing a sort key. The token is
/// opaque to callers: URL-safe base64 of `"{sort_key}\0{id}"`, chosen so
/// it rides in query strings unescaped. Tokens round-trip exactly
/// through [`Cursor::encode`] and [`Cursor::decode`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cursor {
    sort_key: SortKey,
    id: ArtworkId,
}

impl Cursor {
    /// Create a cursor positioned at a record.
    pub fn new(sort_key: SortKey, id: ArtworkId) -> Self {
        Self { sort_key, id }
    }

    /// The sort key component.
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// The tie-breaking record id component.
    pub fn id(&self) -> &ArtworkId {
        &self.id
    }

    /// Encode this cursor as an opaque token.
    pub fn encode(&self) -> String {
        let payload = format!("{}\0{}", self.sort_key, self.id.as_str());
        URL_SAFE_NO_PAD.encode(payload)
    }

    /// Decode an opaque token back into a cursor.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Cursor`] if the token is not valid
    /// base64, lacks the separator, or carries an unparseable sort key
    /// or id. Callers are expected to restart pagination from the top
    /// when this happens.
    pub fn decode(token: &str) -> Result<Self, Error> {
        let malformed = |reason: &str| InvalidInputError::Cursor {
            value: token.to_string(),
            reason: reason.to_string(),
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| malformed("not valid base64"))?;

        let payload = String::from_utf8(bytes).map_err(|_| malformed("not valid UTF-8"))?;

        let (sort_key, id) = payload
            .split_once('\0')
            .ok_or_else(|| malformed("missing separator"))?;

        let sort_key: SortKey = sort_key
            .parse()
            .map_err(|_| malformed("sort key is not an integer"))?;

        let id = ArtworkId::new(id).map_err(|_| malformed("invalid record id"))?;

        Ok(Self { sort_key, id })
    }

    /// Whether a record at `(sort_key, id)` comes strictly after this
    /// cursor in descending `(sort_key desc, id asc)` order.
    ///
    /// Store implementations use this to resume a scan without skipping
    /// or repeating records that share the cursor's sort key.
    pub fn precedes(&self, sort_key: SortKey, id: &ArtworkId) -> bool {
        sort_key < self.sort_key || (sort_key == self.sort_key && id > &self.id)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl TryFrom<String> for Cursor {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::decode(&s)
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ArtworkId {
        ArtworkId::new(s).unwrap()
    }

    #[test]
    fn round_trips_exactly() {
        for (sort_key, record_id) in [
            (2024_07_03, "artwork-123"),
            (0, "a"),
            (-1, "neg"),
            (101, "-OaBcDeFg_12345"),
            (i64::MAX, "max"),
        ] {
            let cursor = Cursor::new(sort_key, id(record_id));
            let decoded = Cursor::decode(&cursor.encode()).unwrap();
            assert_eq!(decoded, cursor);
            assert_eq!(decoded.sort_key(), sort_key);
            assert_eq!(decoded.id().as_str(), record_id);
        }
    }

    #[test]
    fn token_is_url_safe() {
        let token = Cursor::new(2024_07_03, id("artwork-123")).encode();
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in [
            "!!!not-base64!!!",
            "",
            // base64("no-separator")
            "bm8tc2VwYXJhdG9y",
            // base64("abc\0id") - sort key is not an integer
            "YWJjAGlk",
            // base64("42\0bad/id") - id fails validation
            "NDIAYmFkL2lk",
        ] {
            let err = Cursor::decode(token).unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::InvalidInput(InvalidInputError::Cursor { .. })
                ),
                "token {token:?} should be a malformed-cursor error",
            );
        }
    }

    #[test]
    fn ordering_predicate() {
        let cursor = Cursor::new(40, id("d"));
        // Lower sort keys come after in a descending walk.
        assert!(cursor.precedes(30, &id("a")));
        // Same sort key: only higher ids come after.
        assert!(cursor.precedes(40, &id("e")));
        assert!(!cursor.precedes(40, &id("d")));
        assert!(!cursor.precedes(40, &id("c")));
        // Higher sort keys were already returned.
        assert!(!cursor.precedes(50, &id("z")));
    }
}
