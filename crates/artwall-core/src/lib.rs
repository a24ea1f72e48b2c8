//! artwall-core - Core types and engines for the Artwall gallery.
//!
//! Two self-contained engines live here: deterministic gradient derivation
//! for artwork cards, and cursor pagination over an external record store.

pub mod error;
pub mod gradient;
pub mod grouping;
pub mod pagination;
pub mod record;
pub mod traits;
pub mod types;

pub use error::Error;
pub use gradient::{ColorStop, GradientEngine, GradientSpec, Palette, stable_hash};
pub use grouping::{YearGroup, group_by_year};
pub use pagination::{Cursor, Page, fetch_page};
pub use record::{ArtworkRecord, SortKey};
pub use traits::ArtworkStore;
pub use types::{ArtworkId, HexColor, Medium};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
