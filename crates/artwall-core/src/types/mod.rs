//! Core gallery types.
//!
//! Identifier and color types enforce their invariants at construction
//! time; the medium and theme vocabulary is deliberately lenient because
//! records come from a schemaless store and the gradient subsystem must
//! never block rendering.

mod artwork_id;
mod hex_color;
mod medium;

pub use artwork_id::ArtworkId;
pub use hex_color::HexColor;
pub use medium::Medium;
