//! Storage collaborator traits.

mod store;

pub use store::ArtworkStore;
