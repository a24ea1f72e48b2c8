//! artwall-file - Filesystem-backed artwork store.

mod store;

pub use store::FileStore;
