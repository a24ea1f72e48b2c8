//! Command implementations.

pub mod gallery;
