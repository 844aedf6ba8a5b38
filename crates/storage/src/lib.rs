//! # Dashboard Storage Crate
//!
//! This crate is the dashboard's durable memory: a small synchronous key-value
//! abstraction and the repository that keeps custom entries and the theme
//! preference in it.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** The persistence technology stays behind the `KeyValueStore`
//!   trait; only the stored record shapes are part of the contract.
//! - **Fail-safe reads:** Missing or corrupt stored values read as empty.
//!
//! ## Public API
//!
//! - `KeyValueStore`: The storage seam, with `FileStore` and `MemoryStore` implementations.
//! - `LocalRepository`: Custom entry list and theme preference access.
//! - `StorageError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod repository;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::StorageError;
pub use repository::{LocalRepository, ENTRIES_KEY, THEME_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
