//! Stable persistence - stores, validation and the snapshot document.
//!
//! Saves the stable to a key-value store as one JSON document and loads it
//! back, dropping any record that fails structural validation.

pub mod snapshot;
pub mod store;
pub mod validate;

pub use snapshot::{decode_snapshot, encode_snapshot, hydrate, persist, SnapshotError, STORAGE_KEY};
pub use store::{DisabledStore, FileStore, MemoryStore, StateStore};
pub use validate::{validate_horse, validate_identity, Rejection};
