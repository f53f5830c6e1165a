//! Storage layer
//!
//! The record store boundary: settings documents are opaque JSON values
//! keyed by a settings key. The core ships a file-backed implementation;
//! anything that can load and save a JSON value per key can stand in for it.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{JsonFileStore, RecordStore};
