//! Trailhead Core Library
//!
//! This crate provides the core functionality for Trailhead, the content
//! manager behind the Saddle South marketing site: a settings document of
//! toggleable homepage sections, each holding ordered, id-keyed collections
//! of records (FAQ items, team members, gallery images, testimonials, menu
//! items, social posts).
//!
//! # Architecture
//!
//! The in-memory [`Document`] is the source of truth while editing. Every
//! mutation is a pure transformation returning a new document; the
//! [`SettingsStore`] owns the current value, composes edits, and persists
//! through the [`RecordStore`] boundary on an explicit save.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = SettingsStore::open()?;
//!
//! // Add a FAQ item
//! let draft = EntryDraft::Faq(FaqDraft {
//!     question: "Do I need my own bike?".into(),
//!     answer: "Rentals are included on every tour.".into(),
//! });
//! let id = store.apply_with(|doc| doc.add_entry(draft))?;
//!
//! // Persist
//! store.save()?;
//! ```
//!
//! # Modules
//!
//! - `store`: owning controller and save semantics (main entry point)
//! - `document`: the settings document and its operations
//! - `sections`: typed homepage sections with static defaults
//! - `models`: the entry records inside collection fields
//! - `collection`: the generic ordered, id-keyed collection mechanism
//! - `ingest`: two-step bulk URL import
//! - `id`: entry identifier generation
//! - `storage`: record store boundary and file-backed implementation
//! - `config`: application configuration

pub mod collection;
pub mod config;
pub mod document;
pub mod id;
pub mod ingest;
pub mod models;
pub mod sections;
pub mod storage;
pub mod store;

pub use collection::{Collection, CollectionEntry};
pub use config::Config;
pub use document::{
    CollectionKey, Document, DocumentError, EntryDraft, EntryPatch, SectionKey, SectionPatch,
    UnknownKey,
};
pub use id::EntryId;
pub use ingest::{parse_url_lines, IngestStep, IngestTarget, MediaIngest};
pub use storage::{JsonFileStore, RecordStore, StorageError, StorageResult};
pub use store::SettingsStore;
