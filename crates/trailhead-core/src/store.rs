//! Settings store
//!
//! The `SettingsStore` is the single owning controller for the in-memory
//! settings document. Editors express changes as pure document
//! transformations; the store composes each one against the latest document
//! value and performs the save through the record store boundary.
//!
//! Edits live entirely in memory until an explicit [`SettingsStore::save`]
//! (or immediately, with autosave configured). A failed save surfaces the
//! error to the caller and leaves the in-memory document exactly as it was,
//! so nothing is lost and the save can be retried.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = SettingsStore::open()?;
//!
//! store.apply(|doc| doc.merge_section(patch))?;
//! let id = store.apply_with(|doc| doc.add_entry(draft))?;
//!
//! store.save()?;
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info};

use crate::config::Config;
use crate::document::Document;
use crate::storage::{JsonFileStore, RecordStore};

/// Owning controller for the site settings document
pub struct SettingsStore {
    /// The materialized in-memory document
    doc: Document,
    /// Record store the document is persisted through
    record_store: Box<dyn RecordStore>,
    /// Configuration
    config: Config,
    /// Whether the in-memory document has unsaved edits
    dirty: bool,
}

impl SettingsStore {
    /// Open the store with configuration from the default location
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Self::open_with_config(config)
    }

    /// Open the store with a specific configuration
    pub fn open_with_config(config: Config) -> Result<Self> {
        let record_store = Box::new(JsonFileStore::new(config.data_dir.clone()));
        Self::open_with_record_store(config, record_store)
    }

    /// Open the store against an arbitrary record store implementation
    ///
    /// The persisted value for the configured settings key is materialized
    /// once, here; sections and fields it is missing are filled from static
    /// defaults, so everything downstream sees a schema-complete document.
    /// A key with nothing stored yet starts from the full defaults.
    pub fn open_with_record_store(
        config: Config,
        record_store: Box<dyn RecordStore>,
    ) -> Result<Self> {
        let stored = record_store
            .load(&config.settings_key)
            .with_context(|| format!("Failed to load settings '{}'", config.settings_key))?;

        let doc = match stored {
            Some(value) => Document::materialize(value)
                .with_context(|| format!("Failed to materialize settings '{}'", config.settings_key))?,
            None => Document::default(),
        };

        debug!("Loaded settings document '{}'", config.settings_key);

        Ok(Self {
            doc,
            record_store,
            config,
            dirty: false,
        })
    }

    /// The current in-memory document
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the in-memory document has edits not yet persisted
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply a pure transformation to the current document
    ///
    /// The transformation always receives the latest in-memory document,
    /// never a stale snapshot. With autosave configured the result is
    /// persisted immediately; otherwise it waits for [`SettingsStore::save`].
    pub fn apply<F>(&mut self, op: F) -> Result<()>
    where
        F: FnOnce(Document) -> Document,
    {
        let doc = std::mem::take(&mut self.doc);
        self.doc = op(doc);
        self.dirty = true;

        if self.config.autosave {
            self.save()?;
        }
        Ok(())
    }

    /// Like [`SettingsStore::apply`], for transformations that hand back a
    /// value alongside the document (e.g. the id of a newly added entry)
    pub fn apply_with<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(Document) -> (Document, T),
    {
        let doc = std::mem::take(&mut self.doc);
        let (doc, out) = op(doc);
        self.doc = doc;
        self.dirty = true;

        if self.config.autosave {
            self.save()?;
        }
        Ok(out)
    }

    /// Persist the in-memory document through the record store
    ///
    /// On success the document's `updated_at` stamp reflects this save. On
    /// failure the in-memory document is left untouched - including the old
    /// stamp - so the edits survive for a retry.
    pub fn save(&mut self) -> Result<()> {
        let mut doc = self.doc.clone();
        doc.updated_at = Some(Utc::now());

        self.record_store
            .save(&self.config.settings_key, &doc.to_value())
            .with_context(|| format!("Failed to save settings '{}'", self.config.settings_key))?;

        // Only adopt the stamped document once the write has landed
        self.doc = doc;
        self.dirty = false;
        info!("Saved settings document '{}'", self.config.settings_key);
        Ok(())
    }

    /// Discard unsaved edits and reload the persisted document
    pub fn reload(&mut self) -> Result<()> {
        let stored = self
            .record_store
            .load(&self.config.settings_key)
            .with_context(|| format!("Failed to load settings '{}'", self.config.settings_key))?;

        self.doc = match stored {
            Some(value) => Document::materialize(value)
                .with_context(|| format!("Failed to materialize settings '{}'", self.config.settings_key))?,
            None => Document::default(),
        };
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CollectionKey, EntryDraft};
    use crate::models::FaqDraft;
    use crate::storage::{StorageError, StorageResult};
    use serde_json::Value;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            settings_key: "site".to_string(),
            autosave: false,
        }
    }

    fn faq_draft(question: &str) -> EntryDraft {
        EntryDraft::Faq(FaqDraft {
            question: question.to_string(),
            answer: String::new(),
        })
    }

    /// Record store that accepts loads but rejects every save
    struct FailingStore;

    impl RecordStore for FailingStore {
        fn load(&self, _key: &str) -> StorageResult<Option<Value>> {
            Ok(None)
        }

        fn save(&self, key: &str, _value: &Value) -> StorageResult<()> {
            Err(StorageError::NotFound {
                path: PathBuf::from(key),
            })
        }
    }

    #[test]
    fn test_open_without_persisted_data_starts_from_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::open_with_config(test_config(&temp_dir)).unwrap();

        assert_eq!(*store.document(), Document::default());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_apply_and_save_persist_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = SettingsStore::open_with_config(config.clone()).unwrap();
            store
                .apply_with(|doc| doc.add_entry(faq_draft("Do I need my own bike?")))
                .unwrap();
            assert!(store.is_dirty());
            store.save().unwrap();
            assert!(!store.is_dirty());
        }

        let store = SettingsStore::open_with_config(config).unwrap();
        assert_eq!(store.document().collection_len(CollectionKey::FaqItems), 1);
        assert!(store.document().updated_at.is_some());
    }

    #[test]
    fn test_unsaved_edits_are_not_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = SettingsStore::open_with_config(config.clone()).unwrap();
            store.save().unwrap();
            store
                .apply_with(|doc| doc.add_entry(faq_draft("unsaved")))
                .unwrap();
            // dropped without save
        }

        let store = SettingsStore::open_with_config(config).unwrap();
        assert_eq!(store.document().collection_len(CollectionKey::FaqItems), 0);
    }

    #[test]
    fn test_autosave_persists_every_change() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.autosave = true;

        {
            let mut store = SettingsStore::open_with_config(config.clone()).unwrap();
            store
                .apply_with(|doc| doc.add_entry(faq_draft("autosaved")))
                .unwrap();
            assert!(!store.is_dirty());
        }

        let store = SettingsStore::open_with_config(config).unwrap();
        assert_eq!(store.document().collection_len(CollectionKey::FaqItems), 1);
    }

    #[test]
    fn test_failed_save_leaves_document_untouched() {
        let config = Config {
            data_dir: PathBuf::from("/unused"),
            settings_key: "site".to_string(),
            autosave: false,
        };
        let mut store =
            SettingsStore::open_with_record_store(config, Box::new(FailingStore)).unwrap();

        store
            .apply_with(|doc| doc.add_entry(faq_draft("keep me")))
            .unwrap();
        let before = store.document().clone();

        let result = store.save();
        assert!(result.is_err());
        assert_eq!(*store.document(), before);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_reload_discards_unsaved_edits() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = SettingsStore::open_with_config(test_config(&temp_dir)).unwrap();

        store
            .apply_with(|doc| doc.add_entry(faq_draft("saved")))
            .unwrap();
        store.save().unwrap();
        let saved = store.document().clone();

        store
            .apply_with(|doc| doc.add_entry(faq_draft("discarded")))
            .unwrap();
        store.reload().unwrap();

        assert_eq!(*store.document(), saved);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_apply_composes_against_latest_document() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = SettingsStore::open_with_config(test_config(&temp_dir)).unwrap();

        store
            .apply_with(|doc| doc.add_entry(faq_draft("first")))
            .unwrap();
        store
            .apply_with(|doc| doc.add_entry(faq_draft("second")))
            .unwrap();

        let questions: Vec<String> = store
            .document()
            .faq
            .items
            .iter()
            .map(|item| item.question.clone())
            .collect();
        assert_eq!(questions, ["first", "second"]);
    }

    #[test]
    fn test_open_materializes_partial_persisted_document() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let file_store = JsonFileStore::new(config.data_dir.clone());
        file_store
            .save(
                "site",
                &serde_json::json!({"faq": {"enabled": false}}),
            )
            .unwrap();

        let store = SettingsStore::open_with_config(config).unwrap();
        assert!(!store.document().faq.enabled);
        // everything the file omitted comes from defaults
        assert!(store.document().team.enabled);
        assert_eq!(store.document().gallery.title, "From the road");
    }
}
