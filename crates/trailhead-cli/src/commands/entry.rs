//! Entry command handlers
//!
//! Generic CRUD over the collection fields: the collection key names the
//! target, `key=value` pairs become the typed draft or patch.

use anyhow::{Context, Result};
use serde_json::Value;

use trailhead_core::{CollectionKey, EntryDraft, EntryId, EntryPatch, SettingsStore};

use crate::commands::parse_fields;
use crate::output::Output;

/// Add an entry to a collection
pub fn add(
    store: &mut SettingsStore,
    collection: String,
    fields: Vec<String>,
    output: &Output,
) -> Result<()> {
    let key: CollectionKey = collection.parse()?;
    let map = parse_fields(&fields)?;

    let draft = EntryDraft::from_value(key, Value::Object(map))
        .with_context(|| format!("Invalid fields for '{}'", key))?;

    let id = store.apply_with(|doc| doc.add_entry(draft))?;
    if store.is_dirty() {
        store.save()?;
    }

    output.success(&format!("Added entry {} to {}", id, key));
    if output.is_quiet() {
        println!("{}", id);
    }
    Ok(())
}

/// List the entries of a collection in display order
pub fn list(store: &SettingsStore, collection: String, output: &Output) -> Result<()> {
    let key: CollectionKey = collection.parse()?;
    let entries = store.document().collection_to_value(key);
    output.print_entries(&entries);
    Ok(())
}

/// Update fields of an entry by id
pub fn update(
    store: &mut SettingsStore,
    collection: String,
    id: String,
    fields: Vec<String>,
    output: &Output,
) -> Result<()> {
    let key: CollectionKey = collection.parse()?;
    let map = parse_fields(&fields)?;

    let patch = EntryPatch::from_value(key, Value::Object(map))
        .with_context(|| format!("Invalid fields for '{}'", key))?;

    let id = EntryId::from(id);
    ensure_present(store, key, &id)?;

    store.apply(|doc| doc.update_entry(&id, patch))?;
    if store.is_dirty() {
        store.save()?;
    }

    output.success(&format!("Updated entry {} in {}", id, key));
    Ok(())
}

/// Remove an entry by id
pub fn remove(
    store: &mut SettingsStore,
    collection: String,
    id: String,
    output: &Output,
) -> Result<()> {
    let key: CollectionKey = collection.parse()?;
    let id = EntryId::from(id);
    ensure_present(store, key, &id)?;

    store.apply(|doc| doc.remove_entry(key, &id))?;
    if store.is_dirty() {
        store.save()?;
    }

    output.success(&format!("Removed entry {} from {}", id, key));
    Ok(())
}

/// Move an entry from one display position to another
pub fn move_entry(
    store: &mut SettingsStore,
    collection: String,
    from: usize,
    to: usize,
    output: &Output,
) -> Result<()> {
    let key: CollectionKey = collection.parse()?;

    let len = store.document().collection_len(key);
    if from >= len || to >= len {
        anyhow::bail!(
            "Position out of range for '{}' ({} entries)",
            key,
            len
        );
    }

    store.apply(|doc| doc.reorder_entry(key, from, to))?;
    if store.is_dirty() {
        store.save()?;
    }

    output.success(&format!("Moved entry {} -> {} in {}", from, to, key));
    Ok(())
}

/// The model treats an unknown id as a no-op; surface it as an error here
fn ensure_present(store: &SettingsStore, key: CollectionKey, id: &EntryId) -> Result<()> {
    let entries = store.document().collection_to_value(key);
    let found = entries
        .as_array()
        .map(|entries| {
            entries.iter().any(|entry| {
                entry.get("id").and_then(Value::as_str) == Some(id.as_str())
            })
        })
        .unwrap_or(false);

    if !found {
        anyhow::bail!("No entry with id '{}' in {}", id, key);
    }
    Ok(())
}
