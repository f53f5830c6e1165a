//! Section command handlers

use anyhow::{Context, Result};
use serde_json::Value;

use trailhead_core::{SectionKey, SectionPatch, SettingsStore};

use crate::commands::parse_fields;
use crate::output::Output;

/// Show one section
pub fn show(store: &SettingsStore, key: String, output: &Output) -> Result<()> {
    let key: SectionKey = key.parse()?;
    let section = store.document().section_to_value(key);
    output.print_section(key.as_str(), &section);
    Ok(())
}

/// Update scalar fields of one section
pub fn set(
    store: &mut SettingsStore,
    key: String,
    enabled: Option<bool>,
    title: Option<String>,
    fields: Vec<String>,
    output: &Output,
) -> Result<()> {
    let key: SectionKey = key.parse()?;

    let mut map = parse_fields(&fields)?;
    if let Some(enabled) = enabled {
        map.insert("enabled".to_string(), Value::Bool(enabled));
    }
    if let Some(title) = title {
        map.insert("title".to_string(), Value::String(title));
    }

    let patch = SectionPatch::from_value(key, Value::Object(map))
        .with_context(|| format!("Invalid fields for section '{}'", key))?;

    store.apply(|doc| doc.merge_section(patch))?;
    if store.is_dirty() {
        store.save()?;
    }

    output.success(&format!("Updated section '{}'", key));
    Ok(())
}
