//! Status and show command handlers

use anyhow::Result;
use serde_json::Value;

use trailhead_core::{CollectionKey, SectionKey, SettingsStore};

use crate::output::{Output, OutputFormat};

/// Print the whole settings document
pub fn show_document(store: &SettingsStore, output: &Output) -> Result<()> {
    output.print_value(&store.document().to_value());
    Ok(())
}

/// Show settings location and a per-section summary
pub fn show(store: &SettingsStore, output: &Output) -> Result<()> {
    let doc = store.document();

    match output.format {
        OutputFormat::Json => {
            let sections: Vec<Value> = SectionKey::ALL
                .into_iter()
                .map(|key| {
                    let section = doc.section_to_value(key);
                    serde_json::json!({
                        "key": key.as_str(),
                        "enabled": section.get("enabled").cloned().unwrap_or(Value::Bool(true)),
                        "entries": entry_count(store, key),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::json!({
                    "settings_file": store.config().settings_path(),
                    "updated_at": doc.updated_at,
                    "dirty": store.is_dirty(),
                    "sections": sections
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", store.config().settings_path().display());
        }
        OutputFormat::Human => {
            println!("Settings file: {}", store.config().settings_path().display());
            match doc.updated_at {
                Some(stamp) => println!("Last saved:    {}", stamp.format("%Y-%m-%d %H:%M")),
                None => println!("Last saved:    never"),
            }
            println!();
            println!("Sections:");
            for key in SectionKey::ALL {
                let section = doc.section_to_value(key);
                let enabled = section
                    .get("enabled")
                    .and_then(Value::as_bool)
                    .unwrap_or(true);
                let state = if enabled { "enabled" } else { "disabled" };
                match entry_count(store, key) {
                    Some(count) => println!("  {:<14} {:<9} {} entr{}", key, state, count,
                        if count == 1 { "y" } else { "ies" }),
                    None => println!("  {:<14} {}", key, state),
                }
            }
        }
    }

    Ok(())
}

/// Entry count of the section's collection field, if it has one
fn entry_count(store: &SettingsStore, key: SectionKey) -> Option<usize> {
    CollectionKey::ALL
        .into_iter()
        .find(|collection| collection.section() == key)
        .map(|collection| store.document().collection_len(collection))
}
