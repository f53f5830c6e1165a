//! Bulk import command handler
//!
//! Reads a block of URL lines from a file or stdin, optionally pairs them
//! with captions from a second file, and commits the batch through the
//! media ingest workflow.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::debug;

use trailhead_core::{CollectionKey, IngestTarget, MediaIngest, SettingsStore};

use crate::output::Output;

pub fn run(
    store: &mut SettingsStore,
    collection: String,
    file: Option<PathBuf>,
    captions_file: Option<PathBuf>,
    dry_run: bool,
    output: &Output,
) -> Result<()> {
    let key: CollectionKey = collection.parse()?;
    let target = match IngestTarget::from_collection(key) {
        Some(target) => target,
        None => bail!(
            "'{}' does not support bulk import. Use gallery.images or social.posts.",
            key
        ),
    };

    let text = read_input(file.as_deref())?;

    let mut ingest = MediaIngest::new(target, captions_file.is_some());
    let count = ingest.submit_urls(&text);
    debug!("Parsed {} URL(s) for {}", count, key);

    if let Some(path) = &captions_file {
        let captions = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read captions file: {:?}", path))?;
        for (index, line) in captions.lines().enumerate() {
            ingest.set_caption(index, line.trim());
        }
    }

    if count == 0 {
        ingest.cancel();
        output.message("No well-formed URLs found; nothing to import.");
        return Ok(());
    }

    if dry_run {
        for url in ingest.urls() {
            output.message(url);
        }
        output.message(&format!("Would import {} entr{} into {}.", count,
            if count == 1 { "y" } else { "ies" }, key));
        ingest.cancel();
        return Ok(());
    }

    store.apply(|doc| ingest.commit(doc))?;
    if store.is_dirty() {
        store.save()?;
    }

    output.success(&format!(
        "Imported {} entr{} into {}",
        count,
        if count == 1 { "y" } else { "ies" },
        key
    ));
    Ok(())
}

/// Read the URL block from a file, or from stdin when no file is given
fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read URL file: {:?}", path)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read URLs from stdin")?;
            Ok(text)
        }
    }
}
