//! Asset directory scanning.
//!
//! Stage 1 of the generation pass. Walks the asset directory — one
//! subdirectory per episode — and produces the ordered record list the
//! renderer consumes.
//!
//! ```text
//! asset/
//! ├── ep01/
//! │   ├── description.txt          # Required — folders without it are skipped
//! │   └── poster.jpg               # Optional media, discovered per strategy
//! ├── ep02/
//! │   └── description.txt
//! └── notes.md                     # Non-directory entries are skipped
//! ```
//!
//! ## Skip rules
//!
//! A missing description file excludes the folder silently; that is content
//! curation, not an error. Non-directories and dot-directories are skipped.
//! Any other read failure — permissions, malformed UTF-8 — is fatal for the
//! whole pass.
//!
//! ## Ordering
//!
//! Records come back in filesystem enumeration order with no sort step.
//! Callers that need a stable order must name their episode directories so
//! the platform enumerates them in that order.

use crate::config::{MediaStrategy, SiteConfig};
use crate::record::{self, Record};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Extensions recognized by the `scan-extensions` media strategy.
const MEDIA_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Scan the asset directory under `root` into a record list.
///
/// A missing asset directory yields an empty list, not an error — the
/// caller reports the empty pass.
pub fn scan(root: &Path, config: &SiteConfig) -> Result<Vec<Record>, ScanError> {
    let asset_dir = root.join(&config.asset_dir);
    if !asset_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for entry in fs::read_dir(&asset_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(identifier) = name.to_str() else {
            continue;
        };
        if identifier.starts_with('.') {
            continue;
        }

        let content = match fs::read_to_string(path.join(&config.description_file)) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        };

        let mut record = record::parse_description(identifier, &content, &config.tags);
        record.media_file = find_media(&path, config)?;
        records.push(record);
    }

    Ok(records)
}

/// Resolve the episode's media file per the configured strategy.
///
/// Missing or unrecognized media is a recoverable skip: the renderer falls
/// back to the placeholder presentation.
fn find_media(dir: &Path, config: &SiteConfig) -> Result<Option<String>, ScanError> {
    match config.media.strategy {
        MediaStrategy::ScanExtensions => {
            for entry in fs::read_dir(dir)? {
                let entry = entry?;
                if !entry.path().is_file() {
                    continue;
                }
                let name = entry.file_name();
                let Some(name) = name.to_str() else { continue };
                let ext = Path::new(name)
                    .extension()
                    .map(|e| e.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                if MEDIA_EXTENSIONS.contains(&ext.as_str()) {
                    return Ok(Some(name.to_string()));
                }
            }
            Ok(None)
        }
        MediaStrategy::FixedFilename => {
            let fixed = &config.media.fixed_filename;
            if dir.join(fixed).is_file() {
                Ok(Some(fixed.clone()))
            } else {
                Ok(None)
            }
        }
    }
}
