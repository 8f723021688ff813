//! Full generation pass: scan → render → splice → write.
//!
//! One pass is single-threaded, synchronous, and rebuilds the whole
//! container region from scratch; there is no incremental path. The host
//! page is only written when the spliced text actually differs, so a second
//! pass over unchanged sources touches nothing.
//!
//! Error surface: an empty episode set and a page that is already current
//! are ordinary outcomes, reported in the [`Summary`]. Missing container
//! markers abort the splice with the page unmodified. I/O failures are
//! fatal for the pass.

use crate::config::SiteConfig;
use crate::record::Record;
use crate::{render, scan, splice};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scan(#[from] scan::ScanError),
    #[error(transparent)]
    Render(#[from] render::RenderError),
    #[error(transparent)]
    Splice(#[from] splice::SpliceError),
}

/// What a pass did to the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No episode folders found; the page was not touched.
    NoItems,
    /// Spliced text equals the current page; the write was skipped.
    Unchanged,
    /// The page was rewritten.
    Written,
}

/// Result of one generation pass.
#[derive(Debug)]
pub struct Summary {
    pub records: Vec<Record>,
    pub outcome: Outcome,
}

/// Run one generation pass over the project at `root`.
pub fn generate(root: &Path, config: &SiteConfig) -> Result<Summary, GenerateError> {
    let records = scan::scan(root, config)?;
    if records.is_empty() {
        return Ok(Summary {
            records,
            outcome: Outcome::NoItems,
        });
    }

    let fragments = records
        .iter()
        .map(|record| render::render_fragment(record, config).map(|m| m.into_string()))
        .collect::<Result<Vec<_>, _>>()?;

    let page_path = root.join(&config.page);
    let doc = fs::read_to_string(&page_path)?;
    let updated = splice::splice(&doc, &config.container_marker(), &fragments)?;

    let outcome = if updated == doc {
        Outcome::Unchanged
    } else {
        fs::write(&page_path, &updated)?;
        Outcome::Written
    };

    Ok(Summary { records, outcome })
}
