//! Description-file watching with serialized, coalesced regeneration.
//!
//! Polls the modification times of every description file under the asset
//! directory and re-runs the full generation pass when the snapshot changes.
//! Always a full regeneration — there is no incremental path to get subtly
//! wrong.
//!
//! ## Run coalescing
//!
//! Two concurrent writers to the host page would race, so runs are
//! serialized through a [`RunCoalescer`]: one `running` flag plus a
//! single-slot `pending` flag. A change noted while a run is in flight
//! parks in the pending slot — any number of such changes collapse into
//! exactly one follow-up run, and the queue can never grow.
//!
//! ## Failure policy
//!
//! A failed pass (missing markers, I/O error, bad UTF-8) is logged and the
//! loop keeps watching. The watch process only exits on a signal.

use crate::config::SiteConfig;
use crate::{generate, output};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use walkdir::WalkDir;

/// Serializes generation runs and coalesces overlapping change events.
#[derive(Debug, Default)]
pub struct RunCoalescer {
    running: bool,
    pending: bool,
}

impl RunCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a change. Returns `true` when the caller should start a run
    /// now; otherwise the rerun is parked in the single pending slot.
    pub fn note_change(&mut self) -> bool {
        if self.running {
            self.pending = true;
            false
        } else {
            self.running = true;
            true
        }
    }

    /// Mark the current run finished. Returns `true` when a parked rerun
    /// should start immediately (the caller stays `running`).
    pub fn finish_run(&mut self) -> bool {
        if self.pending {
            self.pending = false;
            true
        } else {
            self.running = false;
            false
        }
    }
}

/// Modification-time snapshot of every description file under the asset dir.
fn snapshot(root: &Path, config: &SiteConfig) -> BTreeMap<PathBuf, SystemTime> {
    let asset_dir = root.join(&config.asset_dir);
    let mut times = BTreeMap::new();
    for entry in WalkDir::new(asset_dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_str() != Some(config.description_file.as_str()) {
            continue;
        }
        if let Some(modified) = entry.metadata().ok().and_then(|m| m.modified().ok()) {
            times.insert(entry.into_path(), modified);
        }
    }
    times
}

/// Log the difference between two snapshots. Returns whether anything changed.
fn log_changes(
    before: &BTreeMap<PathBuf, SystemTime>,
    after: &BTreeMap<PathBuf, SystemTime>,
) -> bool {
    let mut changed = false;
    for (path, time) in after {
        match before.get(path) {
            None => {
                println!("Added: {}", path.display());
                changed = true;
            }
            Some(old) if old != time => {
                println!("Changed: {}", path.display());
                changed = true;
            }
            Some(_) => {}
        }
    }
    for path in before.keys() {
        if !after.contains_key(path) {
            println!("Removed: {}", path.display());
            changed = true;
        }
    }
    changed
}

fn run_pass(root: &Path, config: &SiteConfig) {
    match generate::generate(root, config) {
        Ok(summary) => output::print_generate_output(&summary, &config.page),
        // Keep watching: a broken page or a half-saved file must not take
        // the watcher down
        Err(e) => eprintln!("Generation failed: {e}"),
    }
}

/// Drive a full pass through the coalescer until the pending slot drains.
fn run_coalesced(coalescer: &mut RunCoalescer, root: &Path, config: &SiteConfig) {
    if !coalescer.note_change() {
        return;
    }
    loop {
        run_pass(root, config);
        if !coalescer.finish_run() {
            break;
        }
    }
}

/// Watch description files under `root` and regenerate on change.
///
/// Runs an initial pass on startup, then polls every `interval`. Never
/// returns.
pub fn watch(root: &Path, config: &SiteConfig, interval: Duration) -> ! {
    println!(
        "Watching {} for {} changes (every {} ms)",
        root.join(&config.asset_dir).display(),
        config.description_file,
        interval.as_millis()
    );

    let mut coalescer = RunCoalescer::new();
    let mut current = snapshot(root, config);
    run_coalesced(&mut coalescer, root, config);

    loop {
        std::thread::sleep(interval);
        let next = snapshot(root, config);
        if log_changes(&current, &next) {
            run_coalesced(&mut coalescer, root, config);
        }
        current = next;
    }
}
