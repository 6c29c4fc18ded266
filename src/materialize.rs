// SPDX-License-Identifier: MIT
//! Folder materialization with a traversal guard.
//!
//! Guards against `..` escapes and absolute-path injection in templates
//! before touching the filesystem.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::{debug, warn};

/// Outcome of materializing a path list into a destination root.
#[derive(Debug, Default)]
pub struct CraftReport {
    /// Directories successfully processed, created now or already present.
    pub processed: usize,
    /// Entries rejected by the traversal guard, verbatim from the template.
    pub skipped: Vec<String>,
}

/// Create every relative path in `paths` as a directory under `dest`.
///
/// Each entry is joined onto the resolved destination and normalized; an
/// entry whose normalized form escapes the destination (a `..` chain or an
/// absolute path) is skipped and logged, never fatal, and does not stop the
/// remaining entries. Creation is idempotent: pre-existing directories
/// count as processed and are not modified. The first filesystem error
/// aborts the remainder as one aggregate failure; directories already
/// created stay on disk, and a retry is safe.
pub fn craft_folders(dest: &Path, paths: &[String]) -> Result<CraftReport> {
    let root = absolute(dest)?;
    let mut report = CraftReport::default();

    for entry in paths {
        let resolved = normalize_path(&root.join(entry));
        if !resolved.starts_with(&root) {
            warn!(path = %entry, root = %root.display(), "skipping unsafe path — escapes destination");
            report.skipped.push(entry.clone());
            continue;
        }
        fs::create_dir_all(&resolved)
            .with_context(|| format!("failed to create {}", resolved.display()))?;
        report.processed += 1;
    }

    debug!(
        processed = report.processed,
        skipped = report.skipped.len(),
        root = %root.display(),
        "materialization complete"
    );
    Ok(report)
}

/// Resolve `path` against the current directory and normalize it, without
/// requiring it to exist.
fn absolute(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("cannot resolve current directory")?
            .join(path)
    };
    Ok(normalize_path(&joined))
}

/// Resolve `.` and `..` components lexically. `std::fs::canonicalize` needs
/// the path to exist on disk, which these mostly do not yet.
fn normalize_path(path: &Path) -> PathBuf {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                }
                // `..` at the root is dropped; it cannot go higher.
            }
            Component::CurDir => {}
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}
