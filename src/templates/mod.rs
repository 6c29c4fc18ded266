// SPDX-License-Identifier: MIT
//! Template repository.
//!
//! Named folder structures, persisted as one JSON object mapping template
//! name to its path list. Built-in defaults are merged under any user-saved
//! entries at load time; user entries win on a name collision.

pub mod defaults;
pub mod transfer;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::{debug, warn};

/// In-memory template store.
///
/// An explicit repository object, constructed once by the front-end and
/// passed by reference into every operation. There is no ambient global set.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: BTreeMap<String, Vec<String>>,
}

impl TemplateStore {
    /// Store containing only the built-in defaults.
    pub fn builtin() -> Self {
        let mut templates = BTreeMap::new();
        for (name, paths) in defaults::default_templates() {
            templates.insert(name.to_string(), paths);
        }
        Self { templates }
    }

    /// Load the store from `path`, merging saved entries over the defaults.
    ///
    /// A missing, unreadable, or corrupt file is not an error: the defaults
    /// stand alone and the problem is logged.
    pub fn load(path: &Path) -> Self {
        let mut store = Self::builtin();
        match fs::read_to_string(path) {
            Ok(contents) => {
                match serde_json::from_str::<BTreeMap<String, Vec<String>>>(&contents) {
                    Ok(saved) => {
                        debug!(count = saved.len(), path = %path.display(), "merged saved templates");
                        store.templates.extend(saved);
                    }
                    Err(err) => {
                        warn!(path = %path.display(), %err, "ignoring corrupt template store — using defaults");
                    }
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                warn!(path = %path.display(), %err, "cannot read template store — using defaults");
            }
        }
        store
    }

    /// Persist the full store as a pretty JSON object, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.templates)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.templates.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Insert or replace a template.
    pub fn insert(&mut self, name: impl Into<String>, paths: Vec<String>) {
        self.templates.insert(name.into(), paths);
    }

    /// Remove a template; `false` when the name was absent.
    pub fn remove(&mut self, name: &str) -> bool {
        self.templates.remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// `(name, paths)` pairs in listing (name) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.templates
            .iter()
            .map(|(name, paths)| (name.as_str(), paths.as_slice()))
    }

    /// First name that does not collide with a stored template: the name
    /// itself, then `Name (Imported)`, then `Name (Imported 2)`, and so on.
    pub fn unique_import_name(&self, name: &str) -> String {
        if !self.contains(name) {
            return name.to_string();
        }
        let mut counter = 1usize;
        loop {
            let candidate = if counter == 1 {
                format!("{name} (Imported)")
            } else {
                format!("{name} (Imported {counter})")
            };
            if !self.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}
