// SPDX-License-Identifier: MIT
//! Template exchange files.
//!
//! A transfer file is a JSON object with exactly two keys: `template_name`
//! (string) and `structure` (array of strings). Validation failures are
//! typed so the front-end can present a specific message; invalid JSON,
//! a missing key, and a wrongly-typed field are distinct. Nothing is
//! inserted into a store on failure.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;
use thiserror::Error;

/// On-disk exchange representation of a single template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateTransfer {
    pub template_name: String,
    pub structure: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("file contains invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("missing required key `{0}`")]
    MissingKey(&'static str),
    #[error("key `{key}` must be {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
}

/// Read and validate a transfer file.
pub fn import_template(path: &Path) -> Result<TemplateTransfer, ImportError> {
    let contents = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_transfer(&contents)
}

/// Validate transfer JSON. Split from the file read so the schema rules are
/// testable without disk.
pub fn parse_transfer(contents: &str) -> Result<TemplateTransfer, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(contents).map_err(ImportError::InvalidJson)?;

    let name = value
        .get("template_name")
        .ok_or(ImportError::MissingKey("template_name"))?
        .as_str()
        .ok_or(ImportError::WrongType {
            key: "template_name",
            expected: "a string",
        })?;

    let items = value
        .get("structure")
        .ok_or(ImportError::MissingKey("structure"))?
        .as_array()
        .ok_or(ImportError::WrongType {
            key: "structure",
            expected: "an array of strings",
        })?;

    let mut structure = Vec::with_capacity(items.len());
    for item in items {
        let path = item.as_str().ok_or(ImportError::WrongType {
            key: "structure",
            expected: "an array of strings",
        })?;
        structure.push(path.to_string());
    }

    Ok(TemplateTransfer {
        template_name: name.to_string(),
        structure,
    })
}

/// Write a template as a pretty-printed transfer file.
pub fn export_template(path: &Path, name: &str, structure: &[String]) -> Result<()> {
    let transfer = TemplateTransfer {
        template_name: name.to_string(),
        structure: structure.to_vec(),
    };
    let json = serde_json::to_string_pretty(&transfer)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
