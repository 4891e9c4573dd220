// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declarative mount list (`hugo_sync_hub.toml`).
//!
//! ```text
//! [[mounts]]                      SyncSpecification
//! source = "posts"       --->       [ MountEntry { source, target }, ... ]
//! target = "content/posts"          file order kept
//! ```
//!
//! A file without a `mounts` key yields an empty list. Other top-level keys
//! are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{DocumentResult, parse_error, read_document};

/// One mount: a path in the project mapped to a path in the site's
/// virtual filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountEntry {
    pub source: String,
    pub target: String,
}

impl MountEntry {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The ordered mount list for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SyncSpecification {
    #[serde(default)]
    mounts: Vec<MountEntry>,
}

impl SyncSpecification {
    #[must_use]
    pub const fn new(mounts: Vec<MountEntry>) -> Self {
        Self { mounts }
    }

    #[must_use]
    pub fn mounts(&self) -> &[MountEntry] {
        &self.mounts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MountEntry> {
        self.mounts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

impl<'a> IntoIterator for &'a SyncSpecification {
    type Item = &'a MountEntry;
    type IntoIter = std::slice::Iter<'a, MountEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Load the mount list from a file.
///
/// # Errors
///
/// Returns `DocumentError::NotFound` if the file is absent and
/// `DocumentError::Parse` if it is malformed or an entry lacks a string
/// `source` or `target`.
pub fn load_mounts(path: &Path) -> DocumentResult<SyncSpecification> {
    let text = read_document(path)?;
    let list = parse_mounts(&text, &path.display().to_string())?;
    debug!(path = %path.display(), count = list.len(), "loaded mounts");
    Ok(list)
}

/// Parse a mount list from TOML text. `origin` names the source in errors.
///
/// # Errors
///
/// Returns `DocumentError::Parse` on malformed input.
pub fn parse_mounts(text: &str, origin: &str) -> DocumentResult<SyncSpecification> {
    toml::from_str(text).map_err(|e| parse_error(e.message(), e.span(), text, origin))
}
