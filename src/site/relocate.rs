// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Moving an existing site into the site directory, or scaffolding one.

use std::path::Path;

use tracing::{debug, info, trace, warn};

use super::RELOCATABLE_ITEMS;
use super::scaffold::SiteScaffolder;
use crate::error::{FsError, SyncResult};

/// Outcome of [`relocate_or_scaffold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSetup {
    /// An existing site was moved; `moved` lists items in move order.
    Relocated { moved: Vec<String> },
    /// A fresh site was created by the scaffolder.
    Scaffolded,
}

/// Allowlisted items present at the root, and which of them already exist
/// in the destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelocationPlan {
    items: Vec<&'static str>,
    collisions: Vec<&'static str>,
}

impl RelocationPlan {
    /// Items that would be moved, in allowlist order.
    #[must_use]
    pub fn items(&self) -> &[&'static str] {
        &self.items
    }

    /// Items whose destination entry already exists.
    #[must_use]
    pub fn collisions(&self) -> &[&'static str] {
        &self.collisions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Inspect `root` and `destination` without touching either.
#[must_use]
pub fn plan_relocation(root: &Path, destination: &Path) -> RelocationPlan {
    let mut plan = RelocationPlan::default();
    for name in RELOCATABLE_ITEMS {
        if !exists(&root.join(name)) {
            continue;
        }
        plan.items.push(name);
        if exists(&destination.join(name)) {
            plan.collisions.push(name);
        }
    }
    plan
}

/// Move the allowlisted items of an existing site into `destination`, or
/// scaffold a fresh site there when `found` is `None`.
///
/// # Errors
///
/// Returns `FsError::Relocation` when an item collides with an existing
/// destination entry or cannot be renamed, and a `ScaffoldError` when the
/// scaffolder fails.
pub fn relocate_or_scaffold(
    root: &Path,
    destination: &Path,
    found: Option<&str>,
    scaffolder: &dyn SiteScaffolder,
) -> SyncResult<SiteSetup> {
    let Some(config_name) = found else {
        scaffolder.scaffold(destination)?;
        return Ok(SiteSetup::Scaffolded);
    };

    info!(config = config_name, dest = %destination.display(), "relocating existing site");
    let moved = relocate_items(root, destination)?;
    Ok(SiteSetup::Relocated { moved })
}

/// Move every allowlisted item present at `root` into `destination`.
///
/// Items are moved one by one in allowlist order and absent ones are
/// skipped, so a run interrupted part way can be finished by calling this
/// again. A failure stops the loop and leaves already-moved items in the
/// destination.
///
/// # Errors
///
/// Returns `FsError::Relocation` when an item collides with an existing
/// destination entry or cannot be renamed.
pub fn relocate_items(root: &Path, destination: &Path) -> SyncResult<Vec<String>> {
    let mut moved: Vec<String> = Vec::new();
    for name in RELOCATABLE_ITEMS {
        let source = root.join(name);
        if !exists(&source) {
            trace!(item = name, "not present, skipped");
            continue;
        }

        let target = destination.join(name);
        if exists(&target) {
            warn!(item = name, moved = moved.len(), "destination already exists");
            return Err(FsError::Relocation {
                item: name.to_string(),
                reason: format!("'{}' already exists", target.display()),
                moved,
            }
            .into());
        }

        if let Err(e) = std::fs::rename(&source, &target) {
            return Err(FsError::Relocation {
                item: name.to_string(),
                reason: e.to_string(),
                moved,
            }
            .into());
        }
        debug!(item = name, "moved");
        moved.push(name.to_string());
    }

    Ok(moved)
}

/// Presence check that does not follow symlinks.
fn exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}
