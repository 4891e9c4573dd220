// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Site layout: detection, relocation, scaffolding and mount merging.
//!
//! ```text
//!  project root                      project root/hugo
//!  +-- config.toml   --rename-->     +-- config.toml
//!  +-- content/      --rename-->     +-- content/
//!  +-- posts/  (stays)               +-- ...
//!  +-- hugo_sync_hub.toml
//!
//!  detect_existing_site(root)
//!        |
//!    Some(name) --> relocate allowlist (skip absent, fail on collision)
//!    None       --> SiteScaffolder::scaffold(destination)
//!
//!  merge_mounts(tree, mounts)
//!    module.imports = [ { path = THEME_IMPORT_PATH } ]
//!    module.mounts  = [ { source, target }, ... ]
//! ```

pub mod merge;
pub mod relocate;
pub mod scaffold;

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::FsError;

pub use merge::merge_mounts;
pub use relocate::{
    RelocationPlan, SiteSetup, plan_relocation, relocate_items, relocate_or_scaffold,
};
pub use scaffold::{HugoScaffolder, SiteScaffolder};

/// Name of the site subdirectory under the project root.
pub const SITE_DIR: &str = "hugo";

/// Default mount list file name under the project root.
pub const MOUNTS_FILE: &str = "hugo_sync_hub.toml";

/// Site config file names, checked in order.
pub const CONFIG_CANDIDATES: [&str; 2] = ["config.toml", "hugo.toml"];

/// Top-level entries moved into the site directory, in move order.
pub const RELOCATABLE_ITEMS: [&str; 9] = [
    "config.toml",
    "hugo.toml",
    "archetypes",
    "content",
    "layouts",
    "static",
    "data",
    "i18n",
    "themes",
];

/// Module path of the theme import written into every merged config.
pub const THEME_IMPORT_PATH: &str = "github.com/bep/docuapi/v2";

/// The site directory for a project root.
#[must_use]
pub fn site_destination(root: &Path) -> PathBuf {
    root.join(SITE_DIR)
}

/// Create the site directory (and parents) if absent.
///
/// # Errors
///
/// Returns `FsError::PermissionDenied` on denied access and `FsError::Io`
/// otherwise, e.g. when a regular file already occupies the name.
pub fn ensure_destination(root: &Path) -> Result<PathBuf, FsError> {
    let destination = site_destination(root);
    std::fs::create_dir_all(&destination).map_err(|e| FsError::from_io(&destination, e))?;
    debug!(path = %destination.display(), "site directory ready");
    Ok(destination)
}

/// Name of the first config candidate present at `root`.
#[must_use]
pub fn detect_existing_site(root: &Path) -> Option<&'static str> {
    let found = CONFIG_CANDIDATES
        .into_iter()
        .find(|name| root.join(name).is_file());
    trace!(root = %root.display(), found = ?found, "detect site");
    found
}

/// Full path of the first config candidate present in `dir`.
#[must_use]
pub fn locate_site_config(dir: &Path) -> Option<PathBuf> {
    detect_existing_site(dir).map(|name| dir.join(name))
}

#[cfg(test)]
pub(crate) mod test_utils;
