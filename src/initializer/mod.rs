// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! One-shot site initialization.
//!
//! ```text
//! SiteInitializer::run()
//!   1. ensure destination       root/hugo
//!   2. relocate or scaffold     existing site moved, or `hugo new site`
//!   3. load mounts              hugo_sync_hub.toml
//!   4. locate site config       config.toml | hugo.toml under root/hugo
//!   5. load site config
//!   6. merge mounts             module.imports, module.mounts
//!   7. save site config
//!        |
//!        v
//!    InitReport
//! ```
//!
//! Each failure carries its [`Step`] as `anyhow` context; the typed error
//! underneath stays reachable with `downcast_ref`. Nothing is rolled back:
//! a second run picks the site up from the destination, moves whatever was
//! left at the root and re-applies the merge.
//!
//! In a dry run nothing on disk changes. The relocation plan is logged and
//! the merged config is rendered into [`InitReport::preview`].

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use tracing::{debug, info, warn};

use crate::document::ConfigTree;
use crate::error::{FsError, Result};
use crate::mounts::load_mounts;
use crate::site::{
    MOUNTS_FILE, SiteScaffolder, SiteSetup, detect_existing_site, ensure_destination,
    locate_site_config, merge_mounts, plan_relocation, relocate_items, relocate_or_scaffold,
    site_destination,
};

/// A named stage of [`SiteInitializer::run`], used as error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    EnsureDestination,
    RelocateOrScaffold,
    LoadMounts,
    LocateSiteConfig,
    LoadSiteConfig,
    MergeMounts,
    SaveSiteConfig,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EnsureDestination => "ensure destination",
            Self::RelocateOrScaffold => "relocate or scaffold",
            Self::LoadMounts => "load mounts",
            Self::LocateSiteConfig => "locate site config",
            Self::LoadSiteConfig => "load site config",
            Self::MergeMounts => "merge mounts",
            Self::SaveSiteConfig => "save site config",
        };
        f.write_str(name)
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    /// The site directory.
    pub destination: PathBuf,
    /// Items moved from the project root, in move order.
    pub relocated: Vec<String>,
    /// Whether a fresh site was scaffolded (or would be, in a dry run).
    pub scaffolded: bool,
    /// The site config that was rewritten, or read in a dry run.
    pub config_path: Option<PathBuf>,
    /// Number of mounts written.
    pub mounts: usize,
    /// Rendered config, dry runs only.
    pub preview: Option<String>,
}

/// Restructures a project into a Hugo site and syncs its mounts.
#[derive(Builder)]
pub struct SiteInitializer<'a> {
    #[builder(setters(name = with_project_root), into)]
    project_root: PathBuf,
    /// Defaults to `<project_root>/hugo_sync_hub.toml`.
    #[builder(setters(name = with_mounts_file), into)]
    mounts_file: Option<PathBuf>,
    #[builder(setters(name = with_scaffolder))]
    scaffolder: &'a dyn SiteScaffolder,
    #[builder(setters(name = with_dry_run), default = false)]
    dry_run: bool,
}

impl SiteInitializer<'_> {
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The mount list file this run reads.
    #[must_use]
    pub fn mounts_file(&self) -> PathBuf {
        self.mounts_file
            .clone()
            .unwrap_or_else(|| self.project_root.join(MOUNTS_FILE))
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run every step in order and stop at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the failing step's error with the [`Step`] as context.
    pub fn run(&self) -> Result<InitReport> {
        let root = self.project_root.as_path();
        info!(root = %root.display(), dry_run = self.dry_run, "initializing site");

        let found = detect_existing_site(root);
        let mut report = InitReport {
            destination: site_destination(root),
            relocated: Vec::new(),
            scaffolded: false,
            config_path: None,
            mounts: 0,
            preview: None,
        };

        if self.dry_run {
            Self::plan(root, found, &mut report);
        } else {
            self.prepare(root, found, &mut report)?;
        }

        let mounts_file = self.mounts_file();
        let mounts = load_mounts(&mounts_file).with_context(|| Step::LoadMounts)?;
        info!(file = %mounts_file.display(), count = mounts.len(), "loaded mounts");
        report.mounts = mounts.len();

        let (mut tree, config_path) = self.load_site_config(root, found, &report)?;

        merge_mounts(&mut tree, &mounts).with_context(|| Step::MergeMounts)?;

        if self.dry_run {
            report.preview = Some(tree.render());
        } else if let Some(path) = &config_path {
            tree.save(path).with_context(|| Step::SaveSiteConfig)?;
            info!(config = %path.display(), "saved site config");
        }
        report.config_path = config_path;

        Ok(report)
    }

    /// Steps 1 and 2 for a real run.
    fn prepare(&self, root: &Path, found: Option<&str>, report: &mut InitReport) -> Result<()> {
        let destination = ensure_destination(root).with_context(|| Step::EnsureDestination)?;

        if found.is_none() && locate_site_config(&destination).is_some() {
            // Finish a relocation that stopped part way
            let moved =
                relocate_items(root, &destination).with_context(|| Step::RelocateOrScaffold)?;
            if moved.is_empty() {
                info!(dest = %destination.display(), "site already in place");
            } else {
                info!(count = moved.len(), "moved remaining site items");
            }
            report.relocated = moved;
            return Ok(());
        }

        let setup = relocate_or_scaffold(root, &destination, found, self.scaffolder)
            .with_context(|| Step::RelocateOrScaffold)?;
        match setup {
            SiteSetup::Relocated { moved } => {
                info!(count = moved.len(), "relocated existing site");
                report.relocated = moved;
            }
            SiteSetup::Scaffolded => {
                info!(dest = %destination.display(), "scaffolded new site");
                report.scaffolded = true;
            }
        }
        Ok(())
    }

    /// Steps 1 and 2 for a dry run: log what would happen.
    fn plan(root: &Path, found: Option<&str>, report: &mut InitReport) {
        let destination = report.destination.as_path();
        if found.is_none() && locate_site_config(destination).is_none() {
            info!(dest = %destination.display(), "[dry] would scaffold new site");
            report.scaffolded = true;
            return;
        }

        let plan = plan_relocation(root, destination);
        if plan.is_empty() {
            info!(dest = %destination.display(), "[dry] site already in place");
            return;
        }
        info!(config = ?found, items = ?plan.items(), "[dry] would relocate site items");
        for item in plan.collisions() {
            warn!(item, "[dry] destination already exists, relocation would fail");
        }
        report.relocated = plan.items().iter().map(ToString::to_string).collect();
    }

    /// Steps 4 and 5. A dry run reads the config where it currently sits and
    /// starts from an empty tree when the site does not exist yet.
    fn load_site_config(
        &self,
        root: &Path,
        found: Option<&str>,
        report: &InitReport,
    ) -> Result<(ConfigTree, Option<PathBuf>)> {
        let config_dir = if self.dry_run && found.is_some() {
            root
        } else {
            report.destination.as_path()
        };

        if self.dry_run && report.scaffolded {
            debug!("[dry] no site config yet, previewing from an empty tree");
            return Ok((ConfigTree::new(), None));
        }

        let path = locate_site_config(config_dir)
            .ok_or_else(|| FsError::ConfigNotFound {
                dir: config_dir.to_path_buf(),
            })
            .with_context(|| Step::LocateSiteConfig)?;
        debug!(config = %path.display(), "located site config");

        let tree = ConfigTree::load(&path).with_context(|| Step::LoadSiteConfig)?;
        Ok((tree, Some(path)))
    }
}
