// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for site initialization.
//!
//! Runs the public API against scratch project directories.

use std::cell::Cell;
use std::path::Path;

use synchub_rs::document::ConfigTree;
use synchub_rs::error::{FsError, ScaffoldError, SyncError};
use synchub_rs::initializer::SiteInitializer;
use synchub_rs::mounts::load_mounts;
use synchub_rs::site::{SITE_DIR, SiteScaffolder, merge_mounts};
use tempfile::TempDir;
use toml_edit::Item;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Counts calls and lays down a `hugo.toml` like `hugo new site` does.
#[derive(Default)]
struct FakeHugo {
    calls: Cell<usize>,
}

impl SiteScaffolder for FakeHugo {
    fn scaffold(&self, destination: &Path) -> Result<(), ScaffoldError> {
        self.calls.set(self.calls.get() + 1);
        for dir in ["archetypes", "content", "layouts", "static"] {
            std::fs::create_dir_all(destination.join(dir)).map_err(|source| {
                ScaffoldError::SpawnFailed {
                    command: "fake hugo".to_string(),
                    source,
                }
            })?;
        }
        std::fs::write(
            destination.join("hugo.toml"),
            "baseURL = 'https://example.org/'\nlanguageCode = 'en-us'\ntitle = 'My New Hugo Site'\n",
        )
        .map_err(|source| ScaffoldError::SpawnFailed {
            command: "fake hugo".to_string(),
            source,
        })
    }
}

const MOUNTS: &str = r#"
[[mounts]]
source = "posts"
target = "content/posts"

[[mounts]]
source = "img"
target = "static/img"
"#;

// =============================================================================
// Existing site
// =============================================================================

#[test]
fn init_existing_site_end_to_end() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::write(
        root.join("hugo.toml"),
        r#"
baseURL = "https://docs.example.org/"
title = "Handbook"
enableGitInfo = true

[markup.goldmark.renderer]
unsafe = true

[module]
[[module.imports]]
path = "github.com/alex/legacy"
"#,
    )
    .unwrap();
    std::fs::create_dir_all(root.join("content/guide")).unwrap();
    std::fs::write(root.join("content/guide/_index.md"), "# Guide\n").unwrap();
    std::fs::create_dir_all(root.join("posts")).unwrap();
    std::fs::write(root.join("hugo_sync_hub.toml"), MOUNTS).unwrap();
    let hugo = FakeHugo::default();

    let report = SiteInitializer::builder()
        .with_project_root(root)
        .with_scaffolder(&hugo)
        .build()
        .run()
        .unwrap();

    assert_eq!(report.relocated, ["hugo.toml", "content"]);
    assert_eq!(hugo.calls.get(), 0);
    assert!(root.join(SITE_DIR).join("content/guide/_index.md").is_file());
    assert!(root.join("posts").is_dir());

    let tree = ConfigTree::load(&root.join(SITE_DIR).join("hugo.toml")).unwrap();
    assert_eq!(
        tree.keys(),
        ["baseURL", "title", "enableGitInfo", "markup", "module"]
    );
    assert_eq!(
        tree.get("markup.goldmark.renderer.unsafe")
            .and_then(Item::as_bool),
        Some(true)
    );

    let merged: toml::Table = toml::from_str(&tree.render()).unwrap();
    let expected: toml::Table = toml::from_str(
        r#"
imports = [{ path = "github.com/bep/docuapi/v2" }]
mounts = [
  { source = "posts", target = "content/posts" },
  { source = "img", target = "static/img" },
]
"#,
    )
    .unwrap();
    assert_eq!(merged["module"]["imports"], expected["imports"]);
    assert_eq!(merged["module"]["mounts"], expected["mounts"]);
}

#[test]
fn init_keeps_hand_written_layout() {
    let temp = temp_dir();
    let root = temp.path();
    let config = "# Handbook settings
markup.goldmark.renderer.unsafe = true
title = \"Handbook\" # shown in header
params = { main = \"guide\" }
";
    std::fs::write(root.join("config.toml"), config).unwrap();
    std::fs::write(root.join("hugo_sync_hub.toml"), MOUNTS).unwrap();
    let hugo = FakeHugo::default();

    initializer_for(root, &hugo).run().unwrap();

    let saved = std::fs::read_to_string(root.join(SITE_DIR).join("config.toml")).unwrap();
    assert!(saved.starts_with(config), "saved: {saved}");
    assert!(saved.contains("source = \"img\""));
}

#[test]
fn init_rerun_after_partial_failure_completes() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::write(root.join("config.toml"), "title = \"Docs\"\n").unwrap();
    std::fs::create_dir(root.join("static")).unwrap();
    let hugo = FakeHugo::default();
    let initializer = SiteInitializer::builder()
        .with_project_root(root)
        .with_scaffolder(&hugo)
        .build();

    // No mount file yet: the site is moved, the config is not merged
    let err = initializer.run().unwrap_err();
    assert_eq!(err.to_string(), "load mounts");
    assert!(root.join(SITE_DIR).join("config.toml").is_file());
    let untouched = ConfigTree::load(&root.join(SITE_DIR).join("config.toml")).unwrap();
    assert!(!untouched.contains("module"));

    std::fs::write(root.join("hugo_sync_hub.toml"), MOUNTS).unwrap();
    let report = initializer.run().unwrap();
    assert!(report.relocated.is_empty());
    assert_eq!(report.mounts, 2);
    assert_eq!(hugo.calls.get(), 0);
}

// =============================================================================
// Fresh site
// =============================================================================

#[test]
fn init_empty_project_scaffolds_and_merges() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::write(root.join("hugo_sync_hub.toml"), MOUNTS).unwrap();
    let hugo = FakeHugo::default();

    let report = SiteInitializer::builder()
        .with_project_root(root)
        .with_scaffolder(&hugo)
        .build()
        .run()
        .unwrap();

    assert!(report.scaffolded);
    assert_eq!(hugo.calls.get(), 1);
    let tree = ConfigTree::load(&root.join(SITE_DIR).join("hugo.toml")).unwrap();
    assert_eq!(
        tree.get("title").and_then(Item::as_str),
        Some("My New Hugo Site")
    );
    assert_eq!(
        tree.get("module.mounts")
            .and_then(Item::as_array)
            .map(toml_edit::Array::len),
        Some(2)
    );

    // A second run finds the site in place and does not scaffold again
    initializer_for(root, &hugo).run().unwrap();
    assert_eq!(hugo.calls.get(), 1);
}

fn initializer_for<'a>(root: &Path, hugo: &'a FakeHugo) -> SiteInitializer<'a> {
    SiteInitializer::builder()
        .with_project_root(root)
        .with_scaffolder(hugo)
        .build()
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn init_collision_reports_item_and_progress() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::write(root.join("config.toml"), "title = \"Docs\"\n").unwrap();
    std::fs::create_dir(root.join("i18n")).unwrap();
    std::fs::create_dir_all(root.join(SITE_DIR).join("i18n")).unwrap();
    std::fs::write(root.join("hugo_sync_hub.toml"), MOUNTS).unwrap();
    let hugo = FakeHugo::default();

    let err = initializer_for(root, &hugo).run().unwrap_err();
    let message = format!("{err:#}");
    assert!(
        message.starts_with("relocate or scaffold: filesystem error: failed to move 'i18n'"),
        "message: {message}"
    );
    let Some(FsError::Relocation { moved, .. }) =
        err.downcast_ref::<SyncError>().and_then(SyncError::as_fs)
    else {
        panic!("expected relocation error: {err:?}");
    };
    assert_eq!(moved, &["config.toml"]);
}

#[test]
fn init_rerun_after_collision_finishes_relocation() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::write(root.join("config.toml"), "title = \"Docs\"\n").unwrap();
    for dir in ["content", "layouts", "static"] {
        std::fs::create_dir(root.join(dir)).unwrap();
    }
    let blocker = root.join(SITE_DIR).join("layouts");
    std::fs::create_dir_all(&blocker).unwrap();
    std::fs::write(root.join("hugo_sync_hub.toml"), MOUNTS).unwrap();
    let hugo = FakeHugo::default();

    let err = initializer_for(root, &hugo).run().unwrap_err();
    assert!(format!("{err:#}").contains("failed to move 'layouts'"));

    std::fs::remove_dir(&blocker).unwrap();
    let report = initializer_for(root, &hugo).run().unwrap();

    assert_eq!(report.relocated, ["layouts", "static"]);
    assert!(!root.join("layouts").exists());
    assert!(!root.join("static").exists());
    assert_eq!(hugo.calls.get(), 0);
}

#[test]
fn init_destination_blocked_by_file() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::write(root.join(SITE_DIR), "not a directory").unwrap();
    let hugo = FakeHugo::default();

    let err = initializer_for(root, &hugo).run().unwrap_err();
    assert_eq!(err.to_string(), "ensure destination");
    assert!(err.downcast_ref::<FsError>().is_some());
}

#[test]
fn init_malformed_site_config() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::write(root.join("config.toml"), "title = \n").unwrap();
    std::fs::write(root.join("hugo_sync_hub.toml"), MOUNTS).unwrap();
    let hugo = FakeHugo::default();

    let err = initializer_for(root, &hugo).run().unwrap_err();
    assert_eq!(err.to_string(), "load site config");
}

// =============================================================================
// Building blocks
// =============================================================================

#[test]
fn merge_twice_renders_identically() {
    let temp = temp_dir();
    let mounts_path = temp.path().join("hugo_sync_hub.toml");
    std::fs::write(&mounts_path, MOUNTS).unwrap();
    let mounts = load_mounts(&mounts_path).unwrap();

    let mut tree = ConfigTree::parse(
        "title = \"Docs\"\n[params]\nmain = \"blog\"\n[module]\nnoVendor = \"\"\n",
        "hugo.toml",
    )
    .unwrap();
    merge_mounts(&mut tree, &mounts).unwrap();
    let once = tree.render();
    merge_mounts(&mut tree, &mounts).unwrap();
    assert_eq!(tree.render(), once);
}
