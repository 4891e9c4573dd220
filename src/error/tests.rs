// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{DocumentError, FsError, ScaffoldError, SyncError, SyncResult};

#[test]
fn test_relocation_error_display() {
    let err = FsError::Relocation {
        item: "content".to_string(),
        reason: "destination already exists".to_string(),
        moved: vec!["config.toml".to_string()],
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"failed to move 'content' into site directory: destination already exists"
    );
}

#[test]
fn test_sync_error_wraps_sub_errors() {
    let err: SyncError = ScaffoldError::NonZeroExit {
        command: "hugo new site hugo --force".to_string(),
        code: 255,
    }
    .into();
    assert!(err.as_scaffold().is_some());
    assert!(err.as_fs().is_none());
    assert!(err.as_document().is_none());
    insta::assert_snapshot!(
        format!("{:#}", anyhow::Error::from(err)),
        @"scaffold error: process 'hugo new site hugo --force' exited with code 255"
    );
}

#[test]
fn test_from_io_classifies_permission_denied() {
    let denied = FsError::from_io(
        "/srv/site/hugo",
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    let other = FsError::from_io(
        "/srv/site/hugo",
        std::io::Error::from(std::io::ErrorKind::AlreadyExists),
    );
    assert!(matches!(denied, FsError::PermissionDenied { .. }));
    assert!(matches!(other, FsError::Io { .. }));
}

#[test]
fn test_document_error_display() {
    let err = DocumentError::NotATable {
        key: "module".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"key 'module' exists but is not a table");
}

#[test]
fn test_sync_error_size() {
    // Every variant is a Box, so discriminant + pointer
    let size = std::mem::size_of::<SyncError>();
    assert!(size <= 16, "SyncError is {size} bytes, expected <= 16");
}

#[test]
fn test_sync_result_size() {
    let size = std::mem::size_of::<SyncResult<()>>();
    assert!(size <= 16, "SyncResult<()> is {size} bytes, expected <= 16");
}

#[test]
fn test_io_chain_is_not_repeated() {
    let err: SyncError = FsError::from_io(
        "/srv/site/hugo",
        std::io::Error::other("disk full"),
    )
    .into();
    insta::assert_snapshot!(
        format!("{:#}", anyhow::Error::from(err)),
        @"filesystem error: I/O error on '/srv/site/hugo': disk full"
    );
}
