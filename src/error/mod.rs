// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!         SyncError (~16 bytes)
//!                 |
//!     +-----------+-----------+
//!     |           |           |
//!     v           v           v
//!  Document      Fs        Scaffold
//!    Box         Box         Box
//!
//! Sub-errors (unboxed internally):
//!   Document  NotFound, Parse, Read, Write, NotATable, EmptyKey
//!   Fs        PermissionDenied, Io, Relocation, ConfigNotFound
//!   Scaffold  ExecutableNotFound, SpawnFailed, NonZeroExit
//!
//! Tool settings report ConfigError through anyhow directly.
//! ```
//!
//! Messages never repeat their source; print the whole chain with `{:#}`.
//!
//! Components return [`SyncResult`]. The orchestrator and command handlers
//! use [`Result`] (anyhow) and attach the failing step as context; the typed
//! error stays reachable through `anyhow::Error::downcast_ref`.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SyncError`].
pub type SyncResult<T> = std::result::Result<T, SyncError>;

/// Top-level error type for site restructuring and mount sync.
///
/// All sub-errors are boxed to keep this enum at ~16 bytes on the stack.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Structured document (site config or mount file) error.
    #[error("document error")]
    Document(#[from] Box<DocumentError>),

    /// Filesystem error while preparing or relocating the site.
    #[error("filesystem error")]
    Fs(#[from] Box<FsError>),

    /// External site scaffolding failed.
    #[error("scaffold error")]
    Scaffold(#[from] Box<ScaffoldError>),
}

impl SyncError {
    /// Returns the inner document error, if any.
    #[must_use]
    pub fn as_document(&self) -> Option<&DocumentError> {
        match self {
            Self::Document(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the inner filesystem error, if any.
    #[must_use]
    pub fn as_fs(&self) -> Option<&FsError> {
        match self {
            Self::Fs(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the inner scaffold error, if any.
    #[must_use]
    pub fn as_scaffold(&self) -> Option<&ScaffoldError> {
        match self {
            Self::Scaffold(e) => Some(e),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SyncError {
                fn from(err: $error) -> Self {
                    SyncError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    DocumentError => Document,
    FsError => Fs,
    ScaffoldError => Scaffold,
}

// --- Document Errors ---

/// Errors from loading, editing, or saving a structured document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document file does not exist.
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The document could not be read.
    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is malformed or does not have the expected shape.
    #[error("failed to parse '{origin}': {message}")]
    Parse { origin: String, message: String },

    /// The document could not be written back.
    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An intermediate key holds a scalar or array where a table is needed.
    #[error("key '{key}' exists but is not a table")]
    NotATable { key: String },

    /// A key path with no segments.
    #[error("empty key path")]
    EmptyKey,
}

// --- Filesystem Errors ---

/// Filesystem errors from preparing and relocating the site.
#[derive(Debug, Error)]
pub enum FsError {
    /// Permission denied.
    #[error("permission denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O error.
    #[error("I/O error on '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An allowlisted item could not be moved into the site directory.
    ///
    /// Items listed in `moved` were relocated before the failure and stay
    /// where they are.
    #[error("failed to move '{item}' into site directory: {reason}")]
    Relocation {
        item: String,
        reason: String,
        moved: Vec<String>,
    },

    /// No recognized config file exists in the site directory.
    #[error("no site config file found in {}", .dir.display())]
    ConfigNotFound { dir: PathBuf },
}

impl FsError {
    /// Classify an I/O error on `path`, separating permission failures.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path, source }
        } else {
            Self::Io { path, source }
        }
    }
}

// --- Scaffold Errors ---

/// Errors from the external site scaffolder.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}'")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    ///
    /// `code` is `-1` when the process was terminated by a signal.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Config Errors ---

/// Tool settings errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a `--set` override or settings source.
    #[error("failed to parse setting '{input}': {message}")]
    ParseError { input: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
