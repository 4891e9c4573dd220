// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! [global]  dry, output_log_level, file_log_level, log_file, log_json
//! [paths]   root, mounts_file
//! [tools]   hugo
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalSettings {
    /// Log what would change without touching the filesystem.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Write the log file as JSON lines.
    pub log_json: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_json: false,
        }
    }
}

/// Project locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsSettings {
    /// Project root that holds (or will hold) the site.
    pub root: PathBuf,
    /// Mount list file (default: `<root>/hugo_sync_hub.toml`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mounts_file: Option<PathBuf>,
}

impl Default for PathsSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            mounts_file: None,
        }
    }
}

/// External tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsSettings {
    /// Hugo executable, a bare name looked up in PATH or a path.
    pub hugo: PathBuf,
}

impl Default for ToolsSettings {
    fn default() -> Self {
        Self {
            hugo: PathBuf::from("hugo"),
        }
    }
}
