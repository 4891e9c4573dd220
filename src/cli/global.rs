// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional settings files (can repeat)
//! --root DIR        ← paths.root override
//! --mounts FILE     ← paths.mounts_file override
//! --dry             ← Plan only, touch nothing
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (falls back to --log-level)
//! --log-file FILE   ← Enable file logging
//! --hugo PATH       ← tools.hugo override
//! --set KEY=VAL     ← Direct settings override
//!
//! Precedence: CLI flags > --set > env > --config > synchub.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Project root holding the site or the files to restructure.
    #[arg(short = 'C', long = "root", value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Mount list file (default: <root>/hugo_sync_hub.toml).
    #[arg(short = 'm', long = "mounts", value_name = "FILE", global = true)]
    pub mounts: Option<PathBuf>,

    /// Path to additional settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Logs the planned moves and prints the merged config without changing
    /// anything on disk.
    #[arg(long, global = true)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true)]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true)]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Hugo executable used to scaffold a new site.
    #[arg(long = "hugo", value_name = "PATH", global = true)]
    pub hugo: Option<PathBuf>,

    /// Sets an option, such as 'global.dry=true' or 'tools/hugo=/opt/hugo'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append, global = true)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Converts command-line options to settings overrides, `--set` first so
    /// that dedicated flags win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(ref root) = self.root {
            overrides.push(format!("paths.root={}", root.display()));
        }

        if let Some(ref mounts) = self.mounts {
            overrides.push(format!("paths.mounts_file={}", mounts.display()));
        }

        if let Some(level) = self.log_level {
            overrides.push(format!("global.output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global.file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        if self.dry {
            overrides.push("global.dry=true".to_string());
        }

        if let Some(ref hugo) = self.hugo {
            overrides.push(format!("tools.hugo={}", hugo.display()));
        }

        overrides
    }
}
