// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool settings for synchub.
//!
//! These are the tool's own settings, separate from the Hugo site config it
//! edits.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. synchub.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. SYNCHUB_* env vars
//! 5. --set KEY=VALUE
//! 6. dedicated CLI flags (--root, --dry, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SYNCHUB_GLOBAL__DRY=true        → global.dry = true
//! SYNCHUB_PATHS__ROOT=/srv/docs   → paths.root = "/srv/docs"
//! SYNCHUB_TOOLS__HUGO=/opt/hugo   → tools.hugo = "/opt/hugo"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::logging::LogConfig;
use crate::site::MOUNTS_FILE;

use loader::SettingsLoader;
use types::{GlobalSettings, PathsSettings, ToolsSettings};

/// Settings file picked up from the working directory.
pub const LOCAL_SETTINGS_FILE: &str = "synchub.toml";

/// Prefix of settings environment variables.
pub const ENV_PREFIX: &str = "SYNCHUB";

/// Complete tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Global options.
    pub global: GlobalSettings,
    /// Project locations.
    pub paths: PathsSettings,
    /// External tools.
    pub tools: ToolsSettings,
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use synchub_rs::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("synchub.toml")
    ///     .with_env_prefix("SYNCHUB")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// The project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.paths.root
    }

    /// The mount list file, defaulting to `<root>/hugo_sync_hub.toml`.
    #[must_use]
    pub fn mounts_file(&self) -> PathBuf {
        self.paths
            .mounts_file
            .clone()
            .unwrap_or_else(|| self.paths.root.join(MOUNTS_FILE))
    }

    /// Logging setup derived from `[global]`.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.global.output_log_level)
            .with_file_level(self.global.file_log_level)
            .maybe_with_log_file(self.global.log_file.clone())
            .with_json_file(self.global.log_json)
            .build()
    }

    /// Format settings for display, one `key = value` line each, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_tools_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.log_json".into(), self.global.log_json.to_string());
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("paths.root".into(), self.paths.root.display().to_string());
        options.insert(
            "paths.mounts_file".into(),
            self.mounts_file().display().to_string(),
        );
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("tools.hugo".into(), self.tools.hugo.display().to_string());
    }
}
