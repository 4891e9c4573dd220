// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fresh site creation through an external tool.
//!
//! ```text
//! HugoScaffolder::scaffold(dest)
//!     which(program) --> ExecutableNotFound
//!     <hugo> new site <dest> --force   (stdio inherited, blocking)
//!         spawn error --> SpawnFailed
//!         exit != 0   --> NonZeroExit
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, trace};

use crate::error::ScaffoldError;

/// Materializes a new site tree at a destination directory.
pub trait SiteScaffolder {
    /// Create a fresh site at `destination`.
    ///
    /// # Errors
    ///
    /// Returns a `ScaffoldError` when the site could not be created.
    fn scaffold(&self, destination: &Path) -> Result<(), ScaffoldError>;
}

/// Runs `hugo new site <dest> --force`.
#[derive(Debug, Clone)]
pub struct HugoScaffolder {
    program: PathBuf,
}

impl Default for HugoScaffolder {
    fn default() -> Self {
        Self::new("hugo")
    }
}

impl HugoScaffolder {
    /// Scaffolder using `program`, a bare name looked up in PATH or a path.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn resolve(&self) -> Result<PathBuf, ScaffoldError> {
        which::which(&self.program).map_err(|e| {
            trace!(program = %self.program.display(), error = %e, "which failed");
            ScaffoldError::ExecutableNotFound {
                name: self.program.display().to_string(),
            }
        })
    }
}

impl SiteScaffolder for HugoScaffolder {
    fn scaffold(&self, destination: &Path) -> Result<(), ScaffoldError> {
        let program = self.resolve()?;
        let command_line = format!(
            "{} new site {} --force",
            self.program.display(),
            destination.display()
        );
        info!(dest = %destination.display(), "scaffolding new site");
        debug!(cmd = %command_line, "exec");

        let status = Command::new(&program)
            .arg("new")
            .arg("site")
            .arg(destination)
            .arg("--force")
            .status()
            .map_err(|source| ScaffoldError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ScaffoldError::NonZeroExit {
                command: command_line,
                code: status.code().unwrap_or(-1),
            });
        }
        trace!(cmd = %command_line, "completed");
        Ok(())
    }
}
