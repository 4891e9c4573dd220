// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared scaffolder double for site and initializer tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::SiteScaffolder;
use crate::error::ScaffoldError;

/// Config written by a successful [`RecordingScaffolder`] run.
pub(crate) const SCAFFOLDED_CONFIG: &str = "baseURL = \"https://example.org/\"\ntitle = \"New Site\"\n";

#[derive(Clone, Copy, Default)]
enum Behavior {
    /// Write `hugo.toml` into the destination.
    #[default]
    CreateSite,
    /// Succeed without writing anything.
    Empty,
    /// Fail with a non-zero exit.
    Fail,
}

/// Records every `scaffold` call instead of running an external tool.
#[derive(Default)]
pub(crate) struct RecordingScaffolder {
    calls: RefCell<Vec<PathBuf>>,
    behavior: Behavior,
}

impl RecordingScaffolder {
    pub(crate) fn failing() -> Self {
        Self {
            behavior: Behavior::Fail,
            ..Self::default()
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            behavior: Behavior::Empty,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SiteScaffolder for RecordingScaffolder {
    fn scaffold(&self, destination: &Path) -> Result<(), ScaffoldError> {
        self.calls.borrow_mut().push(destination.to_path_buf());
        match self.behavior {
            Behavior::CreateSite => {
                std::fs::create_dir_all(destination).map_err(|source| {
                    ScaffoldError::SpawnFailed {
                        command: "record".to_string(),
                        source,
                    }
                })?;
                std::fs::write(destination.join("hugo.toml"), SCAFFOLDED_CONFIG).map_err(
                    |source| ScaffoldError::SpawnFailed {
                        command: "record".to_string(),
                        source,
                    },
                )?;
                Ok(())
            }
            Behavior::Empty => Ok(()),
            Behavior::Fail => Err(ScaffoldError::NonZeroExit {
                command: "hugo new site".to_string(),
                code: 1,
            }),
        }
    }
}
