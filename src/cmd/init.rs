// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Init command implementation for synchub.

use crate::config::Settings;
use crate::error::Result;
use crate::initializer::{InitReport, SiteInitializer};
use crate::site::HugoScaffolder;

/// Main handler for the init command.
///
/// # Errors
///
/// Returns the failing step's error if initialization does not complete.
pub fn run_init_command(settings: &Settings) -> Result<()> {
    let scaffolder = HugoScaffolder::new(&settings.tools.hugo);
    let report = SiteInitializer::builder()
        .with_project_root(settings.root())
        .with_mounts_file(settings.mounts_file())
        .with_scaffolder(&scaffolder)
        .with_dry_run(settings.global.dry)
        .build()
        .run()?;

    for line in format_init_report(&report) {
        println!("{line}");
    }
    Ok(())
}

/// Lines printed after a run. A real run prints one confirmation line; a dry
/// run prints a summary followed by the rendered config.
#[must_use]
pub fn format_init_report(report: &InitReport) -> Vec<String> {
    let Some(preview) = &report.preview else {
        let config = report.config_path.as_ref().map_or_else(
            || report.destination.display().to_string(),
            |p| p.display().to_string(),
        );
        return vec![format!("Synced {} mount(s) into {config}", report.mounts)];
    };

    let action = if report.scaffolded {
        "scaffold a new site".to_string()
    } else if report.relocated.is_empty() {
        "keep the existing site".to_string()
    } else {
        format!("move {}", report.relocated.join(", "))
    };
    let mut lines = vec![
        format!("[dry] would {action} in {}", report.destination.display()),
        format!("[dry] merged config with {} mount(s):", report.mounts),
    ];
    lines.extend(preview.lines().map(String::from));
    lines
}
