// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Detect command implementation for synchub.

use std::path::Path;

use crate::config::Settings;
use crate::site::{detect_existing_site, locate_site_config, plan_relocation, site_destination};

/// Main handler for the detect command.
pub fn run_detect_command(settings: &Settings) {
    for line in format_detect(settings.root()) {
        println!("{line}");
    }
}

/// Describe where the site config lives under `root`.
#[must_use]
pub fn format_detect(root: &Path) -> Vec<String> {
    let destination = site_destination(root);
    let mut lines = Vec::new();

    match detect_existing_site(root) {
        Some(config) => {
            lines.push(format!("root:     {config}"));
            let plan = plan_relocation(root, &destination);
            lines.push(format!("movable:  {}", plan.items().join(", ")));
            if !plan.collisions().is_empty() {
                lines.push(format!("conflict: {}", plan.collisions().join(", ")));
            }
        }
        None => lines.push("root:     none".to_string()),
    }

    let site = locate_site_config(&destination)
        .map_or_else(|| "none".to_string(), |p| p.display().to_string());
    lines.push(format!("site:     {site}"));
    lines
}
