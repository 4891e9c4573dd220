// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mounts command implementation for synchub.

use anyhow::Context;

use crate::cli::MountsArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::mounts::{SyncSpecification, load_mounts};

/// Main handler for the mounts command.
///
/// # Errors
///
/// Returns an error if the mount list cannot be loaded.
pub fn run_mounts_command(args: &MountsArgs, settings: &Settings) -> Result<()> {
    let path = settings.mounts_file();
    let mounts =
        load_mounts(&path).with_context(|| format!("load mounts from {}", path.display()))?;
    println!("{}", format_mounts(&mounts, args.json)?);
    Ok(())
}

/// Render the mount list as `source -> target` lines or a JSON array.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_mounts(mounts: &SyncSpecification, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(mounts.mounts())?);
    }
    if mounts.is_empty() {
        return Ok("No mounts defined".to_string());
    }
    Ok(mounts
        .iter()
        .map(|m| format!("{} -> {}", m.source, m.target))
        .collect::<Vec<_>>()
        .join("\n"))
}
