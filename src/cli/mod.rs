// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for synchub using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! synchub [global options] [command]
//! init        (default)
//! detect
//! mounts [--json]
//! options
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Hugo site restructuring and mount sync.
#[derive(Debug, Parser)]
#[command(
    name = "synchub",
    author,
    version,
    about = "Hugo site restructuring and mount sync",
    long_about = "synchub-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Moves an existing Hugo site at the project root into hugo/,\n\
                  or scaffolds a new one there, then writes the mounts listed\n\
                  in hugo_sync_hub.toml into the site config.\n\n\
                  Invoking `synchub -C path/to/project` runs `init`. See\n\
                  `synchub <command> --help` for more information about a command.",
    after_help = "SETTINGS FILES:\n\n\
                  synchub reads `synchub.toml` from the current directory if it\n\
                  exists. Additional files can be given with --config; later files\n\
                  override earlier ones. SYNCHUB_<SECTION>__<KEY> environment\n\
                  variables override files, --set overrides the environment, and\n\
                  dedicated flags such as --root override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Restructures the project and syncs mounts into the site config.
    Init,

    /// Reports whether a site exists at the root or in the site directory.
    Detect,

    /// Prints the parsed mount list.
    Mounts(MountsArgs),

    /// Lists all settings and their values.
    Options,

    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,
}

/// Arguments for `mounts`.
#[derive(Debug, Clone, Default, Args)]
pub struct MountsArgs {
    /// Print the mounts as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
