// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Command Dispatch
//!   Init (default) | Detect | Mounts | Options | Version
//! ```

use std::process::ExitCode;

use synchub_rs::cli::global::GlobalOptions;
use synchub_rs::cli::{self, Command};
use synchub_rs::cmd::config::run_options_command;
use synchub_rs::cmd::detect::run_detect_command;
use synchub_rs::cmd::init::run_init_command;
use synchub_rs::cmd::mounts::run_mounts_command;
use synchub_rs::config::loader::SettingsLoader;
use synchub_rs::config::{ENV_PREFIX, LOCAL_SETTINGS_FILE, Settings};
use synchub_rs::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let settings = match load_settings(&cli.global) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&settings.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &settings)
}

fn dispatch_command(cli: &cli::Cli, settings: &Settings) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(settings);
            Ok(())
        }
        Some(Command::Detect) => {
            run_detect_command(settings);
            Ok(())
        }
        Some(Command::Mounts(args)) => run_mounts_command(args, settings),
        Some(Command::Init) | None => run_init_command(settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_settings_loader(global: &GlobalOptions) -> synchub_rs::error::Result<SettingsLoader> {
    let mut loader = SettingsLoader::new().add_toml_file_optional(LOCAL_SETTINGS_FILE);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader
        .with_env_prefix(ENV_PREFIX)
        .apply_overrides(&global.to_config_overrides())
}

fn load_settings(global: &GlobalOptions) -> synchub_rs::error::Result<Settings> {
    build_settings_loader(global)?.build()
}
