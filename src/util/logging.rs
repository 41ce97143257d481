// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Diagnostic logging.
//!
//! The terminal is owned by the UI, so log output goes to a file alongside
//! the configuration file instead of stderr. The filter is taken from
//! `RUST_LOG`, defaulting to `info`.

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
};

use anyhow::{Context, Result};

use crate::config;

const LOG_FILE: &str = "loopify.log";

/// Installs the global logger.
///
/// # Errors
///
/// Returns an error if the log file location cannot be determined or the
/// file cannot be opened.
pub(crate) fn init() -> Result<PathBuf> {
    let path = config::config_path()
        .context("Failed to locate configuration directory")?
        .with_file_name(LOG_FILE);

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to install logger")?;

    Ok(path)
}
