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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::model::{self, SeedSong};

pub(crate) const CONFIG_NAME: &str = "loopify";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) tick_interval_ms: u64,
    pub(crate) notification_timeout_ms: u64,
    pub(crate) shuffle_seed: Option<u64>,
    pub(crate) songs: Vec<SeedSong>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            tick_interval_ms: 100,
            notification_timeout_ms: 3000,
            shuffle_seed: None,
            songs: vec![],
        }
    }
}

impl AppConfig {
    pub(crate) fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub(crate) fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    /// The songs to start with, the demo list unless some are configured.
    pub(crate) fn seed_songs(&self) -> Vec<SeedSong> {
        if self.songs.is_empty() {
            model::demo_songs()
        } else {
            self.songs.clone()
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub(crate) fn config_path() -> Result<PathBuf, confy::ConfyError> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
}
