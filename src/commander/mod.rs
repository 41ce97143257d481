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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching the corresponding
//! application event when a command is submitted.
//!
//! Positions given to commands are 1-based, as displayed in the playlist.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::AppEvent,
    model::{SongId, notification::Notification, playlist::PlaylistSnapshot},
};

const ADD_USAGE: &str = "Usage: add <title> - <artist>";

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line, returning `true` if it was
    /// consumed.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        snapshot: &PlaylistSnapshot,
        event_tx: &Sender<AppEvent>,
    ) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if !buffer.is_empty() {
                    self.run_command(&buffer, snapshot, event_tx);
                }
                self.input.reset();
                self.active = false;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }

    fn run_command(&self, buffer: &str, snapshot: &PlaylistSnapshot, event_tx: &Sender<AppEvent>) {
        log::debug!("Running command {:?}", buffer);

        let event = match parse_command(buffer, snapshot) {
            Ok(Some(event)) => event,
            Ok(None) => return,
            Err(message) => AppEvent::Notify(Notification::error(message)),
        };

        if event_tx.send(event).is_err() {
            log::warn!("Event channel closed, dropping command {:?}", buffer);
        }
    }
}

/// Translates a command line into the event it requests.
///
/// Returns an error message suitable for showing to the user if the command
/// is not recognised or its arguments are invalid.
fn parse_command(buffer: &str, snapshot: &PlaylistSnapshot) -> Result<Option<AppEvent>, String> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        ["q"] => AppEvent::ExitApplication,

        ["add"] => return Err(ADD_USAGE.to_string()),
        ["add", ..] => {
            let rest = buffer.trim_start()["add".len()..].trim();
            let (title, artist) = rest.split_once(" - ").ok_or_else(|| ADD_USAGE.to_string())?;
            AppEvent::AddSongRequested {
                title: title.to_string(),
                artist: artist.to_string(),
            }
        }

        ["rm", position] => AppEvent::RemoveRequested(song_at(snapshot, position)?),
        ["play", position] => AppEvent::PlayRequested(song_at(snapshot, position)?),

        ["p"] => AppEvent::TogglePlayRequested,
        ["n"] => AppEvent::NextRequested,
        ["pp"] => AppEvent::PreviousRequested,
        ["shuffle"] => AppEvent::ToggleShuffleRequested,

        [] => return Ok(None),

        [cmd, ..] => return Err(format!("Unknown command: {}", cmd)),
    };

    Ok(Some(event))
}

fn song_at(snapshot: &PlaylistSnapshot, position: &str) -> Result<SongId, String> {
    position
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| snapshot.songs.get(idx))
        .map(|song| song.id)
        .ok_or_else(|| format!("No song at position {}", position))
}
