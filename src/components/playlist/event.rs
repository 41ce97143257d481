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

//! Event routing for the playlist view.
//!
//! Cursor movement is handled locally. Activating or deleting the song under
//! the cursor is turned into a play or remove request for the playlist.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::PlaylistView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for PlaylistView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),

            KeyCode::Enter => {
                if let Some(song) = self.selected_song() {
                    event_tx.send(AppEvent::PlayRequested(song.id))?;
                }
            }

            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(song) = self.selected_song() {
                    event_tx.send(AppEvent::RemoveRequested(song.id))?;
                }
            }

            _ => {}
        }

        Ok(())
    }
}
