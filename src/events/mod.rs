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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), the playlist and the UI
//! rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel fed by the input and tick threads, and by the playlist itself.
//! 2. **Process**: The [`process_events`] function applies each event to the
//!    [`App`] state, one at a time, each running to completion.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! The playlist reports its own changes back through the same channel (see
//! the [`PlaylistDelegate`] implementation below), so the views only ever see
//! the playlist through the snapshots it publishes.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{
        SongId,
        notification::Notification,
        playlist::{PlaylistDelegate, PlaylistSnapshot},
    },
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Tick,

    Rendered(PlaylistSnapshot),
    Notify(Notification),

    OpenAddSong,

    AddSongRequested { title: String, artist: String },
    RemoveRequested(SongId),
    PlayRequested(SongId),
    TogglePlayRequested,
    NextRequested,
    PreviousRequested,
    ToggleShuffleRequested,

    ExitApplication,
}

impl AppEvent {
    /// Whether the event asks the playlist to change.
    pub(crate) fn is_request(&self) -> bool {
        matches!(
            self,
            AppEvent::AddSongRequested { .. }
                | AppEvent::RemoveRequested(_)
                | AppEvent::PlayRequested(_)
                | AppEvent::TogglePlayRequested
                | AppEvent::NextRequested
                | AppEvent::PreviousRequested
                | AppEvent::ToggleShuffleRequested
        )
    }
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            log::info!("Exit requested");
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// Playlist requests leave the view showing the playlist as it now stands,
/// without waiting for the queued render to come round.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    let request = event.is_request();

    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Tick => handle_tick(app),
        AppEvent::Rendered(snapshot) => handle_rendered(app, snapshot),
        AppEvent::Notify(notification) => handle_notify(app, notification),
        AppEvent::OpenAddSong => handle_open_add_song(app),
        AppEvent::AddSongRequested { title, artist } => handle_add_song(app, &title, &artist),
        AppEvent::RemoveRequested(id) => handle_remove(app, id),
        AppEvent::PlayRequested(id) => handle_play(app, id),
        AppEvent::TogglePlayRequested => handle_toggle_play(app),
        AppEvent::NextRequested => handle_next(app),
        AppEvent::PreviousRequested => handle_previous(app),
        AppEvent::ToggleShuffleRequested => handle_toggle_shuffle(app),
        AppEvent::ExitApplication => {}
    }

    if request {
        let snapshot = app.playlist.snapshot();
        handle_rendered(app, snapshot);
    }

    Ok(())
}

impl PlaylistDelegate for Sender<AppEvent> {
    fn on_render(&self, snapshot: PlaylistSnapshot) {
        // The receiver only goes away when the application is shutting down
        let _ = self.send(AppEvent::Rendered(snapshot));
    }

    fn on_notify(&self, notification: Notification) {
        let _ = self.send(AppEvent::Notify(notification));
    }
}
