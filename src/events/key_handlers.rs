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

//! Keyboard routing.
//!
//! Text inputs get first refusal on every key, the add song dialog ahead of
//! the command line. While either holds focus, none of the global shortcuts
//! fire.

use std::sync::mpsc::{self, Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App,
    events::{AppEvent, AppEventProcessor, handle_event},
};

/// Maps keyboard input to playlist requests.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level domain logic. It handles:
///
/// * **Text Entry**: The command line and the add song dialog.
/// * **List Navigation**: Moving the cursor and acting on the song under it.
/// * **Playback**: Play/pause, previous/next and shuffle.
/// * **Application Control**: Life-cycle events like exiting the program.
///
/// Whatever the key asks for is carried out before this returns, so the next
/// key already sees the playlist it left behind. Only the exit request goes
/// back onto the application channel, for the event loop to act on.
///
/// # Arguments
///
/// * `app` - A mutable reference to the application state.
/// * `key` - The key event captured from the terminal backend.
///
/// # Errors
///
/// Returns an error if an event cannot be queued.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let (outbox_tx, outbox_rx) = mpsc::channel();
    route_key_event(app, key, &outbox_tx)?;

    for event in outbox_rx.try_iter() {
        if matches!(event, AppEvent::ExitApplication) {
            app.event_tx.send(event)?;
        } else {
            handle_event(app, event)?;
        }
    }

    Ok(())
}

fn route_key_event(app: &mut App, key: KeyEvent, event_tx: &Sender<AppEvent>) -> Result<()> {
    let event = Event::Key(key);

    if app.add_song_dialog.is_active() {
        return app.add_song_dialog.process_event(event, event_tx);
    }

    let handled = app
        .commander
        .handle_event(&event, app.playlist_view.snapshot(), event_tx);
    if handled {
        return Ok(());
    }

    app.playlist_view.process_event(event, event_tx)?;

    process_global_key_event(key, event_tx)
}

fn process_global_key_event(key: KeyEvent, event_tx: &Sender<AppEvent>) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char(' ') => event_tx.send(AppEvent::TogglePlayRequested)?,
        KeyCode::Left => event_tx.send(AppEvent::PreviousRequested)?,
        KeyCode::Right => event_tx.send(AppEvent::NextRequested)?,
        KeyCode::Char('s') | KeyCode::Char('S') => {
            event_tx.send(AppEvent::ToggleShuffleRequested)?
        }

        KeyCode::Char('a') => event_tx.send(AppEvent::OpenAddSong)?,

        _ => {}
    }

    Ok(())
}
