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

//! # Loopify.
//!
//! A terminal playlist manager.
//!
//! Songs are kept in a looping playlist that can be stepped through in either
//! direction, shuffled and restored. Nothing is actually played, playback is
//! simulated by a progress bar driven from the tick event.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the playlist, manages the terminal lifecycle
//!   and UI rendering.
//! * **Event Threads** capture user input and system ticks to drive the UI
//!   state.
//! * The **Playlist** reports every change back through the same event
//!   channel, so the views only ever see the snapshots it publishes.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Communication
//! between threads is handled via `std::sync::mpsc` channels.

mod commander;
mod components;
mod config;
mod error;
mod events;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    commander::Commander,
    components::{AddSongDialog, PlaylistView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{
        notification::Notification, playlist::Playlist, progress::Progress, shuffle::RngSource,
    },
    theme::Theme,
};

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub playlist: Playlist,

    pub playlist_view: PlaylistView,
    pub add_song_dialog: AddSongDialog,
    pub commander: Commander,

    pub progress: Progress,
    pub notification: Option<Notification>,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// The playlist is seeded from the configuration and publishes its first
    /// snapshot onto the event channel straight away.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let playlist = Playlist::with_songs(
            &config.seed_songs(),
            Box::new(event_tx.clone()),
            Box::new(RngSource::from_seed(config.shuffle_seed)),
        );
        let playlist_view = PlaylistView::new(playlist.snapshot());

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            playlist,
            playlist_view,
            add_song_dialog: AddSongDialog::new(),
            commander: Commander::new(),
            progress: Progress::new(),
            notification: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, installs the logger, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    // Nothing is on the alternate screen yet, so stderr is still visible
    match util::logging::init() {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    log::info!("Loaded configuration version {}", config.version);

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's input threads and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * An input thread to poll for system keyboard events.
/// * A tick thread to advance playback progress and trigger periodic UI
///   refreshes.
///
/// After spawning the threads, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read()
                && tx_keys.send(AppEvent::Key(key)).is_err()
            {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    let tick_interval = app.config.tick_interval();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_interval);
        }
    });

    log::info!("Starting with {} songs", app.playlist.songs().len());

    // Draw once up front, the first snapshot is already queued but there is
    // no need to wait for it
    terminal.draw(|f| render::draw(f, app))?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
