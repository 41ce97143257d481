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

//! Handlers for individual application events.
//!
//! Playlist errors stop here. The playlist has already raised a notification
//! for the user where one is due, so the handlers only log them.

use std::time::Instant;

use crate::{
    App,
    model::{SongId, notification::Notification, playlist::PlaylistSnapshot},
};

pub(super) fn handle_tick(app: &mut App) {
    app.progress.tick(app.playlist.is_playing());

    let timeout = app.config.notification_timeout();
    let now = Instant::now();
    if app
        .notification
        .as_ref()
        .is_some_and(|n| n.is_expired(now, timeout))
    {
        app.notification = None;
    }
}

pub(super) fn handle_rendered(app: &mut App, snapshot: PlaylistSnapshot) {
    app.playlist_view.set_snapshot(snapshot);
}

pub(super) fn handle_notify(app: &mut App, notification: Notification) {
    // Supersedes whatever is currently displayed
    app.notification = Some(notification);
}

pub(super) fn handle_open_add_song(app: &mut App) {
    app.add_song_dialog.open();
}

pub(super) fn handle_add_song(app: &mut App, title: &str, artist: &str) {
    match app.playlist.add(title, artist) {
        Ok(id) => {
            log::info!("Added song {}", id);
            app.add_song_dialog.close();
        }
        Err(e) => log::debug!("Add rejected: {}", e),
    }
}

pub(super) fn handle_remove(app: &mut App, id: SongId) {
    match app.playlist.remove(id) {
        Ok(song) => log::info!("Removed song {} {:?}", song.id, song.title),
        Err(e) => log::debug!("Remove rejected: {}", e),
    }
}

pub(super) fn handle_play(app: &mut App, id: SongId) {
    if let Err(e) = app.playlist.play_song(id) {
        // Not reported to the user
        log::warn!("Play rejected: {}", e);
    }
}

pub(super) fn handle_toggle_play(app: &mut App) {
    match app.playlist.toggle_play() {
        Ok(playing) => log::debug!("Playing: {}", playing),
        Err(e) => log::debug!("Toggle play rejected: {}", e),
    }
}

pub(super) fn handle_next(app: &mut App) {
    if let Some(song) = app.playlist.next() {
        log::debug!("Next song {}", song.id);
    }
}

pub(super) fn handle_previous(app: &mut App) {
    if let Some(song) = app.playlist.previous() {
        log::debug!("Previous song {}", song.id);
    }
}

pub(super) fn handle_toggle_shuffle(app: &mut App) {
    let shuffled = app.playlist.toggle_shuffle();
    log::info!(
        "Shuffle {}, current index {:?}",
        if shuffled { "on" } else { "off" },
        app.playlist.current_index()
    );

    let original: Vec<_> = app.playlist.original_order().iter().map(|s| s.id).collect();
    log::debug!("Original order {:?}", original);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        events::tests::{settle, test_app},
        model::notification::NotificationLevel,
    };

    #[test]
    fn test_tick_advances_only_while_playing() {
        let mut app = test_app();

        handle_tick(&mut app);
        assert_eq!(app.progress.percent(), 0.0);

        handle_toggle_play(&mut app);
        handle_tick(&mut app);
        assert_eq!(app.progress.percent(), 0.5);
    }

    #[test]
    fn test_tick_expires_notification() {
        let mut app = test_app();
        app.notification = Some(Notification::info("old"));

        handle_tick(&mut app);
        assert!(app.notification.is_some());

        app.config.notification_timeout_ms = 0;
        handle_tick(&mut app);
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_new_notification_supersedes() {
        let mut app = test_app();

        handle_notify(&mut app, Notification::info("first"));
        handle_notify(&mut app, Notification::error("second"));

        let shown = app.notification.as_ref().unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.level, NotificationLevel::Error);
    }

    #[test]
    fn test_add_closes_dialog_only_on_success() {
        let mut app = test_app();
        app.add_song_dialog.open();

        handle_add_song(&mut app, "", "Nobody");
        assert!(app.add_song_dialog.is_active());

        handle_add_song(&mut app, "Levitating", "Dua Lipa");
        assert!(!app.add_song_dialog.is_active());

        settle(&mut app);
        assert_eq!(app.playlist_view.snapshot().songs.len(), 6);
        assert_eq!(
            app.notification.as_ref().unwrap().message,
            "Added \"Levitating\" by Dua Lipa"
        );
    }

    #[test]
    fn test_play_unknown_song_shows_nothing() {
        let mut app = test_app();

        handle_play(&mut app, SongId::new(1234));
        settle(&mut app);

        assert!(app.notification.is_none());
        assert!(!app.playlist.is_playing());
    }

    #[test]
    fn test_view_follows_playlist() {
        let mut app = test_app();

        handle_next(&mut app);
        handle_toggle_shuffle(&mut app);
        settle(&mut app);

        let snapshot = app.playlist_view.snapshot();
        assert!(snapshot.is_shuffled);
        assert_eq!(
            snapshot.current_song().map(|s| s.title.as_str()),
            Some("Blinding Lights")
        );
        assert_eq!(app.notification.as_ref().unwrap().message, "Shuffle enabled");
    }
}
