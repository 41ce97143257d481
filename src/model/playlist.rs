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

//! Playlist state and ordering.
//!
//! The [`Playlist`] owns the ordered songs, the pointer to the current song,
//! the playing and shuffle flags, and a snapshot of the order the songs had
//! before shuffling so that shuffle can be undone.
//!
//! It has no knowledge of the terminal. After every change it hands a
//! [`PlaylistSnapshot`] to its [`PlaylistDelegate`], and anything the user
//! should be told about is raised as a [`Notification`] through the same
//! delegate.
//!
//! # Original order
//!
//! Songs are added to, and removed from, the original order whatever the
//! shuffle state. Turning shuffle off therefore restores the pre-shuffle
//! arrangement of the songs that still exist, with any songs added while
//! shuffled at the end.

use crate::{
    error::PlaylistError,
    model::{
        SeedSong, Song, SongId,
        notification::Notification,
        shuffle::{self, RandomSource},
    },
};

/// Receives state changes from a [`Playlist`].
pub(crate) trait PlaylistDelegate {
    fn on_render(&self, snapshot: PlaylistSnapshot);

    fn on_notify(&self, notification: Notification);
}

/// Everything a view needs to draw the playlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PlaylistSnapshot {
    pub(crate) songs: Vec<Song>,
    pub(crate) current: Option<usize>,
    pub(crate) is_playing: bool,
    pub(crate) is_shuffled: bool,

    // Bumped on every render, so a consumer can tell a stale snapshot apart
    pub(crate) revision: u64,
}

impl PlaylistSnapshot {
    pub(crate) fn current_song(&self) -> Option<&Song> {
        self.current.and_then(|idx| self.songs.get(idx))
    }
}

pub(crate) struct Playlist {
    songs: Vec<Song>,
    original_order: Vec<Song>,

    // Some exactly when `songs` is non-empty
    current: Option<usize>,

    is_playing: bool,
    is_shuffled: bool,

    next_id: u64,
    revision: u64,

    delegate: Box<dyn PlaylistDelegate>,
    random: Box<dyn RandomSource>,
}

impl Playlist {
    pub(crate) fn new(delegate: Box<dyn PlaylistDelegate>, random: Box<dyn RandomSource>) -> Self {
        Self {
            songs: Vec::new(),
            original_order: Vec::new(),
            current: None,
            is_playing: false,
            is_shuffled: false,
            next_id: 1,
            revision: 0,
            delegate,
            random,
        }
    }

    /// Creates a playlist pre-populated with `seed`.
    ///
    /// Seed songs are added without per-song renders or notifications, a
    /// single render is issued once seeding is complete. Invalid entries are
    /// skipped.
    pub(crate) fn with_songs(
        seed: &[SeedSong],
        delegate: Box<dyn PlaylistDelegate>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        let mut playlist = Self::new(delegate, random);

        for entry in seed {
            if let Err(e) = playlist.insert(&entry.title, &entry.artist, false) {
                log::warn!("Skipping seed song {:?}: {}", entry, e);
            }
        }

        log::info!("Playlist seeded with {} songs", playlist.songs.len());

        playlist.render();
        playlist
    }

    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn original_order(&self) -> &[Song] {
        &self.original_order
    }

    pub(crate) fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub(crate) fn current_song(&self) -> Option<&Song> {
        self.current.and_then(|idx| self.songs.get(idx))
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn is_shuffled(&self) -> bool {
        self.is_shuffled
    }

    pub(crate) fn snapshot(&self) -> PlaylistSnapshot {
        PlaylistSnapshot {
            songs: self.songs.clone(),
            current: self.current,
            is_playing: self.is_playing,
            is_shuffled: self.is_shuffled,
            revision: self.revision,
        }
    }

    /// Appends a new song, returning its freshly allocated id.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::Validation`] if the title or artist is blank
    /// once trimmed, in which case nothing is added.
    pub(crate) fn add(&mut self, title: &str, artist: &str) -> Result<SongId, PlaylistError> {
        self.insert(title, artist, true)
    }

    fn insert(&mut self, title: &str, artist: &str, notify: bool) -> Result<SongId, PlaylistError> {
        let title = title.trim();
        let artist = artist.trim();

        if title.is_empty() || artist.is_empty() {
            if notify {
                self.notify(Notification::error("Please enter both song title and artist"));
            }
            return Err(PlaylistError::Validation);
        }

        let id = SongId::new(self.next_id);
        self.next_id += 1;

        let song = Song {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
        };

        log::debug!("Adding song {} {:?} by {:?}", id, title, artist);

        self.original_order.push(song.clone());
        self.songs.push(song);

        if self.current.is_none() {
            self.current = Some(0);
        }

        if notify {
            self.render();
            self.notify(Notification::success(format!("Added \"{}\" by {}", title, artist)));
        }

        Ok(id)
    }

    /// Removes a song, returning it.
    ///
    /// The current index follows slot semantics rather than identity: removing
    /// a song before the current one shifts the index down, removing the
    /// current song leaves the index on whichever song slid into its slot
    /// (wrapping to the first song if it was the last).
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::NotFound`] if there is no such song.
    pub(crate) fn remove(&mut self, id: SongId) -> Result<Song, PlaylistError> {
        let Some(index) = self.position(id) else {
            self.notify(Notification::error("Song not found in playlist"));
            return Err(PlaylistError::NotFound(id));
        };

        let removed = self.songs.remove(index);
        self.original_order.retain(|song| song.id != id);

        self.current = match self.current {
            _ if self.songs.is_empty() => None,
            Some(current) if index < current => Some(current - 1),
            Some(current) if index == current && current >= self.songs.len() => Some(0),
            current => current,
        };

        log::debug!("Removed song {} at {}, current now {:?}", id, index, self.current);

        self.render();
        self.notify(Notification::info(format!("Removed \"{}\"", removed.title)));

        Ok(removed)
    }

    /// Makes a song current and starts playing it.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::NotFound`] if there is no such song. Unlike
    /// the other operations no notification is raised for this.
    pub(crate) fn play_song(&mut self, id: SongId) -> Result<(), PlaylistError> {
        let index = self.position(id).ok_or(PlaylistError::NotFound(id))?;

        self.current = Some(index);
        self.is_playing = true;

        log::debug!("Playing song {} at {}", id, index);

        self.render();

        Ok(())
    }

    /// Flips between playing and paused, returning the new playing state.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::EmptyPlaylist`] if there is nothing to play.
    pub(crate) fn toggle_play(&mut self) -> Result<bool, PlaylistError> {
        let Some(title) = self.current_song().map(|song| song.title.clone()) else {
            self.notify(Notification::error("No songs in playlist"));
            return Err(PlaylistError::EmptyPlaylist);
        };

        self.is_playing = !self.is_playing;

        let action = if self.is_playing { "Playing" } else { "Paused" };

        self.render();
        self.notify(Notification::info(format!("{}: {}", action, title)));

        Ok(self.is_playing)
    }

    /// Moves to the next song, wrapping from the last to the first.
    ///
    /// Does nothing on an empty playlist.
    pub(crate) fn next(&mut self) -> Option<&Song> {
        let len = self.songs.len();
        let current = self.current?;
        self.step_to((current + 1) % len)
    }

    /// Moves to the previous song, wrapping from the first to the last.
    ///
    /// Does nothing on an empty playlist.
    pub(crate) fn previous(&mut self) -> Option<&Song> {
        let len = self.songs.len();
        let current = self.current?;
        self.step_to((current + len - 1) % len)
    }

    fn step_to(&mut self, index: usize) -> Option<&Song> {
        self.current = Some(index);

        self.render();

        if self.is_playing
            && let Some(song) = self.songs.get(index)
        {
            let message = format!("Now playing: {}", song.title);
            self.notify(Notification::info(message));
        }

        self.songs.get(index)
    }

    /// Turns shuffle on or off, returning the new shuffle state.
    ///
    /// Turning shuffle on permutes the playlist, turning it off restores the
    /// original order. The current song is kept current either way.
    pub(crate) fn toggle_shuffle(&mut self) -> bool {
        self.is_shuffled = !self.is_shuffled;

        if self.is_shuffled {
            self.shuffle();
            self.notify(Notification::info("Shuffle enabled"));
        } else {
            self.restore();
            self.notify(Notification::info("Shuffle disabled"));
        }

        self.is_shuffled
    }

    /// Randomly permutes the playlist in place, leaving the original order
    /// untouched.
    pub(crate) fn shuffle(&mut self) {
        let current_id = self.current_song().map(|song| song.id);

        shuffle::fisher_yates(&mut self.songs, self.random.as_mut());
        self.relocate(current_id);

        log::debug!("Shuffled {} songs, current now {:?}", self.songs.len(), self.current);

        self.render();
    }

    /// Replaces the playlist with the original order.
    pub(crate) fn restore(&mut self) {
        let current_id = self.current_song().map(|song| song.id);

        self.songs = self.original_order.clone();
        self.relocate(current_id);

        log::debug!("Restored {} songs, current now {:?}", self.songs.len(), self.current);

        self.render();
    }

    fn position(&self, id: SongId) -> Option<usize> {
        self.songs.iter().position(|song| song.id == id)
    }

    fn relocate(&mut self, id: Option<SongId>) {
        self.current = id
            .and_then(|id| self.position(id))
            .or_else(|| (!self.songs.is_empty()).then_some(0));
    }

    fn render(&mut self) {
        self.revision += 1;
        self.delegate.on_render(self.snapshot());
    }

    fn notify(&self, notification: Notification) {
        self.delegate.on_notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashSet, rc::Rc};

    use super::*;
    use crate::model::{
        notification::NotificationLevel,
        shuffle::{RngSource, tests::ScriptedSource},
    };

    #[derive(Default, Clone)]
    struct Recorder {
        renders: Rc<RefCell<Vec<PlaylistSnapshot>>>,
        notifications: Rc<RefCell<Vec<Notification>>>,
    }

    impl Recorder {
        fn render_count(&self) -> usize {
            self.renders.borrow().len()
        }

        fn last_render(&self) -> Option<PlaylistSnapshot> {
            self.renders.borrow().last().cloned()
        }

        fn messages(&self) -> Vec<(String, NotificationLevel)> {
            self.notifications
                .borrow()
                .iter()
                .map(|n| (n.message.clone(), n.level))
                .collect()
        }

        fn clear(&self) {
            self.renders.borrow_mut().clear();
            self.notifications.borrow_mut().clear();
        }
    }

    impl PlaylistDelegate for Recorder {
        fn on_render(&self, snapshot: PlaylistSnapshot) {
            self.renders.borrow_mut().push(snapshot);
        }

        fn on_notify(&self, notification: Notification) {
            self.notifications.borrow_mut().push(notification);
        }
    }

    fn playlist_of(titles: &[&str], picks: &[usize]) -> (Playlist, Recorder) {
        let recorder = Recorder::default();
        let seed: Vec<SeedSong> = titles.iter().map(|t| SeedSong::new(t, "Artist")).collect();
        let playlist = Playlist::with_songs(
            &seed,
            Box::new(recorder.clone()),
            Box::new(ScriptedSource::new(picks)),
        );
        recorder.clear();
        (playlist, recorder)
    }

    fn titles(songs: &[Song]) -> Vec<&str> {
        songs.iter().map(|s| s.title.as_str()).collect()
    }

    fn id_of(playlist: &Playlist, title: &str) -> SongId {
        playlist
            .songs()
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.id)
            .unwrap()
    }

    #[test]
    fn test_seeding_renders_once_and_syncs_original() {
        let recorder = Recorder::default();
        let playlist = Playlist::with_songs(
            &crate::model::demo_songs(),
            Box::new(recorder.clone()),
            Box::new(ScriptedSource::new(&[])),
        );

        assert_eq!(playlist.songs().len(), 5);
        assert_eq!(playlist.original_order(), playlist.songs());
        assert_eq!(playlist.current_index(), Some(0));
        assert_eq!(recorder.render_count(), 1);
        assert!(recorder.messages().is_empty());
    }

    #[test]
    fn test_seeding_skips_invalid_entries() {
        let seed = vec![SeedSong::new("Perfect", "Ed Sheeran"), SeedSong::new("  ", "Nobody")];
        let playlist = Playlist::with_songs(
            &seed,
            Box::new(Recorder::default()),
            Box::new(ScriptedSource::new(&[])),
        );

        assert_eq!(titles(playlist.songs()), vec!["Perfect"]);
    }

    #[test]
    fn test_add_grows_by_one_with_unique_ids() {
        let (mut playlist, _) = playlist_of(&[], &[]);
        let mut ids = HashSet::new();

        for n in 0..50 {
            let id = playlist.add(&format!("Song {}", n), "Artist").unwrap();
            assert!(ids.insert(id));
            assert_eq!(playlist.songs().len(), n + 1);
        }
    }

    #[test]
    fn test_add_trims_and_notifies() {
        let (mut playlist, recorder) = playlist_of(&[], &[]);

        let id = playlist.add("  Levitating ", " Dua Lipa\t").unwrap();

        let song = &playlist.songs()[0];
        assert_eq!(song.id, id);
        assert_eq!(song.title, "Levitating");
        assert_eq!(song.artist, "Dua Lipa");
        assert_eq!(playlist.current_index(), Some(0));
        assert_eq!(recorder.render_count(), 1);
        assert_eq!(
            recorder.messages(),
            vec![("Added \"Levitating\" by Dua Lipa".to_string(), NotificationLevel::Success)]
        );
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let (mut playlist, recorder) = playlist_of(&["A"], &[]);
        let before = playlist.snapshot();

        for (title, artist) in [("", "Artist"), ("Title", ""), ("", ""), ("   ", "Artist"), ("Title", " \n ")] {
            assert_eq!(playlist.add(title, artist), Err(PlaylistError::Validation));
        }

        assert_eq!(playlist.snapshot(), before);
        assert_eq!(playlist.original_order().len(), 1);
        assert_eq!(recorder.render_count(), 0);
        assert!(
            recorder
                .messages()
                .iter()
                .all(|(msg, level)| msg == "Please enter both song title and artist"
                    && *level == NotificationLevel::Error)
        );
    }

    #[test]
    fn test_remove_missing_leaves_state() {
        let (mut playlist, recorder) = playlist_of(&["A", "B"], &[]);
        let before = playlist.snapshot();

        let missing = SongId::new(999);
        assert_eq!(playlist.remove(missing), Err(PlaylistError::NotFound(missing)));

        assert_eq!(playlist.snapshot(), before);
        assert_eq!(recorder.render_count(), 0);
        assert_eq!(
            recorder.messages(),
            vec![("Song not found in playlist".to_string(), NotificationLevel::Error)]
        );
    }

    #[test]
    fn test_remove_before_current_shifts_index() {
        let (mut playlist, recorder) = playlist_of(&["A", "B", "C"], &[]);
        assert_eq!(titles(playlist.songs()), vec!["A", "B", "C"]);
        assert_eq!(id_of(&playlist, "A"), SongId::new(1));

        playlist.next();
        assert_eq!(playlist.current_index(), Some(1));

        let removed = playlist.remove(SongId::new(1)).unwrap();

        assert_eq!(removed.title, "A");
        assert_eq!(playlist.current_index(), Some(0));
        assert_eq!(playlist.current_song().unwrap().title, "B");
        assert_eq!(titles(playlist.songs()), vec!["B", "C"]);
        assert_eq!(
            recorder.messages().last(),
            Some(&("Removed \"A\"".to_string(), NotificationLevel::Info))
        );
    }

    #[test]
    fn test_remove_current_keeps_slot() {
        let (mut playlist, _) = playlist_of(&["A", "B", "C"], &[]);
        playlist.next();

        playlist.remove(id_of(&playlist, "B")).unwrap();

        assert_eq!(playlist.current_index(), Some(1));
        assert_eq!(playlist.current_song().unwrap().title, "C");
    }

    #[test]
    fn test_remove_current_last_wraps_to_first() {
        let (mut playlist, _) = playlist_of(&["A", "B", "C"], &[]);
        playlist.previous();
        assert_eq!(playlist.current_index(), Some(2));

        playlist.remove(id_of(&playlist, "C")).unwrap();

        assert_eq!(playlist.current_index(), Some(0));
        assert_eq!(playlist.current_song().unwrap().title, "A");
    }

    #[test]
    fn test_remove_after_current_keeps_index() {
        let (mut playlist, _) = playlist_of(&["A", "B", "C"], &[]);

        playlist.remove(id_of(&playlist, "C")).unwrap();

        assert_eq!(playlist.current_index(), Some(0));
        assert_eq!(playlist.original_order().len(), 2);
    }

    #[test]
    fn test_remove_last_song_clears_current() {
        let (mut playlist, recorder) = playlist_of(&["A"], &[]);

        playlist.remove(id_of(&playlist, "A")).unwrap();

        assert!(playlist.songs().is_empty());
        assert!(playlist.original_order().is_empty());
        assert_eq!(playlist.current_index(), None);
        assert_eq!(recorder.last_render().unwrap().current, None);
    }

    #[test]
    fn test_play_song_is_silent() {
        let (mut playlist, recorder) = playlist_of(&["A", "B", "C"], &[]);

        playlist.play_song(id_of(&playlist, "C")).unwrap();

        assert_eq!(playlist.current_index(), Some(2));
        assert!(playlist.is_playing());
        assert_eq!(recorder.render_count(), 1);
        assert!(recorder.messages().is_empty());
    }

    #[test]
    fn test_play_unknown_song_is_silent() {
        let (mut playlist, recorder) = playlist_of(&["A"], &[]);

        let missing = SongId::new(42);
        assert_eq!(playlist.play_song(missing), Err(PlaylistError::NotFound(missing)));

        assert!(!playlist.is_playing());
        assert_eq!(recorder.render_count(), 0);
        assert!(recorder.messages().is_empty());
    }

    #[test]
    fn test_toggle_play_names_current_song() {
        let (mut playlist, recorder) = playlist_of(&["A", "B"], &[]);
        playlist.next();
        assert!(recorder.messages().is_empty());

        assert_eq!(playlist.toggle_play(), Ok(true));
        assert_eq!(
            recorder.messages(),
            vec![("Playing: B".to_string(), NotificationLevel::Info)]
        );

        assert_eq!(playlist.toggle_play(), Ok(false));
        assert_eq!(
            recorder.messages().last(),
            Some(&("Paused: B".to_string(), NotificationLevel::Info))
        );
    }

    #[test]
    fn test_toggle_play_on_empty() {
        let (mut playlist, recorder) = playlist_of(&[], &[]);

        assert_eq!(playlist.toggle_play(), Err(PlaylistError::EmptyPlaylist));

        assert!(!playlist.is_playing());
        assert_eq!(
            recorder.messages(),
            vec![("No songs in playlist".to_string(), NotificationLevel::Error)]
        );
    }

    #[test]
    fn test_navigation_is_circular() {
        let (mut playlist, _) = playlist_of(&["A", "B", "C", "D"], &[]);
        playlist.next();
        let start = playlist.current_index();

        for _ in 0..4 {
            playlist.next();
        }
        assert_eq!(playlist.current_index(), start);

        for _ in 0..4 {
            playlist.previous();
        }
        assert_eq!(playlist.current_index(), start);

        assert_eq!(playlist.previous().unwrap().title, "A");
        assert_eq!(playlist.previous().unwrap().title, "D");
        assert_eq!(playlist.next().unwrap().title, "A");
    }

    #[test]
    fn test_navigation_announces_only_while_playing() {
        let (mut playlist, recorder) = playlist_of(&["A", "B"], &[]);

        playlist.next();
        assert_eq!(recorder.render_count(), 1);
        assert!(recorder.messages().is_empty());

        playlist.toggle_play().unwrap();
        recorder.clear();

        playlist.next();
        assert_eq!(
            recorder.messages(),
            vec![("Now playing: A".to_string(), NotificationLevel::Info)]
        );
    }

    #[test]
    fn test_navigation_on_empty_is_noop() {
        let (mut playlist, recorder) = playlist_of(&[], &[]);

        assert!(playlist.next().is_none());
        assert!(playlist.previous().is_none());
        assert_eq!(playlist.current_index(), None);
        assert_eq!(recorder.render_count(), 0);
    }

    #[test]
    fn test_shuffle_keeps_current_song() {
        let (mut playlist, _) = playlist_of(&["A", "B", "C", "D"], &[0, 2, 0]);

        playlist.shuffle();

        assert_eq!(titles(playlist.songs()), vec!["B", "D", "C", "A"]);
        assert_eq!(playlist.current_index(), Some(3));
        assert_eq!(playlist.current_song().unwrap().title, "A");
        assert_eq!(titles(playlist.original_order()), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let recorder = Recorder::default();
        let seed: Vec<SeedSong> = (0..30).map(|n| SeedSong::new(&n.to_string(), "Artist")).collect();
        let mut playlist = Playlist::with_songs(
            &seed,
            Box::new(recorder),
            Box::new(RngSource::from_seed(Some(7))),
        );

        let mut before: Vec<SongId> = playlist.songs().iter().map(|s| s.id).collect();
        playlist.play_song(before[10]).unwrap();

        playlist.shuffle();

        let mut after: Vec<SongId> = playlist.songs().iter().map(|s| s.id).collect();
        assert_eq!(playlist.current_song().unwrap().id, before[10]);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_restore_undoes_shuffle() {
        let recorder = Recorder::default();
        let seed: Vec<SeedSong> = (0..12).map(|n| SeedSong::new(&n.to_string(), "Artist")).collect();
        let mut playlist = Playlist::with_songs(
            &seed,
            Box::new(recorder),
            Box::new(RngSource::from_seed(Some(11))),
        );
        let original = playlist.songs().to_vec();
        let current = original[5].id;
        playlist.play_song(current).unwrap();

        playlist.shuffle();
        playlist.restore();

        assert_eq!(playlist.songs(), original.as_slice());
        assert_eq!(playlist.current_index(), Some(5));
    }

    #[test]
    fn test_toggle_shuffle_round_trip() {
        let (mut playlist, recorder) = playlist_of(&["A", "B", "C", "D"], &[0, 2, 0]);

        assert!(playlist.toggle_shuffle());
        assert!(playlist.is_shuffled());
        assert!(recorder.last_render().unwrap().is_shuffled);

        assert!(!playlist.toggle_shuffle());
        assert!(!playlist.is_shuffled());
        assert_eq!(titles(playlist.songs()), vec!["A", "B", "C", "D"]);
        assert_eq!(playlist.current_index(), Some(0));

        assert_eq!(
            recorder.messages(),
            vec![
                ("Shuffle enabled".to_string(), NotificationLevel::Info),
                ("Shuffle disabled".to_string(), NotificationLevel::Info),
            ]
        );
    }

    #[test]
    fn test_toggle_shuffle_on_empty() {
        let (mut playlist, _) = playlist_of(&[], &[]);

        assert!(playlist.toggle_shuffle());
        assert!(!playlist.toggle_shuffle());
        assert_eq!(playlist.current_index(), None);
    }

    #[test]
    fn test_add_while_shuffled_survives_restore() {
        let (mut playlist, _) = playlist_of(&["A", "B", "C"], &[0, 0]);
        playlist.toggle_shuffle();

        playlist.add("E", "Artist").unwrap();
        playlist.toggle_shuffle();

        assert_eq!(titles(playlist.songs()), vec!["A", "B", "C", "E"]);
    }

    #[test]
    fn test_remove_while_shuffled_survives_restore() {
        let (mut playlist, _) = playlist_of(&["A", "B", "C"], &[0, 0]);
        playlist.play_song(id_of(&playlist, "C")).unwrap();
        playlist.toggle_shuffle();

        playlist.remove(id_of(&playlist, "A")).unwrap();
        playlist.toggle_shuffle();

        assert_eq!(titles(playlist.songs()), vec!["B", "C"]);
        assert_eq!(playlist.current_song().unwrap().title, "C");
    }

    #[test]
    fn test_each_render_carries_a_newer_revision() {
        let (mut playlist, recorder) = playlist_of(&["A", "B"], &[]);
        let seeded = playlist.snapshot().revision;

        playlist.next();
        playlist.toggle_play().unwrap();

        let revisions: Vec<u64> = recorder.renders.borrow().iter().map(|s| s.revision).collect();
        assert_eq!(revisions, vec![seeded + 1, seeded + 2]);
        assert_eq!(playlist.snapshot().revision, seeded + 2);
    }
}
