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

//! Playlist view state.
//!
//! The view never reads the playlist directly. It keeps the most recent
//! snapshot the playlist published, plus a list cursor used to pick a song to
//! play or remove.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::model::{Song, playlist::PlaylistSnapshot};

pub(crate) struct PlaylistView {
    snapshot: PlaylistSnapshot,
    pub(crate) list_state: ListState,
}

impl PlaylistView {
    pub(crate) fn new(snapshot: PlaylistSnapshot) -> Self {
        let mut list_state = ListState::default();
        list_state.select(snapshot.current);

        Self {
            snapshot,
            list_state,
        }
    }

    pub(crate) fn snapshot(&self) -> &PlaylistSnapshot {
        &self.snapshot
    }

    /// Replaces the displayed playlist.
    ///
    /// The cursor jumps to the current song whenever that changes, otherwise
    /// it stays put, clamped to the new length. Snapshots older than the one
    /// already shown are ignored.
    pub(crate) fn set_snapshot(&mut self, snapshot: PlaylistSnapshot) {
        if snapshot.revision < self.snapshot.revision {
            return;
        }

        let len = snapshot.songs.len();

        let cursor = if snapshot.current != self.snapshot.current {
            snapshot.current
        } else {
            match self.list_state.selected() {
                _ if len == 0 => None,
                Some(idx) => Some(idx.min(len - 1)),
                None => snapshot.current,
            }
        };

        self.snapshot = snapshot;
        self.list_state.select(cursor);
    }

    pub(crate) fn selected_song(&self) -> Option<&Song> {
        self.list_state
            .selected()
            .and_then(|idx| self.snapshot.songs.get(idx))
    }

    fn select_next(&mut self) {
        let len = self.snapshot.songs.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn select_previous(&mut self) {
        let len = self.snapshot.songs.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SongId;

    fn snapshot(len: u64, current: Option<usize>) -> PlaylistSnapshot {
        snapshot_at(0, len, current)
    }

    fn snapshot_at(revision: u64, len: u64, current: Option<usize>) -> PlaylistSnapshot {
        PlaylistSnapshot {
            songs: (1..=len)
                .map(|n| Song {
                    id: SongId::new(n),
                    title: format!("Song {}", n),
                    artist: "Artist".into(),
                })
                .collect(),
            current,
            is_playing: false,
            is_shuffled: false,
            revision,
        }
    }

    #[test]
    fn test_cursor_wraps() {
        let mut view = PlaylistView::new(snapshot(3, Some(0)));

        view.select_previous();
        assert_eq!(view.list_state.selected(), Some(2));

        view.select_next();
        assert_eq!(view.list_state.selected(), Some(0));
    }

    #[test]
    fn test_cursor_follows_current() {
        let mut view = PlaylistView::new(snapshot(3, Some(0)));
        view.select_next();

        view.set_snapshot(snapshot(3, Some(2)));

        assert_eq!(view.selected_song().unwrap().id, SongId::new(3));
    }

    #[test]
    fn test_cursor_clamped_when_list_shrinks() {
        let mut view = PlaylistView::new(snapshot(3, Some(0)));
        view.select_previous();

        view.set_snapshot(snapshot(2, Some(0)));
        assert_eq!(view.list_state.selected(), Some(1));

        view.set_snapshot(snapshot(0, None));
        assert_eq!(view.list_state.selected(), None);
        assert!(view.selected_song().is_none());
    }

    #[test]
    fn test_stale_snapshot_ignored() {
        let mut view = PlaylistView::new(snapshot_at(3, 2, Some(1)));

        view.set_snapshot(snapshot_at(2, 5, Some(0)));

        assert_eq!(view.snapshot().songs.len(), 2);
        assert_eq!(view.list_state.selected(), Some(1));
    }
}
