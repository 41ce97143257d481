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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, songs and
//! the playlist that orders them, along with the cosmetic state (progress,
//! notifications) that the interface derives from the playlist.

pub(crate) mod notification;
pub(crate) mod playlist;
pub(crate) mod progress;
pub(crate) mod shuffle;

use std::fmt;

/// Opaque song identity, allocated by the playlist when a song is added and
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct SongId(u64);

impl SongId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Song {
    pub(crate) id: SongId,
    pub(crate) title: String,
    pub(crate) artist: String,
}

/// A title and artist pair used to seed the playlist at startup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub(crate) struct SeedSong {
    pub(crate) title: String,
    pub(crate) artist: String,
}

impl SeedSong {
    pub(crate) fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }
}

/// The songs loaded when no seed is configured.
pub(crate) fn demo_songs() -> Vec<SeedSong> {
    vec![
        SeedSong::new("Shape of You", "Ed Sheeran"),
        SeedSong::new("Blinding Lights", "The Weeknd"),
        SeedSong::new("Perfect", "Ed Sheeran"),
        SeedSong::new("Watermelon Sugar", "Harry Styles"),
        SeedSong::new("Levitating", "Dua Lipa"),
    ]
}
