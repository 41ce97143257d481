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

//! Playlist error taxonomy.
//!
//! Every error here is recovered at the playlist boundary. Where the user
//! needs telling, the playlist has already raised a notification by the time
//! the caller sees the error, so callers only need to log it.

use thiserror::Error;

use crate::model::SongId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaylistError {
    #[error("song title and artist must not be empty")]
    Validation,

    #[error("no song with id {0} in the playlist")]
    NotFound(SongId),

    #[error("the playlist is empty")]
    EmptyPlaylist,
}
