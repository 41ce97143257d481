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

//! Simulated playback progress.
//!
//! Nothing is actually played, so the progress bar and the spinning record
//! are driven purely by the tick event while the playlist is playing.

const PERCENT_PER_TICK: f64 = 0.5;
const MAX_PERCENT: f64 = 100.0;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct Progress {
    percent: f64,
    frame: usize,
}

impl Progress {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Advances the progress, wrapping back to zero past 100%. Paused ticks
    /// leave everything where it is.
    pub(crate) fn tick(&mut self, is_playing: bool) {
        if !is_playing {
            return;
        }

        self.percent += PERCENT_PER_TICK;
        if self.percent > MAX_PERCENT {
            self.percent = 0.0;
        }

        self.frame = self.frame.wrapping_add(1);
    }

    pub(crate) fn percent(&self) -> f64 {
        self.percent
    }

    pub(crate) fn ratio(&self) -> f64 {
        (self.percent / MAX_PERCENT).clamp(0.0, 1.0)
    }

    pub(crate) fn frame(&self) -> usize {
        self.frame
    }
}
