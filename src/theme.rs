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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

use crate::model::notification::NotificationLevel;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) cursor_bg: Color,

    pub(crate) shuffle_colour: Color,

    pub(crate) song_title_fg: Color,
    pub(crate) song_artist_fg: Color,
    pub(crate) hint_fg: Color,

    pub(crate) info_colour: Color,
    pub(crate) success_colour: Color,
    pub(crate) error_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(50, 30, 60),
            commander_colour: Color::Rgb(255, 255, 255),
            cursor_bg: Color::Rgb(70, 45, 90),

            shuffle_colour: Color::Rgb(236, 72, 153),

            song_title_fg: Color::Rgb(255, 255, 255),
            song_artist_fg: Color::Rgb(179, 157, 219),
            hint_fg: Color::Rgb(162, 161, 166),

            info_colour: Color::Rgb(139, 92, 246),
            success_colour: Color::Rgb(16, 185, 129),
            error_colour: Color::Rgb(239, 68, 68),
        }
    }

    pub(crate) fn notification_colour(&self, level: NotificationLevel) -> Color {
        match level {
            NotificationLevel::Info => self.info_colour,
            NotificationLevel::Success => self.success_colour,
            NotificationLevel::Error => self.error_colour,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Non-RGB colours have no hex form and yield
    /// `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
