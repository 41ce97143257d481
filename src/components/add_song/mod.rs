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

//! Modal dialog used to enter a new song.
//!
//! The dialog only collects text. Validation belongs to the playlist, which
//! reports a rejected entry as a notification and leaves the dialog open so
//! the user can correct it.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogField {
    Title,
    Artist,
}

pub(crate) struct AddSongDialog {
    active: bool,
    pub(crate) title: Input,
    pub(crate) artist: Input,
    pub(crate) focus: DialogField,
}

impl AddSongDialog {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            title: Input::default(),
            artist: Input::default(),
            focus: DialogField::Title,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn open(&mut self) {
        self.active = true;
    }

    /// Hides the dialog, discarding anything entered.
    pub(crate) fn close(&mut self) {
        self.active = false;
        self.title.reset();
        self.artist.reset();
        self.focus = DialogField::Title;
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            DialogField::Title => DialogField::Artist,
            DialogField::Artist => DialogField::Title,
        };
    }

    fn focused_input(&mut self) -> &mut Input {
        match self.focus {
            DialogField::Title => &mut self.title,
            DialogField::Artist => &mut self.artist,
        }
    }
}

impl Default for AddSongDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_resets_entry() {
        let mut dialog = AddSongDialog::new();
        dialog.open();
        dialog.title = Input::new("Halo".into());
        dialog.switch_focus();

        dialog.close();

        assert!(!dialog.is_active());
        assert_eq!(dialog.title.value(), "");
        assert_eq!(dialog.focus, DialogField::Title);
    }

    #[test]
    fn test_switch_focus_alternates() {
        let mut dialog = AddSongDialog::new();

        dialog.switch_focus();
        assert_eq!(dialog.focus, DialogField::Artist);

        dialog.switch_focus();
        assert_eq!(dialog.focus, DialogField::Title);
    }
}
