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

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::AddSongDialog,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for AddSongDialog {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Esc => self.close(),

            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.switch_focus(),

            KeyCode::Enter => {
                // The dialog stays open until the playlist accepts the song
                event_tx.send(AppEvent::AddSongRequested {
                    title: self.title.value().to_string(),
                    artist: self.artist.value().to_string(),
                })?;
            }

            _ => {
                self.focused_input().handle_event(&event);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::KeyEvent;

    use super::*;
    use crate::components::add_song::DialogField;

    fn key(dialog: &mut AddSongDialog, tx: &Sender<AppEvent>, code: KeyCode) {
        dialog
            .process_event(Event::Key(KeyEvent::from(code)), tx)
            .unwrap();
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let (tx, rx) = mpsc::channel();
        let mut dialog = AddSongDialog::new();
        dialog.open();

        key(&mut dialog, &tx, KeyCode::Char('H'));
        key(&mut dialog, &tx, KeyCode::Char('i'));
        key(&mut dialog, &tx, KeyCode::Tab);
        key(&mut dialog, &tx, KeyCode::Char('X'));

        assert_eq!(dialog.title.value(), "Hi");
        assert_eq!(dialog.artist.value(), "X");
        assert_eq!(dialog.focus, DialogField::Artist);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_enter_submits_raw_values() {
        let (tx, rx) = mpsc::channel();
        let mut dialog = AddSongDialog::new();
        dialog.open();

        key(&mut dialog, &tx, KeyCode::Char(' '));
        key(&mut dialog, &tx, KeyCode::Enter);

        let event = rx.try_recv().unwrap();
        assert!(matches!(
            event,
            AppEvent::AddSongRequested { ref title, ref artist } if title == " " && artist.is_empty()
        ));
        assert!(dialog.is_active());
    }

    #[test]
    fn test_escape_cancels() {
        let (tx, rx) = mpsc::channel();
        let mut dialog = AddSongDialog::new();
        dialog.open();

        key(&mut dialog, &tx, KeyCode::Char('a'));
        key(&mut dialog, &tx, KeyCode::Esc);

        assert!(!dialog.is_active());
        assert_eq!(dialog.title.value(), "");
        assert!(rx.try_recv().is_err());
    }
}
