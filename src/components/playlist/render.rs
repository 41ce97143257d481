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

//! UI rendering logic for the playlist view.
//!
//! This module draws the header line and the song list, marking the current
//! song as active, or an empty-state message when there are no songs.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::PlaylistView,
    render::{
        Render,
        icons::{ICON_PAUSE, ICON_PLAY, ICON_SHUFFLE},
    },
    theme::Theme,
};

impl Render for PlaylistView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let count = self.snapshot.songs.len();
        let mut header = vec![Span::styled(
            format!("Playlist | {} {}", count, if count == 1 { "song" } else { "songs" }),
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        )];

        if self.snapshot.is_shuffled {
            header.push(Span::raw(" | "));
            header.push(Span::styled(
                format!("{} shuffled", ICON_SHUFFLE),
                Style::default().fg(theme.shuffle_colour),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(header)).block(header_block), chunks[0]);

        if self.snapshot.songs.is_empty() {
            self.draw_empty(f, chunks[1], theme);
        } else {
            self.draw_songs(f, chunks[1], theme);
        }
    }
}

impl PlaylistView {
    fn draw_empty(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(""),
            Line::from("Your playlist is empty").style(Style::default().fg(theme.song_title_fg)),
            Line::from("Press a to add some songs to get started!")
                .style(Style::default().fg(theme.hint_fg)),
        ];

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn draw_songs(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let current = self.snapshot.current;
        let is_playing = self.snapshot.is_playing;

        let items: Vec<ListItem> = self
            .snapshot
            .songs
            .iter()
            .enumerate()
            .map(|(idx, song)| {
                let active = current == Some(idx);

                let marker = match (active, is_playing) {
                    (true, true) => ICON_PLAY,
                    (true, false) => ICON_PAUSE,
                    _ => " ",
                };

                let title_style = if active {
                    Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.song_title_fg)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", marker), title_style),
                    Span::styled(format!("{:>3}. ", idx + 1), Style::default().fg(theme.hint_fg)),
                    Span::styled(song.title.as_str(), title_style),
                    Span::raw(" by "),
                    Span::styled(song.artist.as_str(), Style::default().fg(theme.song_artist_fg)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .highlight_style(Style::default().bg(theme.cursor_bg));

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
