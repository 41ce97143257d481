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

//! Render the music player interface.
//!
//! This module renders the visual representation of the current song, the
//! playback controls and the simulated progress bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{
        ICON_MUSIC, ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_SHUFFLE, RECORD_FRAMES,
        RECORD_STILL,
    },
};

/// Renders the main player widget including song info and controls.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let snapshot = app.playlist_view.snapshot();

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let record = if snapshot.is_playing {
        RECORD_FRAMES[app.progress.frame() % RECORD_FRAMES.len()]
    } else {
        RECORD_STILL
    };

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(chunks[0]);

    f.render_widget(
        Paragraph::new(record).fg(theme.accent_colour),
        info_chunks[0],
    );

    let (title_line, artist_line) = match snapshot.current_song() {
        Some(song) => (
            Line::from(vec![
                Span::styled(format!("{} ", ICON_MUSIC), Style::default().fg(theme.hint_fg)),
                Span::styled(
                    song.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )
                .fg(theme.accent_colour),
            ]),
            Line::from(Span::styled(
                song.artist.as_str(),
                Style::default().fg(theme.song_artist_fg),
            )),
        ),
        None => (
            Line::from(Span::styled(
                "No Song Selected",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .fg(theme.song_title_fg),
            Line::from(Span::styled(
                "Add songs to your playlist",
                Style::default().fg(theme.hint_fg),
            )),
        ),
    };

    f.render_widget(Paragraph::new(title_line), info_chunks[1]);
    // Line the artist up under the title, clear of the record
    f.render_widget(Paragraph::new(artist_line), chunks[1].inner(Margin::new(3, 0)));

    let play_icon = if snapshot.is_playing { ICON_PAUSE } else { ICON_PLAY };
    let shuffle_style = if snapshot.is_shuffled {
        Style::default().fg(theme.shuffle_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.hint_fg)
    };

    let controls = Line::from(vec![
        Span::styled(format!("{}  ", ICON_SHUFFLE), shuffle_style),
        Span::styled(format!("{}  ", ICON_PREV), Style::default().fg(theme.song_title_fg)),
        Span::styled(
            format!("{}  ", play_icon),
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        ),
        Span::styled(ICON_NEXT, Style::default().fg(theme.song_title_fg)),
    ]);

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(chunks[3]);

    f.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        control_chunks[0],
    );
    f.render_widget(
        Paragraph::new(format!("{:.0}%", app.progress.percent()))
            .alignment(Alignment::Right)
            .fg(theme.hint_fg),
        control_chunks[1],
    );

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(app.progress.ratio())
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[4]);
}
