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

//! UI rendering logic for the add song dialog.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};
use tui_input::Input;

use crate::{
    components::{AddSongDialog, add_song::DialogField},
    render::{Render, popup_area},
    theme::Theme,
};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 10;

impl Render for AddSongDialog {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = popup_area(area, DIALOG_WIDTH, DIALOG_HEIGHT);

        let block = Block::default()
            .title(" Add Song ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(popup);
        f.render_widget(Clear, popup);
        f.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let fields = [
            (DialogField::Title, "Song Title", &self.title, rows[0], rows[1]),
            (DialogField::Artist, "Artist", &self.artist, rows[3], rows[4]),
        ];

        for (field, label, input, label_area, input_area) in fields {
            let focused = self.focus == field;
            draw_field(f, theme, label, input, label_area, input_area, focused);
        }

        f.render_widget(
            Paragraph::new(Line::from("Enter: add  Tab: switch field  Esc: cancel"))
                .style(Style::default().fg(theme.hint_fg)),
            rows[6],
        );
    }
}

fn draw_field(
    f: &mut Frame,
    theme: &Theme,
    label: &str,
    input: &Input,
    label_area: Rect,
    input_area: Rect,
    focused: bool,
) {
    let label_style = if focused {
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.hint_fg)
    };
    f.render_widget(Paragraph::new(label).style(label_style), label_area);

    // Keep the cursor in view when the entry is wider than the field
    let width = input_area.width.max(1) as usize;
    let scroll = input.visual_scroll(width.saturating_sub(1));

    f.render_widget(
        Paragraph::new(input.value())
            .scroll((0, scroll as u16))
            .style(
                Style::default()
                    .fg(theme.commander_colour)
                    .bg(theme.gauge_track_colour),
            ),
        input_area,
    );

    if focused {
        let cursor_x = input_area.x + input.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position((cursor_x, input_area.y));
    }
}
