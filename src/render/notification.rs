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

//! Render the notification toast.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{model::notification::Notification, theme::Theme};

const TOAST_MAX_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Draws the notification in the top right corner of `area`.
pub(crate) fn draw_notification(
    f: &mut Frame,
    area: Rect,
    notification: &Notification,
    theme: &Theme,
) {
    let area = toast_area(area, notification.message.chars().count());
    if area.is_empty() {
        return;
    }

    let colour = theme.notification_colour(notification.level);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::horizontal(1));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(notification.message.as_str())
            .style(Style::default().fg(theme.song_title_fg))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn toast_area(area: Rect, message_len: usize) -> Rect {
    // Borders and padding take four columns
    let wanted = u16::try_from(message_len).unwrap_or(u16::MAX).saturating_add(4);
    let width = wanted.min(TOAST_MAX_WIDTH).min(area.width.saturating_sub(2));
    let height = TOAST_HEIGHT.min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1.min(area.height.saturating_sub(height)),
        width,
        height,
    }
}
