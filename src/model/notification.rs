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

//! Transient user notifications.
//!
//! Notifications are fire-and-forget. Only one is ever displayed, a newly
//! raised notification replaces the current one, and each is dismissed once
//! its display timeout has elapsed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Notification {
    pub(crate) message: String,
    pub(crate) level: NotificationLevel,
    pub(crate) raised_at: Instant,
}

impl Notification {
    pub(crate) fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            raised_at: Instant::now(),
        }
    }

    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success)
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    pub(crate) fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) >= timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let notification = Notification::info("Shuffle enabled");
        let timeout = Duration::from_millis(3000);

        assert!(!notification.is_expired(notification.raised_at, timeout));
        assert!(!notification.is_expired(notification.raised_at + Duration::from_millis(2999), timeout));
        assert!(notification.is_expired(notification.raised_at + timeout, timeout));
    }

    #[test]
    fn test_levels() {
        assert_eq!(Notification::success("ok").level, NotificationLevel::Success);
        assert_eq!(Notification::error("bad").level, NotificationLevel::Error);
        assert_eq!(Notification::info("hi").message, "hi");
    }
}
