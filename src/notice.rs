//! Transient status banners.
//!
//! A notice is displayed for a fixed duration and then retracted on the next
//! tick of the event loop; nothing animates and nothing is queued. Raising a
//! new notice replaces the current one.

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// How long a banner stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Banner styling category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Danger,
}

impl NoticeKind {
    /// Banner background color.
    pub fn color(self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Danger => Color::Red,
        }
    }
}

/// A message with a raise time; expired notices are dropped by the UI.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    raised_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
            raised_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Danger)
    }

    /// True once the notice has outlived [`NOTICE_TTL`].
    pub fn is_expired(&self) -> bool {
        self.expired_at(Instant::now())
    }

    fn expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= NOTICE_TTL
    }
}
