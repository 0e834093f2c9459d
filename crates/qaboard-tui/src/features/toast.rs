//! Transient notifications.
//!
//! Every request outcome the user should see ends up here. Toasts never
//! block input and disappear on their own.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_with_ellipsis;

const TOAST_WIDTH: u16 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            ttl,
        }
    }

    pub fn success(&mut self, title: impl Into<String>) {
        self.push(title.into(), ToastLevel::Success);
    }

    pub fn error(&mut self, title: impl Into<String>) {
        self.push(title.into(), ToastLevel::Error);
    }

    fn push(&mut self, title: String, level: ToastLevel) {
        self.items.push(Toast {
            title,
            level,
            expires_at: Instant::now() + self.ttl,
        });
    }

    /// Drops toasts whose time is up.
    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|toast| toast.expires_at > now);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|toast| toast.title.as_str()).collect()
    }
}

/// Stacks toasts in the bottom-right corner of `area`, newest at the bottom.
pub fn render_toasts(toasts: &Toasts, frame: &mut Frame, area: Rect) {
    let width = TOAST_WIDTH.min(area.width);
    let max_visible = (area.height / 3) as usize;
    let visible: Vec<&Toast> = toasts.iter().collect();
    let skip = visible.len().saturating_sub(max_visible);

    let mut y = area.y + area.height;
    for toast in visible.into_iter().skip(skip).rev() {
        y = y.saturating_sub(3);
        let rect = Rect::new(area.x + area.width - width, y, width, 3);
        let color = match toast.level {
            ToastLevel::Success => Color::Green,
            ToastLevel::Error => Color::Red,
        };
        let text = truncate_with_ellipsis(&toast.title, width.saturating_sub(4) as usize);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );
    }
}
