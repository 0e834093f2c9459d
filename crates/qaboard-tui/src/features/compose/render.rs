//! "Ask a Question" form.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::ComposeField;
use crate::common::{tail_to_width, truncate_with_ellipsis};
use crate::view::ComposeView;

/// Borders plus one row per field.
pub const COMPOSE_HEIGHT: u16 = 4;

pub fn render_compose(compose: &ComposeView<'_>, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        field_line(
            "Title",
            compose.title,
            compose.active == Some(ComposeField::Title),
            width,
        ),
        field_line(
            "Content",
            compose.content,
            compose.active == Some(ComposeField::Content),
            width,
        ),
    ];

    let border = if compose.active.is_some() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Ask a Question (a) ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(label: &str, value: &str, active: bool, width: usize) -> Line<'static> {
    let prefix = format!("{label:>8}: ");
    let room = width.saturating_sub(prefix.len() + 1);
    let label_style = if active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value = if active {
        tail_to_width(value, room)
    } else {
        truncate_with_ellipsis(value, room)
    };
    let mut spans = vec![Span::styled(prefix, label_style), Span::raw(value)];
    if active {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}
