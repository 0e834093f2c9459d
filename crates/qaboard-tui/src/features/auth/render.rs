//! Header with the auth controls.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::AuthField;
use crate::view::HeaderView;

const APP_TITLE: &str = " Q&A Board ";

pub fn render_header(header: &HeaderView<'_>, frame: &mut Frame, area: Rect) {
    let (line, border) = match header {
        HeaderView::LoggedIn => (
            Line::from(vec![
                Span::styled(
                    "● Logged in",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("   o ", Style::default().fg(Color::Cyan)),
                Span::styled("logout", Style::default().fg(Color::DarkGray)),
            ]),
            Color::Green,
        ),
        HeaderView::LoggedOut {
            email,
            password,
            active,
        } => {
            let mut spans = field_spans("Email", email, *active == Some(AuthField::Email));
            spans.push(Span::raw("  "));
            spans.extend(field_spans(
                "Password",
                password,
                *active == Some(AuthField::Password),
            ));
            let hint = if active.is_some() {
                "   enter login · ctrl+s signup"
            } else {
                "   l login / signup"
            };
            spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
            let border = if active.is_some() {
                Color::Cyan
            } else {
                Color::DarkGray
            };
            (Line::from(spans), border)
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(APP_TITLE)
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn field_spans(label: &str, value: &str, active: bool) -> Vec<Span<'static>> {
    let label_style = if active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![
        Span::styled(format!("{label}: "), label_style),
        Span::raw(value.to_string()),
    ];
    if active {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    } else if value.is_empty() {
        spans.push(Span::styled("—", Style::default().fg(Color::DarkGray)));
    }
    spans
}
