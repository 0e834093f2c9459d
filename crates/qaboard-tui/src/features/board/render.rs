//! Question list rendering.
//!
//! Titles, bodies and answers are word-wrapped to the list width. The
//! highlighted item is tracked as a span of wrapped rows so the scroll offset
//! keeps as much of it on screen as fits.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::{tail_to_width, truncate_with_ellipsis, wrap_text};
use crate::view::{BoardView, CardView};

const INDENT: &str = "  ";
const ANSWER_INDENT: &str = "    ";
const BULLET: &str = "• ";

pub fn render_board(view: &BoardView<'_>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(
            " Questions ({}){} ",
            view.cards.len(),
            if view.refreshing { " ↻" } else { "" }
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.cards.is_empty() {
        let text = if view.loading {
            "Loading questions…"
        } else {
            "No questions yet"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(text, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let width = inner.width as usize;
    let mut lines = Vec::new();
    let mut focus = None;
    for card in &view.cards {
        card_lines(card, width, &mut lines, &mut focus);
    }

    let height = inner.height as usize;
    let offset = scroll_offset(focus.unwrap_or(0..1), lines.len(), height);
    let visible: Vec<Line<'static>> = lines.into_iter().skip(offset).take(height).collect();
    frame.render_widget(Paragraph::new(visible), inner);
}

/// First visible row such that the rows in `focus` are on screen.
///
/// When `focus` is taller than the viewport its first row wins.
fn scroll_offset(focus: Range<usize>, total: usize, height: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let max_offset = total - height;
    focus.end.saturating_sub(height).min(focus.start).min(max_offset)
}

/// Pushes `text` wrapped to `width`, with `first` before the first row and
/// `rest` before each continuation row. Returns the rows pushed.
fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: usize,
    (first, rest): (Span<'static>, Span<'static>),
    style: Style,
) -> Range<usize> {
    let start = lines.len();
    let room = width.saturating_sub(first.content.width());
    for (i, row) in wrap_text(text, room).into_iter().enumerate() {
        let prefix = if i == 0 { first.clone() } else { rest.clone() };
        lines.push(Line::from(vec![prefix, Span::styled(row, style)]));
    }
    start..lines.len()
}

fn card_lines(
    card: &CardView<'_>,
    width: usize,
    lines: &mut Vec<Line<'static>>,
    focus: &mut Option<Range<usize>>,
) {
    let highlight = Style::default().fg(Color::Black).bg(Color::Cyan);

    let marker = if card.selected { "▶ " } else { INDENT };
    let title_style = if card.selected {
        highlight.add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let title = push_wrapped(
        lines,
        card.title,
        width,
        (
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::raw(INDENT),
        ),
        title_style,
    );
    if card.selected {
        *focus = Some(title);
    }
    push_wrapped(
        lines,
        card.content,
        width,
        (Span::raw(INDENT), Span::raw(INDENT)),
        Style::default(),
    );
    lines.push(Line::styled(
        format!("{INDENT}▲ upvote (+)"),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(composer) = &card.composer {
        if composer.active {
            *focus = Some(lines.len()..lines.len() + 1);
        }
        let label = format!("{INDENT}✎ Your answer: ");
        let room = width.saturating_sub(label.width() + 1);
        let draft = if composer.active {
            tail_to_width(composer.draft, room)
        } else {
            truncate_with_ellipsis(composer.draft, room)
        };
        let mut spans = vec![
            Span::styled(
                label,
                if composer.active {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ),
            Span::raw(draft),
        ];
        if composer.active {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(spans));
    }

    if let Some(answers) = &card.answers {
        if answers.is_empty() {
            lines.push(Line::styled(
                format!("{ANSWER_INDENT}No answers yet"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        for answer in answers {
            let style = if answer.selected {
                highlight
            } else {
                Style::default()
            };
            let rows = push_wrapped(
                lines,
                answer.content,
                width,
                (
                    Span::styled(format!("{ANSWER_INDENT}{BULLET}"), style),
                    Span::raw(format!("{ANSWER_INDENT}  ")),
                ),
                style,
            );
            if answer.selected {
                *focus = Some(rows);
            }
        }
    }

    lines.push(Line::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_focus_visible() {
        assert_eq!(scroll_offset(3..4, 10, 20), 0);
        assert_eq!(scroll_offset(3..4, 30, 10), 0);
        assert_eq!(scroll_offset(15..16, 30, 10), 6);
        assert_eq!(scroll_offset(29..30, 30, 10), 20);
        assert_eq!(scroll_offset(5..6, 30, 0), 0);
    }

    #[test]
    fn test_scroll_offset_shows_every_wrapped_row() {
        assert_eq!(scroll_offset(12..16, 30, 10), 6);
        // Taller than the viewport: start at its first row.
        assert_eq!(scroll_offset(12..25, 30, 10), 12);
    }

    #[test]
    fn test_push_wrapped_indents_continuation_rows() {
        let mut lines = Vec::new();
        let rows = push_wrapped(
            &mut lines,
            "alpha beta gamma",
            12,
            (Span::raw("- "), Span::raw("  ")),
            Style::default(),
        );
        assert_eq!(rows, 0..2);
        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert_eq!(text, vec!["- alpha beta", "  gamma"]);
    }
}
