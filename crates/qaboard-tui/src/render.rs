//! Pure render functions.
//!
//! `render` reads `AppState` through the view model and draws to the frame.
//! It never mutates state or returns effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::auth::render_header;
use crate::features::board::render_board;
use crate::features::compose::{COMPOSE_HEIGHT, render_compose};
use crate::features::toast::render_toasts;
use crate::state::AppState;
use crate::view::{BoardView, board_view};

const HEADER_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

pub fn render(app: &AppState, frame: &mut Frame) {
    let view = board_view(app);
    let area = frame.area();

    let compose_height = if view.compose.is_some() {
        COMPOSE_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(compose_height),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_header(&view.header, frame, chunks[0]);
    if let Some(compose) = &view.compose {
        render_compose(compose, frame, chunks[1]);
    }
    render_board(&view, frame, chunks[2]);
    render_status_line(&view, frame, chunks[3]);

    // Toasts float over everything above the status line.
    let overlay = Rect {
        height: area.height.saturating_sub(STATUS_HEIGHT),
        ..area
    };
    render_toasts(&app.toasts, frame, overlay);
}

fn render_status_line(view: &BoardView<'_>, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(view.hints.len() * 2);
    for (key, action) in view.hints {
        spans.push(Span::styled(format!(" {key} "), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!("{action} "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use qaboard_core::api::{Answer, AnswerId, EntityId, Question, QuestionId};
    use qaboard_core::config::Config;
    use qaboard_core::session::{BearerToken, Session};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::state::Focus;

    fn screen_text(app: &AppState) -> String {
        screen_text_sized(app, 60, 20)
    }

    fn screen_text_sized(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_guest_board() {
        let mut app = AppState::new(&Config::default(), Session::Guest);
        app.board.replace_questions(vec![Question {
            id: QuestionId(EntityId::Number(1)),
            title: "How do lifetimes work?".into(),
            content: "Asking for a friend".into(),
            answers: None,
        }]);
        app.toasts.error("Login failed");

        let text = screen_text(&app);
        assert!(text.contains("Questions (1)"));
        assert!(text.contains("How do lifetimes work?"));
        assert!(text.contains("Asking for a friend"));
        assert!(text.contains("Login failed"));
        assert!(!text.contains("Ask a Question"));
    }

    #[test]
    fn test_render_loading_state() {
        let app = AppState::new(&Config::default(), Session::Guest);
        assert!(screen_text(&app).contains("Loading questions"));
    }

    #[test]
    fn test_render_wraps_long_content_and_answers() {
        let mut app = AppState::new(&Config::default(), Session::Guest);
        app.board.replace_questions(vec![Question {
            id: QuestionId(EntityId::Number(1)),
            title: "Long one".into(),
            content: format!("{} TAILMARK", "word ".repeat(30)),
            answers: Some(vec![Answer {
                id: AnswerId(EntityId::Number(10)),
                content: format!("{} ANSWEREND", "reply ".repeat(20)),
            }]),
        }]);

        let text = screen_text_sized(&app, 60, 24);
        assert!(text.contains("TAILMARK"), "{text}");
        assert!(text.contains("ANSWEREND"), "{text}");
        assert!(!text.contains('…'), "{text}");
    }

    #[test]
    fn test_render_active_draft_shows_end_of_input() {
        let mut app = AppState::new(&Config::default(), Session::logged_in(BearerToken::new("t")));
        let id = QuestionId(EntityId::Number(1));
        app.board.replace_questions(vec![Question {
            id: id.clone(),
            title: "Q".into(),
            content: "body".into(),
            answers: None,
        }]);
        *app.board.draft_mut(&id) = format!("{}ENDTYPED", "x".repeat(80));
        app.focus = Focus::Answer(id);

        let text = screen_text_sized(&app, 60, 24);
        assert!(text.contains("ENDTYPED█"), "{text}");
    }
}
