//! View model for the board.
//!
//! `board_view` decides what is on screen (which regions exist, which row is
//! highlighted, which inputs are active). The render functions only decide
//! how it looks.

use crate::common::mask;
use crate::features::auth::AuthField;
use crate::features::compose::ComposeField;
use crate::state::{AppState, Focus};

#[derive(Debug, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub header: HeaderView<'a>,
    /// Only present while logged in.
    pub compose: Option<ComposeView<'a>>,
    pub cards: Vec<CardView<'a>>,
    /// True before the first list arrives.
    pub loading: bool,
    /// A list refresh is in flight.
    pub refreshing: bool,
    pub hints: &'static [(&'static str, &'static str)],
}

#[derive(Debug, PartialEq, Eq)]
pub enum HeaderView<'a> {
    LoggedOut {
        email: &'a str,
        /// Already masked.
        password: String,
        active: Option<AuthField>,
    },
    LoggedIn,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ComposeView<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub active: Option<ComposeField>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CardView<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub selected: bool,
    /// Only present while logged in.
    pub composer: Option<ComposerView<'a>>,
    /// Only present when the question carries an answers collection.
    pub answers: Option<Vec<AnswerView<'a>>>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ComposerView<'a> {
    pub draft: &'a str,
    pub active: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AnswerView<'a> {
    pub content: &'a str,
    pub selected: bool,
}

const LIST_HINTS_GUEST: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("+", "upvote"),
    ("l", "login"),
    ("r", "refresh"),
    ("q", "quit"),
];
const LIST_HINTS_MEMBER: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("+", "upvote"),
    ("enter", "answer"),
    ("a", "ask"),
    ("o", "logout"),
    ("r", "refresh"),
    ("q", "quit"),
];
const AUTH_HINTS: &[(&str, &str)] = &[
    ("tab", "field"),
    ("enter", "login"),
    ("ctrl+s", "signup"),
    ("esc", "back"),
];
const COMPOSE_HINTS: &[(&str, &str)] = &[
    ("tab", "field"),
    ("ctrl+s", "post"),
    ("esc", "back"),
];
const ANSWER_HINTS: &[(&str, &str)] = &[("enter", "post answer"), ("esc", "back")];

pub fn board_view(app: &AppState) -> BoardView<'_> {
    let logged_in = app.auth.is_logged_in();

    let header = if logged_in {
        HeaderView::LoggedIn
    } else {
        HeaderView::LoggedOut {
            email: &app.auth.email,
            password: mask(&app.auth.password),
            active: (app.focus == Focus::Auth).then_some(app.auth.field),
        }
    };

    let compose = logged_in.then(|| ComposeView {
        title: &app.compose.title,
        content: &app.compose.content,
        active: (app.focus == Focus::Compose).then_some(app.compose.field),
    });

    let selection = app.board.selection;
    let cards = app
        .board
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let here = selection.filter(|s| s.question == index);
            CardView {
                title: &question.title,
                content: &question.content,
                selected: here.is_some_and(|s| s.answer.is_none()),
                composer: logged_in.then(|| ComposerView {
                    draft: app.board.draft(&question.id),
                    active: app.focus == Focus::Answer(question.id.clone()),
                }),
                answers: question.answers.as_ref().map(|answers| {
                    answers
                        .iter()
                        .enumerate()
                        .map(|(answer, a)| AnswerView {
                            content: &a.content,
                            selected: here.is_some_and(|s| s.answer == Some(answer)),
                        })
                        .collect()
                }),
            }
        })
        .collect();

    let hints = match app.focus {
        Focus::List if logged_in => LIST_HINTS_MEMBER,
        Focus::List => LIST_HINTS_GUEST,
        Focus::Auth => AUTH_HINTS,
        Focus::Compose => COMPOSE_HINTS,
        Focus::Answer(_) => ANSWER_HINTS,
    };

    BoardView {
        header,
        compose,
        cards,
        loading: !app.board.loaded,
        refreshing: app.board.refresh.is_running(),
        hints,
    }
}

#[cfg(test)]
mod tests {
    use qaboard_core::api::{Answer, AnswerId, EntityId, Question, QuestionId};
    use qaboard_core::config::Config;
    use qaboard_core::session::{BearerToken, Session};

    use super::*;

    fn question(n: i64, answers: Option<Vec<&str>>) -> Question {
        Question {
            id: QuestionId(EntityId::Number(n)),
            title: format!("title {n}"),
            content: format!("content {n}"),
            answers: answers.map(|texts| {
                texts
                    .into_iter()
                    .enumerate()
                    .map(|(i, text)| Answer {
                        id: AnswerId(EntityId::Number(100 + i as i64)),
                        content: text.to_string(),
                    })
                    .collect()
            }),
        }
    }

    fn member() -> Session {
        Session::logged_in(BearerToken::new("tok"))
    }

    #[test]
    fn test_one_card_per_question_in_order() {
        let mut app = AppState::new(&Config::default(), Session::Guest);
        app.board.replace_questions(vec![
            question(3, None),
            question(1, None),
            question(2, None),
        ]);

        let view = board_view(&app);
        let titles: Vec<&str> = view.cards.iter().map(|card| card.title).collect();
        assert_eq!(titles, vec!["title 3", "title 1", "title 2"]);
        assert!(!view.loading);
    }

    #[test]
    fn test_guest_sees_no_compose_or_composer() {
        let mut app = AppState::new(&Config::default(), Session::Guest);
        app.auth.password = "abc".into();
        app.board.replace_questions(vec![question(1, Some(vec!["yes"]))]);

        let view = board_view(&app);
        assert!(view.compose.is_none());
        assert!(view.cards[0].composer.is_none());
        assert_eq!(
            view.header,
            HeaderView::LoggedOut {
                email: "",
                password: "•••".into(),
                active: None
            }
        );
    }

    #[test]
    fn test_member_sees_compose_and_composers() {
        let mut app = AppState::new(&Config::default(), member());
        app.board
            .replace_questions(vec![question(1, None), question(2, None)]);
        let second = QuestionId(EntityId::Number(2));
        app.board.draft_mut(&second).push_str("draft two");
        app.focus = Focus::Answer(second);

        let view = board_view(&app);
        assert_eq!(view.header, HeaderView::LoggedIn);
        assert!(view.compose.is_some());
        assert_eq!(
            view.cards[0].composer,
            Some(ComposerView {
                draft: "",
                active: false
            })
        );
        assert_eq!(
            view.cards[1].composer,
            Some(ComposerView {
                draft: "draft two",
                active: true
            })
        );
    }

    #[test]
    fn test_answers_shown_only_when_present() {
        let mut app = AppState::new(&Config::default(), Session::Guest);
        app.board.replace_questions(vec![
            question(1, None),
            question(2, Some(vec![])),
            question(3, Some(vec!["a", "b"])),
        ]);
        app.board.select_next();
        app.board.select_next();
        app.board.select_next();

        let view = board_view(&app);
        assert_eq!(view.cards[0].answers, None);
        assert_eq!(view.cards[1].answers, Some(vec![]));
        let answers = view.cards[2].answers.as_ref().unwrap();
        assert_eq!(answers.len(), 2);
        assert!(answers[0].selected);
        assert!(!view.cards[2].selected);
    }

    #[test]
    fn test_loading_until_first_list() {
        let app = AppState::new(&Config::default(), Session::Guest);
        let view = board_view(&app);
        assert!(view.loading);
        assert!(!view.refreshing);
        assert!(view.cards.is_empty());
    }
}
