//! Board reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::auth::{self, AuthAction};
use crate::features::board::{self, AnswerAction};
use crate::features::compose::{self, ComposeAction};
use crate::state::{AppState, Focus};

/// Effects to run once at startup: the first list fetch.
pub fn init(app: &mut AppState) -> Vec<UiEffect> {
    vec![refresh(app)]
}

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.toasts.expire(Instant::now());
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::QuestionsLoaded { task, result } => {
            board::handle_questions_loaded(&mut app.board, &mut app.toasts, task, result);
            if let Focus::Answer(id) = &app.focus
                && !app.board.contains(id)
            {
                app.focus = Focus::List;
            }
            vec![]
        }
        UiEvent::LoginFinished { result } => {
            auth::handle_login_result(&mut app.auth, &mut app.toasts, result);
            if app.auth.is_logged_in() && app.focus == Focus::Auth {
                app.focus = Focus::List;
            }
            vec![]
        }
        UiEvent::SignupFinished { result } => {
            auth::handle_signup_result(&mut app.toasts, result);
            vec![]
        }
        UiEvent::QuestionPosted { result } => {
            if !compose::handle_question_posted(&mut app.compose, &mut app.toasts, result) {
                return vec![];
            }
            if app.focus == Focus::Compose {
                app.focus = Focus::List;
            }
            vec![refresh(app)]
        }
        UiEvent::AnswerPosted {
            question_id,
            result,
        } => {
            if !board::handle_answer_posted(&mut app.board, &mut app.toasts, &question_id, result)
            {
                return vec![];
            }
            if app.focus == Focus::Answer(question_id) {
                app.focus = Focus::List;
            }
            vec![refresh(app)]
        }
        UiEvent::VoteFinished { result } => {
            if board::handle_vote_finished(&mut app.toasts, result) {
                vec![refresh(app)]
            } else {
                vec![]
            }
        }
    }
}

/// Issues a full list refresh. Any refresh still in flight becomes stale.
fn refresh(app: &mut AppState) -> UiEffect {
    let task = app.task_seq.next_id();
    app.board.refresh.start(task);
    UiEffect::FetchQuestions { task }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, &key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            vec![]
        }
        _ => vec![],
    }
}

/// Pastes into whichever text field has focus. Fields are single-line.
fn handle_paste(app: &mut AppState, text: &str) {
    let text: String = text.chars().filter(|c| !c.is_control()).collect();
    let buffer = match &app.focus {
        Focus::List => return,
        Focus::Auth => app.auth.focused_buffer(),
        Focus::Compose => app.compose.focused_buffer(),
        Focus::Answer(id) => app.board.draft_mut(id),
    };
    buffer.push_str(&text);
}

fn handle_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    match app.focus.clone() {
        Focus::List => handle_list_key(app, key),
        Focus::Auth => match auth::handle_auth_key(&mut app.auth, key) {
            AuthAction::None => vec![],
            AuthAction::Leave => {
                app.focus = Focus::List;
                vec![]
            }
            AuthAction::Login { email, password } => vec![UiEffect::Login { email, password }],
            AuthAction::Signup { email, password } => vec![UiEffect::Signup { email, password }],
        },
        Focus::Compose => match compose::handle_compose_key(&mut app.compose, key) {
            ComposeAction::None => vec![],
            ComposeAction::Leave => {
                app.focus = Focus::List;
                vec![]
            }
            ComposeAction::Submit { title, content } => vec![UiEffect::PostQuestion {
                title,
                content,
                session: app.auth.session.clone(),
            }],
        },
        Focus::Answer(question_id) => {
            match board::handle_answer_key(&mut app.board, &question_id, key) {
                AnswerAction::None => vec![],
                AnswerAction::Leave => {
                    app.focus = Focus::List;
                    vec![]
                }
                AnswerAction::Submit { content } => vec![UiEffect::PostAnswer {
                    question_id,
                    content,
                    session: app.auth.session.clone(),
                }],
            }
        }
    }
}

fn handle_list_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    let logged_in = app.auth.is_logged_in();
    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Up | KeyCode::Char('k') => {
            app.board.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.board.select_next();
            vec![]
        }
        KeyCode::Char('+' | 'u') => match app.board.selected_target() {
            Some((kind, id)) => vec![UiEffect::Vote {
                kind,
                id,
                session: app.auth.session.clone(),
            }],
            None => vec![],
        },
        KeyCode::Enter if logged_in => {
            if let Some(question) = app.board.selected_question() {
                app.focus = Focus::Answer(question.id.clone());
            }
            vec![]
        }
        KeyCode::Char('a') if logged_in => {
            app.focus = Focus::Compose;
            vec![]
        }
        KeyCode::Char('l') if !logged_in => {
            app.focus = Focus::Auth;
            vec![]
        }
        KeyCode::Char('o') if logged_in => {
            app.auth.logout();
            vec![]
        }
        KeyCode::Char('r') => vec![refresh(app)],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use qaboard_core::api::{
        Answer, AnswerId, EntityId, Question, QuestionId, RequestFailed, VoteKind,
    };
    use qaboard_core::config::Config;
    use qaboard_core::session::{BearerToken, Session};

    use super::*;
    use crate::common::TaskId;
    use crate::view::board_view;

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            update(app, key(KeyCode::Char(c)));
        }
    }

    fn qid(n: i64) -> QuestionId {
        QuestionId(EntityId::Number(n))
    }

    fn question(n: i64, answers: Option<Vec<i64>>) -> Question {
        Question {
            id: qid(n),
            title: format!("q{n}"),
            content: format!("c{n}"),
            answers: answers.map(|ids| {
                ids.into_iter()
                    .map(|id| Answer {
                        id: AnswerId(EntityId::Number(id)),
                        content: format!("a{id}"),
                    })
                    .collect()
            }),
        }
    }

    fn token() -> Session {
        Session::logged_in(BearerToken::new("tok"))
    }

    /// Runs startup and answers the first fetch with `questions`.
    fn loaded(session: Session, questions: Vec<Question>) -> AppState {
        let mut app = AppState::new(&Config::default(), session);
        let effects = init(&mut app);
        let [UiEffect::FetchQuestions { task }] = effects.as_slice() else {
            panic!("expected a single fetch, got {effects:?}");
        };
        let task = *task;
        update(
            &mut app,
            UiEvent::QuestionsLoaded {
                task,
                result: Ok(questions),
            },
        );
        app
    }

    fn fetch_task(effects: &[UiEffect]) -> Option<TaskId> {
        effects.iter().find_map(|effect| match effect {
            UiEffect::FetchQuestions { task } => Some(*task),
            _ => None,
        })
    }

    #[test]
    fn test_loaded_list_renders_one_card_per_question() {
        let app = loaded(
            Session::Guest,
            vec![question(5, None), question(2, None), question(9, None)],
        );
        let view = board_view(&app);
        let titles: Vec<&str> = view.cards.iter().map(|card| card.title).collect();
        assert_eq!(titles, vec!["q5", "q2", "q9"]);
    }

    #[test]
    fn test_login_flow_stores_token() {
        let mut app = loaded(Session::Guest, vec![]);
        update(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.focus, Focus::Auth);
        type_text(&mut app, "me@x.io");
        update(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "pw");

        let effects = update(&mut app, key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::Login {
                email: "me@x.io".into(),
                password: "pw".into()
            }]
        );

        update(
            &mut app,
            UiEvent::LoginFinished {
                result: Ok(BearerToken::new("abc")),
            },
        );
        assert!(app.auth.is_logged_in());
        assert_eq!(
            app.auth.session.token().map(BearerToken::as_str),
            Some("abc")
        );
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_failed_login_keeps_guest() {
        let mut app = loaded(Session::Guest, vec![]);
        update(&mut app, key(KeyCode::Char('l')));
        update(
            &mut app,
            UiEvent::LoginFinished {
                result: Err(RequestFailed),
            },
        );
        assert_eq!(app.auth.session, Session::Guest);
        assert_eq!(app.focus, Focus::Auth);
        assert_eq!(app.toasts.titles(), vec!["Login failed"]);
    }

    #[test]
    fn test_post_question_clears_form_and_refreshes() {
        let mut app = loaded(token(), vec![]);
        update(&mut app, key(KeyCode::Char('a')));
        type_text(&mut app, "Title");
        update(&mut app, key(KeyCode::Enter));
        type_text(&mut app, "Body");

        let effects = update(&mut app, ctrl('s'));
        assert_eq!(
            effects,
            vec![UiEffect::PostQuestion {
                title: "Title".into(),
                content: "Body".into(),
                session: token(),
            }]
        );

        let effects = update(&mut app, UiEvent::QuestionPosted { result: Ok(()) });
        assert!(fetch_task(&effects).is_some());
        assert!(app.compose.title.is_empty());
        assert!(app.compose.content.is_empty());
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.toasts.titles(), vec!["Question posted"]);
    }

    #[test]
    fn test_failed_post_keeps_form_and_does_not_refresh() {
        let mut app = loaded(token(), vec![]);
        app.compose.title = "t".into();
        let effects = update(
            &mut app,
            UiEvent::QuestionPosted {
                result: Err(RequestFailed),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.compose.title, "t");
        assert_eq!(app.toasts.titles(), vec!["Failed to post question"]);
    }

    #[test]
    fn test_votes_refresh_silently() {
        let mut app = loaded(token(), vec![question(1, Some(vec![7]))]);

        let effects = update(&mut app, key(KeyCode::Char('+')));
        assert_eq!(
            effects,
            vec![UiEffect::Vote {
                kind: VoteKind::Question,
                id: EntityId::Number(1),
                session: token(),
            }]
        );

        update(&mut app, key(KeyCode::Down));
        let effects = update(&mut app, key(KeyCode::Char('u')));
        assert_eq!(
            effects,
            vec![UiEffect::Vote {
                kind: VoteKind::Answer,
                id: EntityId::Number(7),
                session: token(),
            }]
        );

        let effects = update(&mut app, UiEvent::VoteFinished { result: Ok(()) });
        assert!(fetch_task(&effects).is_some());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_guest_vote_carries_guest_session() {
        let mut app = loaded(Session::Guest, vec![question(1, None)]);
        let effects = update(&mut app, key(KeyCode::Char('+')));
        assert_eq!(
            effects,
            vec![UiEffect::Vote {
                kind: VoteKind::Question,
                id: EntityId::Number(1),
                session: Session::Guest,
            }]
        );
    }

    #[test]
    fn test_stale_refresh_result_is_ignored() {
        let mut app = loaded(Session::Guest, vec![question(1, None)]);
        let first = fetch_task(&update(&mut app, key(KeyCode::Char('r')))).unwrap();
        let second = fetch_task(&update(&mut app, key(KeyCode::Char('r')))).unwrap();

        update(
            &mut app,
            UiEvent::QuestionsLoaded {
                task: second,
                result: Ok(vec![question(2, None)]),
            },
        );
        update(
            &mut app,
            UiEvent::QuestionsLoaded {
                task: first,
                result: Ok(vec![question(3, None)]),
            },
        );

        assert_eq!(app.board.questions, vec![question(2, None)]);
    }

    #[test]
    fn test_drafts_are_keyed_per_question() {
        let mut app = loaded(token(), vec![question(1, None), question(2, None)]);

        update(&mut app, key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Answer(qid(1)));
        type_text(&mut app, "first");
        update(&mut app, key(KeyCode::Esc));

        update(&mut app, key(KeyCode::Down));
        update(&mut app, key(KeyCode::Enter));
        type_text(&mut app, "second");

        let effects = update(&mut app, key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::PostAnswer {
                question_id: qid(2),
                content: "second".into(),
                session: token(),
            }]
        );
        assert_eq!(app.board.draft(&qid(1)), "first");

        let effects = update(
            &mut app,
            UiEvent::AnswerPosted {
                question_id: qid(2),
                result: Ok(()),
            },
        );
        let task = fetch_task(&effects).unwrap();
        assert_eq!(app.board.draft(&qid(2)), "");
        assert_eq!(app.focus, Focus::List);

        update(
            &mut app,
            UiEvent::QuestionsLoaded {
                task,
                result: Ok(vec![question(1, None), question(2, Some(vec![3]))]),
            },
        );
        assert_eq!(app.board.draft(&qid(1)), "first");
    }

    #[test]
    fn test_guest_cannot_open_member_forms() {
        let mut app = loaded(Session::Guest, vec![question(1, None)]);
        update(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.focus, Focus::List);
        update(&mut app, key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_logout_drops_token() {
        let mut app = loaded(token(), vec![]);
        update(&mut app, key(KeyCode::Char('o')));
        assert_eq!(app.auth.session, Session::Guest);
        assert!(board_view(&app).compose.is_none());
    }

    #[test]
    fn test_answer_focus_dropped_when_question_vanishes() {
        let mut app = loaded(token(), vec![question(1, None)]);
        update(&mut app, key(KeyCode::Enter));
        let effects = update(&mut app, UiEvent::VoteFinished { result: Ok(()) });
        let task = fetch_task(&effects).unwrap();
        update(
            &mut app,
            UiEvent::QuestionsLoaded {
                task,
                result: Ok(vec![]),
            },
        );
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_paste_goes_to_focused_field() {
        let mut app = loaded(token(), vec![]);
        update(&mut app, key(KeyCode::Char('a')));
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("multi\nline".into())),
        );
        assert_eq!(app.compose.title, "multiline");
    }

    #[test]
    fn test_ctrl_c_quits_from_any_focus() {
        let mut app = loaded(Session::Guest, vec![]);
        update(&mut app, key(KeyCode::Char('l')));
        assert_eq!(update(&mut app, ctrl('c')), vec![UiEffect::Quit]);
        assert_eq!(app.focus, Focus::Auth);

        update(&mut app, key(KeyCode::Esc));
        assert_eq!(update(&mut app, key(KeyCode::Char('q'))), vec![UiEffect::Quit]);
    }
}
