//! Application state.
//!
//! ```text
//! AppState
//! ├── focus: Focus            (which region receives keys)
//! ├── auth: AuthState         (session + login/signup form)
//! ├── compose: ComposeState   (new question form)
//! ├── board: BoardState       (question list, drafts, selection)
//! ├── toasts: Toasts
//! └── task_seq: TaskSeq       (ids for list refreshes)
//! ```

use qaboard_core::api::QuestionId;
use qaboard_core::config::Config;
use qaboard_core::session::Session;

use crate::common::TaskSeq;
use crate::features::auth::AuthState;
use crate::features::board::BoardState;
use crate::features::compose::ComposeState;
use crate::features::toast::Toasts;

/// Where key presses go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Auth,
    Compose,
    /// Editing the answer draft of one question.
    Answer(QuestionId),
}

#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub focus: Focus,
    pub auth: AuthState,
    pub compose: ComposeState,
    pub board: BoardState,
    pub toasts: Toasts,
    pub task_seq: TaskSeq,
}

impl AppState {
    pub fn new(config: &Config, session: Session) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            auth: AuthState {
                session,
                ..AuthState::default()
            },
            compose: ComposeState::default(),
            board: BoardState::default(),
            toasts: Toasts::new(config.toast_duration()),
            task_seq: TaskSeq::default(),
        }
    }
}
