//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! Each request effect carries everything the request needs, including a
//! snapshot of the session at the time the user acted.

use qaboard_core::api::{EntityId, QuestionId, VoteKind};
use qaboard_core::session::Session;

use crate::common::TaskId;

#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Re-fetch the full question list.
    FetchQuestions { task: TaskId },

    Login { email: String, password: String },

    Signup { email: String, password: String },

    PostQuestion {
        title: String,
        content: String,
        session: Session,
    },

    PostAnswer {
        question_id: QuestionId,
        content: String,
        session: Session,
    },

    Vote {
        kind: VoteKind,
        id: EntityId,
        session: Session,
    },
}
