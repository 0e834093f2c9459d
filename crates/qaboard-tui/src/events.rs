//! UI event types.
//!
//! Everything the reducer reacts to: terminal input, the frame tick, and the
//! results of requests spawned by the runtime.

use crossterm::event::Event;
use qaboard_core::api::{ApiResult, Question, QuestionId};
use qaboard_core::session::BearerToken;

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEvent {
    Tick,
    Terminal(Event),

    QuestionsLoaded {
        task: TaskId,
        result: ApiResult<Vec<Question>>,
    },
    LoginFinished {
        result: ApiResult<BearerToken>,
    },
    SignupFinished {
        result: ApiResult<()>,
    },
    QuestionPosted {
        result: ApiResult<()>,
    },
    AnswerPosted {
        question_id: QuestionId,
        result: ApiResult<()>,
    },
    VoteFinished {
        result: ApiResult<()>,
    },
}
