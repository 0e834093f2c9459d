//! Board feature reducer.

use crossterm::event::{KeyCode, KeyEvent};
use qaboard_core::api::{ApiResult, Question, QuestionId};
use tracing::debug;

use super::BoardState;
use crate::common::{TaskId, edit_text};
use crate::features::toast::Toasts;

/// Applies a `GET /questions` result.
///
/// Results from any refresh other than the most recently issued one are
/// dropped. A failed refresh keeps the current list.
pub fn handle_questions_loaded(
    board: &mut BoardState,
    toasts: &mut Toasts,
    task: TaskId,
    result: ApiResult<Vec<Question>>,
) {
    if !board.refresh.finish_if_active(task) {
        debug!(?task, "discarding stale question list");
        return;
    }
    match result {
        Ok(questions) => board.replace_questions(questions),
        Err(_) => toasts.error("Failed to load questions"),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AnswerAction {
    None,
    Submit { content: String },
    Leave,
}

/// Routes a key to the draft of `question_id`.
pub fn handle_answer_key(
    board: &mut BoardState,
    question_id: &QuestionId,
    key: &KeyEvent,
) -> AnswerAction {
    match key.code {
        KeyCode::Esc => AnswerAction::Leave,
        KeyCode::Enter => AnswerAction::Submit {
            content: board.draft(question_id).to_string(),
        },
        _ => {
            edit_text(board.draft_mut(question_id), key);
            AnswerAction::None
        }
    }
}

/// Applies a `POST /questions/{id}/answers` outcome. Returns true when the
/// list should be refreshed.
pub fn handle_answer_posted(
    board: &mut BoardState,
    toasts: &mut Toasts,
    question_id: &QuestionId,
    result: ApiResult<()>,
) -> bool {
    match result {
        Ok(()) => {
            board.clear_draft(question_id);
            toasts.success("Answer posted");
            true
        }
        Err(_) => {
            toasts.error("Failed to post answer");
            false
        }
    }
}

/// Applies a `POST /votes` outcome. Success is silent.
pub fn handle_vote_finished(toasts: &mut Toasts, result: ApiResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(_) => {
            toasts.error("Vote failed");
            false
        }
    }
}
