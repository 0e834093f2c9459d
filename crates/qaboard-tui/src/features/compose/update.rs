//! Compose feature reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use qaboard_core::api::ApiResult;

use super::{ComposeField, ComposeState};
use crate::common::edit_text;
use crate::features::toast::Toasts;

#[derive(Debug, PartialEq, Eq)]
pub enum ComposeAction {
    None,
    Submit { title: String, content: String },
    Leave,
}

pub fn handle_compose_key(compose: &mut ComposeState, key: &KeyEvent) -> ComposeAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let submit = || ComposeAction::Submit {
        title: compose.title.clone(),
        content: compose.content.clone(),
    };
    match key.code {
        KeyCode::Esc => ComposeAction::Leave,
        KeyCode::Char('s') if ctrl => submit(),
        KeyCode::Enter if compose.field == ComposeField::Content => submit(),
        KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            compose.field = match compose.field {
                ComposeField::Title => ComposeField::Content,
                ComposeField::Content => ComposeField::Title,
            };
            ComposeAction::None
        }
        _ => {
            edit_text(compose.focused_buffer(), key);
            ComposeAction::None
        }
    }
}

/// Applies the `POST /questions` outcome.
///
/// Returns true when the list should be refreshed. The form is only cleared
/// on success so a failed question can be resubmitted.
pub fn handle_question_posted(
    compose: &mut ComposeState,
    toasts: &mut Toasts,
    result: ApiResult<()>,
) -> bool {
    match result {
        Ok(()) => {
            compose.clear();
            toasts.success("Question posted");
            true
        }
        Err(_) => {
            toasts.error("Failed to post question");
            false
        }
    }
}
