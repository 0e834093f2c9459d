//! Auth feature reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use qaboard_core::api::ApiResult;
use qaboard_core::session::{BearerToken, Session};

use super::AuthState;
use crate::common::edit_text;
use crate::features::toast::Toasts;

/// What a key press in the auth form asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthAction {
    None,
    Login { email: String, password: String },
    Signup { email: String, password: String },
    Leave,
}

pub fn handle_auth_key(auth: &mut AuthState, key: &KeyEvent) -> AuthAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => AuthAction::Leave,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            auth.field = auth.field.toggle();
            AuthAction::None
        }
        KeyCode::Enter => AuthAction::Login {
            email: auth.email.clone(),
            password: auth.password.clone(),
        },
        KeyCode::Char('s') if ctrl => AuthAction::Signup {
            email: auth.email.clone(),
            password: auth.password.clone(),
        },
        _ => {
            edit_text(auth.focused_buffer(), key);
            AuthAction::None
        }
    }
}

/// Applies the `/login` outcome. A failure leaves the session and the form
/// untouched; a success forgets the typed password.
pub fn handle_login_result(
    auth: &mut AuthState,
    toasts: &mut Toasts,
    result: ApiResult<BearerToken>,
) {
    match result {
        Ok(token) => {
            auth.session = Session::logged_in(token);
            auth.password.clear();
            toasts.success("Logged in");
        }
        Err(_) => toasts.error("Login failed"),
    }
}

/// Applies the `/signup` outcome. Signing up does not log in.
pub fn handle_signup_result(toasts: &mut Toasts, result: ApiResult<()>) {
    match result {
        Ok(()) => toasts.success("Signup successful"),
        Err(_) => toasts.error("Signup failed"),
    }
}
