//! Auth feature slice: login/signup form and the in-memory session.

mod render;
mod state;
mod update;

pub use render::render_header;
pub use state::{AuthField, AuthState};
pub use update::{AuthAction, handle_auth_key, handle_login_result, handle_signup_result};
