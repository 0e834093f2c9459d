//! Compose feature slice: the "Ask a Question" form.

mod render;
mod state;
mod update;

pub use render::{COMPOSE_HEIGHT, render_compose};
pub use state::{ComposeField, ComposeState};
pub use update::{ComposeAction, handle_compose_key, handle_question_posted};
