//! Board feature slice: the question list, its selection and the per-question
//! answer drafts.

mod render;
mod state;
mod update;

pub use render::render_board;
pub use state::{BoardState, Selection};
pub use update::{
    AnswerAction, handle_answer_key, handle_answer_posted, handle_questions_loaded,
    handle_vote_finished,
};
