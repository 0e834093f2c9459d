//! Helpers shared by the feature slices.

pub mod task;
pub mod text;

pub use task::{LatestTask, TaskId, TaskSeq};
pub use text::{edit_text, mask, tail_to_width, truncate_with_ellipsis, wrap_text};
