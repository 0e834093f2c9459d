//! Feature slices for the board (state/update/render per slice).

pub mod auth;
pub mod board;
pub mod compose;
pub mod toast;
