//! Full-screen terminal board for the Q&A backend.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;
pub mod view;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use qaboard_core::config::Config;
use qaboard_core::session::Session;
pub use runtime::BoardRuntime;

/// Runs the interactive board until the user quits.
pub async fn run_board(config: &Config, session: Session) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The board requires a terminal.\n\
             Use `qaboard questions` for non-interactive output."
        );
    }

    let mut runtime = BoardRuntime::new(config, session)?;
    runtime.run()
}
