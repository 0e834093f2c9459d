use anyhow::Result;
use qaboard_core::config::Config;
use qaboard_core::session::Session;

pub async fn run(config: &Config, session: Session) -> Result<()> {
    qaboard_tui::run_board(config, session).await
}
