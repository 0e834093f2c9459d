use anyhow::{Context, Result};
use qaboard_core::api::ApiClient;
use qaboard_core::session::Session;

pub async fn run(client: &ApiClient, title: &str, content: &str, session: &Session) -> Result<()> {
    client
        .post_question(title, content, session)
        .await
        .context("Failed to post question")?;
    println!("Question posted");
    Ok(())
}
