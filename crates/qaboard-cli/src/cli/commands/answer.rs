use anyhow::{Context, Result};
use qaboard_core::api::{ApiClient, EntityId, QuestionId};
use qaboard_core::session::Session;

pub async fn run(
    client: &ApiClient,
    question_id: &str,
    content: &str,
    session: &Session,
) -> Result<()> {
    let question_id = QuestionId(EntityId::parse(question_id));
    client
        .post_answer(&question_id, content, session)
        .await
        .context("Failed to post answer")?;
    println!("Answer posted");
    Ok(())
}
