//! `qaboard vote`

use anyhow::{Context, Result};
use qaboard_core::api::{ApiClient, EntityId, VoteKind};
use qaboard_core::session::Session;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum VoteTarget {
    Question,
    Answer,
}

impl From<VoteTarget> for VoteKind {
    fn from(target: VoteTarget) -> Self {
        match target {
            VoteTarget::Question => VoteKind::Question,
            VoteTarget::Answer => VoteKind::Answer,
        }
    }
}

pub async fn run(
    client: &ApiClient,
    target: VoteTarget,
    id: &str,
    session: &Session,
) -> Result<()> {
    let kind = VoteKind::from(target);
    client
        .vote(kind, &EntityId::parse(id), session)
        .await
        .context("Vote failed")?;
    println!("Voted for {kind} {id}");
    Ok(())
}
