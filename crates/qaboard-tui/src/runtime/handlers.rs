//! Effect handlers.
//!
//! Each handler is a pure async function that performs one request and
//! returns the `UiEvent` describing its outcome. The runtime spawns them and
//! sends the result to the inbox.

use qaboard_core::api::{ApiClient, EntityId, QuestionId, VoteKind};
use qaboard_core::session::Session;

use crate::common::TaskId;
use crate::events::UiEvent;

pub async fn fetch_questions(client: ApiClient, task: TaskId) -> UiEvent {
    UiEvent::QuestionsLoaded {
        task,
        result: client.list_questions().await,
    }
}

pub async fn login(client: ApiClient, email: String, password: String) -> UiEvent {
    UiEvent::LoginFinished {
        result: client.login(&email, &password).await,
    }
}

pub async fn signup(client: ApiClient, email: String, password: String) -> UiEvent {
    UiEvent::SignupFinished {
        result: client.signup(&email, &password).await,
    }
}

pub async fn post_question(
    client: ApiClient,
    title: String,
    content: String,
    session: Session,
) -> UiEvent {
    UiEvent::QuestionPosted {
        result: client.post_question(&title, &content, &session).await,
    }
}

pub async fn post_answer(
    client: ApiClient,
    question_id: QuestionId,
    content: String,
    session: Session,
) -> UiEvent {
    let result = client.post_answer(&question_id, &content, &session).await;
    UiEvent::AnswerPosted {
        question_id,
        result,
    }
}

pub async fn vote(client: ApiClient, kind: VoteKind, id: EntityId, session: Session) -> UiEvent {
    UiEvent::VoteFinished {
        result: client.vote(kind, &id, &session).await,
    }
}
