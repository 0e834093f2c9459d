//! HTTP client for the Q&A backend.
//!
//! One async method per endpoint. Every failure (transport error, unexpected
//! status, unreadable body) collapses into [`RequestFailed`]; the cause is
//! only written to the diagnostic log.

mod types;

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};
pub use types::{Answer, AnswerId, EntityId, Question, QuestionId, VoteKind};
use types::{Credentials, LoginResponse, NewAnswer, NewQuestion, NewVote};

use crate::session::{BearerToken, Session};

/// Default backend the board talks to.
pub const DEFAULT_BASE_URL: &str = "https://backengine-k0m1.fly.dev";

/// The single failure signal of the API layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("request failed")]
pub struct RequestFailed;

pub type ApiResult<T> = Result<T, RequestFailed>;

/// Backend client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /questions`
    pub async fn list_questions(&self) -> ApiResult<Vec<Question>> {
        let request = self.http.get(self.url("/questions"));
        let response = send("list_questions", request, StatusCode::is_success).await?;
        read_json("list_questions", response).await
    }

    /// `POST /login`, yielding the access token on any 2xx.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<BearerToken> {
        let request = self
            .http
            .post(self.url("/login"))
            .json(&Credentials { email, password });
        let response = send("login", request, StatusCode::is_success).await?;
        let body: LoginResponse = read_json("login", response).await?;
        Ok(BearerToken::new(body.access_token))
    }

    /// `POST /signup`. Only `204 No Content` counts as success.
    pub async fn signup(&self, email: &str, password: &str) -> ApiResult<()> {
        let request = self
            .http
            .post(self.url("/signup"))
            .json(&Credentials { email, password });
        send("signup", request, |status| *status == StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    /// `POST /questions`
    pub async fn post_question(
        &self,
        title: &str,
        content: &str,
        session: &Session,
    ) -> ApiResult<()> {
        let request = self
            .http
            .post(self.url("/questions"))
            .json(&NewQuestion { title, content });
        send(
            "post_question",
            authorize(request, session),
            StatusCode::is_success,
        )
        .await?;
        Ok(())
    }

    /// `POST /questions/{id}/answers`
    pub async fn post_answer(
        &self,
        question_id: &QuestionId,
        content: &str,
        session: &Session,
    ) -> ApiResult<()> {
        let request = self
            .http
            .post(self.url(&format!("/questions/{question_id}/answers")))
            .json(&NewAnswer { content });
        send(
            "post_answer",
            authorize(request, session),
            StatusCode::is_success,
        )
        .await?;
        Ok(())
    }

    /// `POST /votes`
    pub async fn vote(&self, kind: VoteKind, id: &EntityId, session: &Session) -> ApiResult<()> {
        let request = self
            .http
            .post(self.url("/votes"))
            .json(&NewVote { kind, id });
        send("vote", authorize(request, session), StatusCode::is_success).await?;
        Ok(())
    }
}

/// Adds the bearer header for logged-in sessions. Guests send none.
fn authorize(request: RequestBuilder, session: &Session) -> RequestBuilder {
    match session.token() {
        Some(token) => request.header(AUTHORIZATION, token.header_value()),
        None => request,
    }
}

async fn send(
    op: &'static str,
    request: RequestBuilder,
    accept: fn(&StatusCode) -> bool,
) -> ApiResult<Response> {
    let response = request.send().await.map_err(|error| {
        warn!(op, %error, "request did not complete");
        RequestFailed
    })?;

    let status = response.status();
    if accept(&status) {
        debug!(op, %status, "request succeeded");
        Ok(response)
    } else {
        warn!(op, %status, "unexpected response status");
        Err(RequestFailed)
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    op: &'static str,
    response: Response,
) -> ApiResult<T> {
    response.json::<T>().await.map_err(|error| {
        warn!(op, %error, "could not decode response body");
        RequestFailed
    })
}
