//! In-memory login session.
//!
//! The bearer token only exists while logged in, so a guest session has
//! nothing to leak into a request. Nothing here is persisted.

use std::fmt;

/// Opaque credential returned by `/login`.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Keep tokens out of logs and panic messages.
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(..)")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Guest,
    LoggedIn {
        token: BearerToken,
    },
}

impl Session {
    pub fn logged_in(token: BearerToken) -> Self {
        Session::LoggedIn { token }
    }

    /// Builds a session from an optional token (e.g. `--token`).
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.trim().is_empty() => {
                Session::logged_in(BearerToken::new(token.trim()))
            }
            _ => Session::Guest,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }

    pub fn token(&self) -> Option<&BearerToken> {
        match self {
            Session::Guest => None,
            Session::LoggedIn { token } => Some(token),
        }
    }

    pub fn logout(&mut self) {
        *self = Session::Guest;
    }
}
