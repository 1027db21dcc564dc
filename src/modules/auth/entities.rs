use chrono::{DateTime, Utc};
use serde::Serialize;

/// Dashboard administrator. The password never leaves the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bearer token issued by login or code verification. Already stored in the
/// session by the time callers see it.
#[derive(Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: Option<User>,
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated(AuthSession),
    /// Password accepted; the backend emailed a code for `verify_code`.
    CodeRequired { message: Option<String> },
}

// ========================= User DTOs =========================

#[derive(Clone, PartialEq)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

impl CreateUserRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An empty or missing password keeps the current one.
#[derive(Clone, Default, PartialEq)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl From<&User> for UpdateUserRequest {
    fn from(user: &User) -> Self {
        Self {
            email: Some(user.email.clone()),
            name: user.name.clone(),
            password: None,
        }
    }
}
