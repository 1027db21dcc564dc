use serde_json::Value;
use tracing::{info, warn};

use crate::modules::auth::entities::{
    AuthSession, CreateUserRequest, LoginOutcome, UpdateUserRequest, User,
};
use crate::modules::auth::wire::{to_user, CodeRequest, Credentials, UserPayload, UserWire};
use crate::modules::client::api_service::segment;
use crate::modules::client::envelope::{list, one, required, string_field};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::transport::Method;

const SINGLE: &[&str] = &["user"];
const MANY: &[&str] = &["users"];
const TOKEN: &[&str] = &["token", "accessToken", "access_token"];

fn token_in(body: &Value) -> Option<String> {
    string_field(body, TOKEN)
        .or_else(|| body.get("data").and_then(|d| string_field(d, TOKEN)))
        .filter(|t| !t.trim().is_empty())
}

impl ApiService {
    fn start_session(&self, token: String, body: &Value) -> Result<AuthSession, ApiError> {
        self.session().store_token(Some(&token))?;
        let user = to_user(one::<UserWire>(body, SINGLE)?.filter(|w| w.id.is_some()));
        Ok(AuthSession { token, user })
    }

    /// Password login. Accounts with code verification enabled get
    /// `LoginOutcome::CodeRequired` and nothing is stored.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let body = self
            .send_json(
                Method::Post,
                "/auth/login",
                &Credentials {
                    email: email.trim(),
                    password,
                },
            )
            .await?;

        match token_in(&body) {
            Some(token) => {
                info!(email = %email.trim(), "Login succeeded");
                self.start_session(token, &body).map(LoginOutcome::Authenticated)
            }
            None => {
                info!(email = %email.trim(), "Login requires code verification");
                Ok(LoginOutcome::CodeRequired {
                    message: string_field(&body, &["message"]),
                })
            }
        }
    }

    /// Asks the backend to email a one-time login code. Returns its message, if any.
    pub async fn send_code(&self, email: &str) -> Result<Option<String>, ApiError> {
        let body = self
            .send_json(
                Method::Post,
                "/auth/send-code",
                &CodeRequest {
                    email: email.trim(),
                    code: None,
                },
            )
            .await?;
        Ok(string_field(&body, &["message"]))
    }

    pub async fn verify_code(&self, email: &str, code: &str) -> Result<AuthSession, ApiError> {
        let body = self
            .send_json(
                Method::Post,
                "/auth/verify-code",
                &CodeRequest {
                    email: email.trim(),
                    code: Some(code.trim()),
                },
            )
            .await?;

        let Some(token) = token_in(&body) else {
            warn!(email = %email.trim(), "Code verification answered without a token");
            return Err(ApiError::MissingField("token"));
        };
        self.start_session(token, &body)
    }

    /// Local only: the backend keeps no session state for bearer tokens.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.session().store_token(None)?;
        Ok(())
    }

    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        let body = self.get("/users").await?;
        let rows: Vec<UserWire> = list(&body, MANY)?;
        Ok(rows.into_iter().filter_map(|w| to_user(Some(w))).collect())
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let body = self.get(&format!("/users/{}", segment(id))).await?;
        required(to_user(one(&body, SINGLE)?), "user")
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, ApiError> {
        let payload = UserPayload::from(request);
        let body = self.send_json(Method::Post, "/users", &payload).await?;
        required(to_user(one(&body, SINGLE)?), "user")
    }

    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> Result<User, ApiError> {
        let payload = UserPayload::from(request);
        let body = self
            .send_json(Method::Put, &format!("/users/{}", segment(id)), &payload)
            .await?;
        required(to_user(one(&body, SINGLE)?), "user")
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", segment(id))).await?;
        Ok(())
    }
}
