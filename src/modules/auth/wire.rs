use serde::{Deserialize, Serialize};

use crate::modules::auth::entities::{CreateUserRequest, UpdateUserRequest, User};
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, TimestampsWire};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

/// Any password hash the backend leaks is ignored: `UserWire` has no field for it.
pub fn to_user(wire: Option<UserWire>) -> Option<User> {
    let w = wire?;
    Some(User {
        id: w.id.unwrap_or_default(),
        email: w.email.unwrap_or_default(),
        name: w.name,
        created_at: w.timestamps.created_at(),
        updated_at: w.timestamps.updated_at(),
    })
}

#[derive(Clone, Default, PartialEq, Serialize)]
pub struct UserPayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub email: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub password: PatchField<String>,
}

impl From<CreateUserRequest> for UserPayload {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: PatchField::Value(req.email),
            name: PatchField::from_text(req.name),
            password: PatchField::Value(req.password),
        }
    }
}

impl From<UpdateUserRequest> for UserPayload {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            email: req.email.into(),
            name: PatchField::from_text(req.name),
            password: PatchField::from_secret(req.password),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct CodeRequest<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_password_fields() {
        let wire: Option<UserWire> = serde_json::from_value(json!({
            "id": "u1",
            "email": "admin@firm.com",
            "name": "Admin",
            "password": "$2b$10$hash",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        let user = to_user(wire).unwrap();
        let out = serde_json::to_value(&user).unwrap();

        assert_eq!(user.email, "admin@firm.com");
        assert!(out.get("password").is_none());
    }

    #[test]
    fn blank_password_on_update_is_not_sent() {
        let req = UpdateUserRequest {
            name: Some("Novo nome".into()),
            password: Some(String::new()),
            ..Default::default()
        };

        let body = serde_json::to_value(UserPayload::from(req)).unwrap();

        assert_eq!(body, json!({ "name": "Novo nome" }));
    }

    #[test]
    fn null_input_yields_none() {
        assert!(to_user(None).is_none());
    }
}
