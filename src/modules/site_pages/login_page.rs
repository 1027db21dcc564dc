use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::client::envelope::{one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::transport::Method;
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, first, TimestampsWire};

const KEYS: &[&str] = &["loginPage", "login_page"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPage {
    pub id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub welcome_text: Option<String>,
    pub logo_url: Option<String>,
    pub background_image_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPageWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub welcome_text: Option<String>,
    #[serde(default, rename = "welcomeText", deserialize_with = "wire::opt_text")]
    pub welcome_text_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub logo_url: Option<String>,
    #[serde(default, rename = "logoUrl", deserialize_with = "wire::opt_text")]
    pub logo_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub background_image_url: Option<String>,
    #[serde(default, rename = "backgroundImageUrl", deserialize_with = "wire::opt_text")]
    pub background_image_url_camel: Option<String>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_login_page(wire: Option<LoginPageWire>) -> Option<LoginPage> {
    let w = wire?;
    Some(LoginPage {
        id: w.id,
        title: w.title,
        subtitle: w.subtitle,
        welcome_text: first(w.welcome_text, w.welcome_text_camel),
        logo_url: first(w.logo_url, w.logo_url_camel),
        background_image_url: first(w.background_image_url, w.background_image_url_camel),
        updated_at: w.timestamps.updated_at_opt(),
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateLoginPageRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub welcome_text: Option<String>,
    pub logo_url: Option<String>,
    pub background_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginPagePayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub subtitle: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub welcome_text: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub logo_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub background_image_url: PatchField<String>,
}

impl From<UpdateLoginPageRequest> for LoginPagePayload {
    fn from(req: UpdateLoginPageRequest) -> Self {
        Self {
            title: PatchField::from_text(req.title),
            subtitle: PatchField::from_text(req.subtitle),
            welcome_text: PatchField::from_text(req.welcome_text),
            logo_url: PatchField::from_text(req.logo_url),
            background_image_url: PatchField::from_text(req.background_image_url),
        }
    }
}

impl ApiService {
    pub async fn get_login_page(&self) -> Result<Option<LoginPage>, ApiError> {
        let body = self.get("/login-page").await?;
        Ok(to_login_page(one(&body, KEYS)?))
    }

    pub async fn update_login_page(
        &self,
        request: UpdateLoginPageRequest,
    ) -> Result<LoginPage, ApiError> {
        let payload = LoginPagePayload::from(request);
        let body = self.send_json(Method::Put, "/login-page", &payload).await?;
        required(to_login_page(one(&body, KEYS)?), "login page")
    }
}
