use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::client::envelope::{one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::transport::{Method, MultipartForm};
use crate::shared::patch::PatchField;
use crate::shared::upload::UploadFile;
use crate::shared::wire::{self, first, flag, TimestampsWire};

const KEYS: &[&str] = &["privacyPolicy", "privacy_policy", "policy"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyPolicy {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Raw HTML.
    pub content: Option<String>,
    pub background_image_url: Option<String>,
    pub is_active: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrivacyPolicyWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub background_image_url: Option<String>,
    #[serde(default, rename = "backgroundImageUrl", deserialize_with = "wire::opt_text")]
    pub background_image_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, rename = "isActive", deserialize_with = "wire::opt_bool")]
    pub is_active_camel: Option<bool>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_privacy_policy(wire: Option<PrivacyPolicyWire>) -> Option<PrivacyPolicy> {
    let w = wire?;
    Some(PrivacyPolicy {
        id: w.id,
        title: w.title,
        content: w.content,
        background_image_url: first(w.background_image_url, w.background_image_url_camel),
        is_active: flag(w.is_active, w.is_active_camel, true),
        updated_at: w.timestamps.updated_at_opt(),
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePrivacyPolicyRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrivacyPolicyPayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub content: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_active: PatchField<bool>,
}

impl From<UpdatePrivacyPolicyRequest> for PrivacyPolicyPayload {
    fn from(req: UpdatePrivacyPolicyRequest) -> Self {
        Self {
            title: PatchField::from_text(req.title),
            content: PatchField::from_text(req.content),
            is_active: req.is_active.into(),
        }
    }
}

impl ApiService {
    /// Public page; the backend hides it while inactive.
    pub async fn get_privacy_policy(&self) -> Result<Option<PrivacyPolicy>, ApiError> {
        let body = self.get("/privacy-policy").await?;
        Ok(to_privacy_policy(one(&body, KEYS)?))
    }

    pub async fn get_privacy_policy_admin(&self) -> Result<Option<PrivacyPolicy>, ApiError> {
        let body = self.get("/privacy-policy/admin").await?;
        Ok(to_privacy_policy(one(&body, KEYS)?))
    }

    pub async fn update_privacy_policy(
        &self,
        request: UpdatePrivacyPolicyRequest,
    ) -> Result<PrivacyPolicy, ApiError> {
        let payload = PrivacyPolicyPayload::from(request);
        let body = self
            .send_json(Method::Put, "/privacy-policy/admin", &payload)
            .await?;
        required(to_privacy_policy(one(&body, KEYS)?), "privacy policy")
    }

    pub async fn upload_privacy_policy_background(
        &self,
        file: UploadFile,
    ) -> Result<PrivacyPolicy, ApiError> {
        let form = MultipartForm::new().file("image", file);
        let body = self
            .upload(Method::Post, "/privacy-policy/admin/background-image", form)
            .await?;
        required(to_privacy_policy(one(&body, KEYS)?), "privacy policy")
    }
}
