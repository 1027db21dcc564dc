use chrono::{DateTime, Utc};
use serde::Serialize;

/// A service offered by the firm (bookkeeping, payroll, tax planning...).
///
/// Serialises with both `imageUrl`/`image_url` and `isActive`/`is_active`
/// through `legacy`. That block is a migration shim for dashboard screens
/// still reading snake_case keys; new entities do not carry one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Falls back to `id` when the backend has no slug.
    pub slug: String,
    pub description: Option<String>,
    /// Raw HTML from the rich-text editor.
    pub content: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub order: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub legacy: ServiceLegacyKeys,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceLegacyKeys {
    pub image_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateServiceRequest {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub order: u32,
    pub is_active: bool,
}

impl CreateServiceRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            description: None,
            content: None,
            icon: None,
            image_url: None,
            order: 0,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub order: Option<u32>,
    pub is_active: Option<bool>,
}

impl From<&Service> for UpdateServiceRequest {
    fn from(service: &Service) -> Self {
        Self {
            name: Some(service.name.clone()),
            slug: Some(service.slug.clone()),
            description: service.description.clone(),
            content: service.content.clone(),
            icon: service.icon.clone(),
            image_url: service.image_url.clone(),
            order: Some(service.order),
            is_active: Some(service.is_active),
        }
    }
}
