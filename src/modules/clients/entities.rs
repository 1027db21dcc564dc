use chrono::{DateTime, Utc};
use serde::Serialize;

/// Customer logo shown in the "our clients" strip.
///
/// Like `Service`, serialises both casings of the URL fields and `isActive`
/// for dashboard screens that still read snake_case keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    /// `None` until a logo is uploaded.
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub order: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub legacy: ClientLegacyKeys,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientLegacyKeys {
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateClientRequest {
    pub name: String,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub order: u32,
    pub is_active: bool,
}

impl CreateClientRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            website_url: None,
            facebook_url: None,
            instagram_url: None,
            linkedin_url: None,
            twitter_url: None,
            order: 0,
            is_active: true,
        }
    }
}

/// Logos are managed through the upload endpoints, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub order: Option<u32>,
    pub is_active: Option<bool>,
}

impl From<&Client> for UpdateClientRequest {
    fn from(client: &Client) -> Self {
        Self {
            name: Some(client.name.clone()),
            website_url: client.website_url.clone(),
            facebook_url: client.facebook_url.clone(),
            instagram_url: client.instagram_url.clone(),
            linkedin_url: client.linkedin_url.clone(),
            twitter_url: client.twitter_url.clone(),
            order: Some(client.order),
            is_active: Some(client.is_active),
        }
    }
}
