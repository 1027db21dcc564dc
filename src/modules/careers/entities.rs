use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub linkedin_url: Option<String>,
    pub message: Option<String>,
    pub cv_url: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Sent by the public careers form, usually after `upload_job_application_cv`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateJobApplicationRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub linkedin_url: Option<String>,
    pub message: Option<String>,
    pub cv_url: Option<String>,
}

impl CreateJobApplicationRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            position: None,
            linkedin_url: None,
            message: None,
            cv_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateJobApplicationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub linkedin_url: Option<String>,
    pub message: Option<String>,
    pub cv_url: Option<String>,
    pub is_read: Option<bool>,
}

/// The "Trabalhe conosco" page. Singleton row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareersPage {
    pub id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    /// Raw HTML.
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCareersPageRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub is_active: Option<bool>,
}

impl From<&CareersPage> for UpdateCareersPageRequest {
    fn from(page: &CareersPage) -> Self {
        Self {
            title: page.title.clone(),
            subtitle: page.subtitle.clone(),
            description: page.description.clone(),
            content: page.content.clone(),
            is_active: Some(page.is_active),
        }
    }
}
