use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }

    /// Unknown values fall back to `Image`.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("video") {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    pub company: Option<String>,
    pub testimonial_text: String,
    pub media_type: MediaType,
    pub media_url: Option<String>,
    pub order: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTestimonialRequest {
    pub client_name: String,
    pub company: Option<String>,
    pub testimonial_text: String,
    pub media_type: MediaType,
    pub media_url: Option<String>,
    pub order: u32,
    pub is_active: bool,
}

impl CreateTestimonialRequest {
    pub fn new(client_name: impl Into<String>, testimonial_text: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            company: None,
            testimonial_text: testimonial_text.into(),
            media_type: MediaType::Image,
            media_url: None,
            order: 0,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTestimonialRequest {
    pub client_name: Option<String>,
    pub company: Option<String>,
    pub testimonial_text: Option<String>,
    pub media_type: Option<MediaType>,
    pub media_url: Option<String>,
    pub order: Option<u32>,
    pub is_active: Option<bool>,
}

impl From<&Testimonial> for UpdateTestimonialRequest {
    fn from(t: &Testimonial) -> Self {
        Self {
            client_name: Some(t.client_name.clone()),
            company: t.company.clone(),
            testimonial_text: Some(t.testimonial_text.clone()),
            media_type: Some(t.media_type),
            media_url: t.media_url.clone(),
            order: Some(t.order),
            is_active: Some(t.is_active),
        }
    }
}
