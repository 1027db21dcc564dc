use chrono::{DateTime, Utc};
use serde::Serialize;

/// Hero carousel slide. `order` is a plain sort key: gaps and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub order: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSlideRequest {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub order: u32,
    pub is_active: bool,
}

impl CreateSlideRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            image_url: None,
            button_text: None,
            button_link: None,
            order: 0,
            is_active: true,
        }
    }
}

/// `None` leaves a field untouched; `Some("")` clears an optional text field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSlideRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub order: Option<u32>,
    pub is_active: Option<bool>,
}

/// Edit form prefilled from an existing slide.
impl From<&Slide> for UpdateSlideRequest {
    fn from(slide: &Slide) -> Self {
        Self {
            title: Some(slide.title.clone()),
            subtitle: slide.subtitle.clone(),
            image_url: slide.image_url.clone(),
            button_text: slide.button_text.clone(),
            button_link: slide.button_link.clone(),
            order: Some(slide.order),
            is_active: Some(slide.is_active),
        }
    }
}
