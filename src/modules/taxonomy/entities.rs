use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Category,
    Tag,
}

impl LabelKind {
    pub(crate) fn collection(&self) -> &'static str {
        match self {
            LabelKind::Category => "/categories",
            LabelKind::Tag => "/tags",
        }
    }

    pub(crate) fn single_keys(&self) -> &'static [&'static str] {
        match self {
            LabelKind::Category => &["category"],
            LabelKind::Tag => &["tag"],
        }
    }

    pub(crate) fn list_keys(&self) -> &'static [&'static str] {
        match self {
            LabelKind::Category => &["categories"],
            LabelKind::Tag => &["tags"],
        }
    }

    pub(crate) fn noun(&self) -> &'static str {
        match self {
            LabelKind::Category => "category",
            LabelKind::Tag => "tag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
    /// From the backend's `_count.posts`; `0` when the list endpoint omits it.
    pub post_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub type Category = Label;
pub type Tag = Label;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelRequest {
    pub name: String,
    /// Left to the backend when `None`.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
}

impl LabelRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            description: None,
            color: None,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateLabelRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

impl From<&Label> for UpdateLabelRequest {
    fn from(label: &Label) -> Self {
        Self {
            name: Some(label.name.clone()),
            slug: Some(label.slug.clone()),
            description: label.description.clone(),
            color: label.color.clone(),
            is_active: Some(label.is_active),
        }
    }
}
