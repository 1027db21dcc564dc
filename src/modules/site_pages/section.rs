use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::client::envelope::{one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::transport::Method;
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, first, flag, TimestampsWire};

const KEYS: &[&str] = &["section"];

/// Home page blocks edited from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    About,
    Newsletter,
    Clients,
    Services,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::About,
        SectionKind::Newsletter,
        SectionKind::Clients,
        SectionKind::Services,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::About => "about",
            SectionKind::Newsletter => "newsletter",
            SectionKind::Clients => "clients",
            SectionKind::Services => "services",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub kind: SectionKind,
    pub id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Raw HTML.
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub is_active: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub image_url: Option<String>,
    #[serde(default, rename = "imageUrl", deserialize_with = "wire::opt_text")]
    pub image_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub button_text: Option<String>,
    #[serde(default, rename = "buttonText", deserialize_with = "wire::opt_text")]
    pub button_text_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub button_link: Option<String>,
    #[serde(default, rename = "buttonLink", deserialize_with = "wire::opt_text")]
    pub button_link_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, rename = "isActive", deserialize_with = "wire::opt_bool")]
    pub is_active_camel: Option<bool>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

/// The kind comes from the route, not the row.
pub fn to_section(kind: SectionKind, wire: Option<SectionWire>) -> Option<Section> {
    let w = wire?;
    Some(Section {
        kind,
        id: w.id,
        title: w.title,
        subtitle: w.subtitle,
        content: w.content,
        image_url: first(w.image_url, w.image_url_camel),
        button_text: first(w.button_text, w.button_text_camel),
        button_link: first(w.button_link, w.button_link_camel),
        is_active: flag(w.is_active, w.is_active_camel, true),
        updated_at: w.timestamps.updated_at_opt(),
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSectionRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub is_active: Option<bool>,
}

impl From<&Section> for UpdateSectionRequest {
    fn from(section: &Section) -> Self {
        Self {
            title: section.title.clone(),
            subtitle: section.subtitle.clone(),
            content: section.content.clone(),
            image_url: section.image_url.clone(),
            button_text: section.button_text.clone(),
            button_link: section.button_link.clone(),
            is_active: Some(section.is_active),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionPayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub subtitle: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub content: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub image_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub button_text: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub button_link: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_active: PatchField<bool>,
}

impl From<UpdateSectionRequest> for SectionPayload {
    fn from(req: UpdateSectionRequest) -> Self {
        Self {
            title: PatchField::from_text(req.title),
            subtitle: PatchField::from_text(req.subtitle),
            content: PatchField::from_text(req.content),
            image_url: PatchField::from_text(req.image_url),
            button_text: PatchField::from_text(req.button_text),
            button_link: PatchField::from_text(req.button_link),
            is_active: req.is_active.into(),
        }
    }
}

impl ApiService {
    pub async fn get_section(&self, kind: SectionKind) -> Result<Option<Section>, ApiError> {
        let body = self.get(&format!("/sections/{}", kind)).await?;
        Ok(to_section(kind, one(&body, KEYS)?))
    }

    pub async fn update_section(
        &self,
        kind: SectionKind,
        request: UpdateSectionRequest,
    ) -> Result<Section, ApiError> {
        let payload = SectionPayload::from(request);
        let body = self
            .send_json(Method::Put, &format!("/sections/{}", kind), &payload)
            .await?;
        required(to_section(kind, one(&body, KEYS)?), "section")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_comes_from_caller() {
        let wire: Option<SectionWire> = serde_json::from_value(json!({
            "id": "sec-1",
            "title": "Quem somos",
            "imageUrl": "/uploads/equipe.jpg"
        }))
        .unwrap();

        let section = to_section(SectionKind::About, wire).unwrap();

        assert_eq!(section.kind, SectionKind::About);
        assert_eq!(section.image_url.as_deref(), Some("/uploads/equipe.jpg"));
        assert!(section.is_active);
    }

    #[test]
    fn kinds_render_as_route_segments() {
        let routes: Vec<String> = SectionKind::ALL.iter().map(|k| format!("/sections/{}", k)).collect();
        assert_eq!(
            routes,
            vec!["/sections/about", "/sections/newsletter", "/sections/clients", "/sections/services"]
        );
    }

    #[test]
    fn null_input_yields_none() {
        assert!(to_section(SectionKind::Services, None).is_none());
    }
}
