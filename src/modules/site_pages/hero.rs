use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::client::envelope::{one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::transport::Method;
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, first, flag, TimestampsWire};

const KEYS: &[&str] = &["hero"];

/// Static banner above the slides on the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub background_image_url: Option<String>,
    pub is_active: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub button_text: Option<String>,
    #[serde(default, rename = "buttonText", deserialize_with = "wire::opt_text")]
    pub button_text_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub button_link: Option<String>,
    #[serde(default, rename = "buttonLink", deserialize_with = "wire::opt_text")]
    pub button_link_camel: Option<String>,
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

pub fn to_hero(wire: Option<HeroWire>) -> Option<Hero> {
    let w = wire?;
    Some(Hero {
        id: w.id,
        title: w.title,
        subtitle: w.subtitle,
        description: w.description,
        button_text: first(w.button_text, w.button_text_camel),
        button_link: first(w.button_link, w.button_link_camel),
        background_image_url: first(w.background_image_url, w.background_image_url_camel),
        is_active: flag(w.is_active, w.is_active_camel, true),
        updated_at: w.timestamps.updated_at_opt(),
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateHeroRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub background_image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl From<&Hero> for UpdateHeroRequest {
    fn from(hero: &Hero) -> Self {
        Self {
            title: hero.title.clone(),
            subtitle: hero.subtitle.clone(),
            description: hero.description.clone(),
            button_text: hero.button_text.clone(),
            button_link: hero.button_link.clone(),
            background_image_url: hero.background_image_url.clone(),
            is_active: Some(hero.is_active),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeroPayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub subtitle: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub button_text: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub button_link: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub background_image_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_active: PatchField<bool>,
}

impl From<UpdateHeroRequest> for HeroPayload {
    fn from(req: UpdateHeroRequest) -> Self {
        Self {
            title: PatchField::from_text(req.title),
            subtitle: PatchField::from_text(req.subtitle),
            description: PatchField::from_text(req.description),
            button_text: PatchField::from_text(req.button_text),
            button_link: PatchField::from_text(req.button_link),
            background_image_url: PatchField::from_text(req.background_image_url),
            is_active: req.is_active.into(),
        }
    }
}

impl ApiService {
    pub async fn get_hero(&self) -> Result<Option<Hero>, ApiError> {
        let body = self.get("/hero").await?;
        Ok(to_hero(one(&body, KEYS)?))
    }

    pub async fn update_hero(&self, request: UpdateHeroRequest) -> Result<Hero, ApiError> {
        let payload = HeroPayload::from(request);
        let body = self.send_json(Method::Put, "/hero", &payload).await?;
        required(to_hero(one(&body, KEYS)?), "hero")
    }
}
