use serde::{Deserialize, Serialize};

use crate::modules::slides::entities::{CreateSlideRequest, Slide, UpdateSlideRequest};
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, first, flag, position, TimestampsWire};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlideWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub subtitle: Option<String>,
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
    #[serde(default, deserialize_with = "wire::opt_int")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, rename = "isActive", deserialize_with = "wire::opt_bool")]
    pub is_active_camel: Option<bool>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_slide(wire: Option<SlideWire>) -> Option<Slide> {
    let w = wire?;
    Some(Slide {
        id: w.id.unwrap_or_default(),
        title: w.title.unwrap_or_default(),
        subtitle: w.subtitle,
        image_url: first(w.image_url, w.image_url_camel),
        button_text: first(w.button_text, w.button_text_camel),
        button_link: first(w.button_link, w.button_link_camel),
        order: position(w.order, None),
        is_active: flag(w.is_active, w.is_active_camel, true),
        created_at: w.timestamps.created_at(),
        updated_at: w.timestamps.updated_at(),
    })
}

/// Outgoing body for POST/PUT `/slides`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlidePayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub subtitle: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub image_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub button_text: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub button_link: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<u32>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_active: PatchField<bool>,
}

impl From<CreateSlideRequest> for SlidePayload {
    fn from(req: CreateSlideRequest) -> Self {
        Self {
            title: PatchField::Value(req.title),
            subtitle: PatchField::from_text(req.subtitle),
            image_url: PatchField::from_text(req.image_url),
            button_text: PatchField::from_text(req.button_text),
            button_link: PatchField::from_text(req.button_link),
            order: PatchField::Value(req.order),
            is_active: PatchField::Value(req.is_active),
        }
    }
}

impl From<UpdateSlideRequest> for SlidePayload {
    fn from(req: UpdateSlideRequest) -> Self {
        Self {
            title: req.title.into(),
            subtitle: PatchField::from_text(req.subtitle),
            image_url: PatchField::from_text(req.image_url),
            button_text: PatchField::from_text(req.button_text),
            button_link: PatchField::from_text(req.button_link),
            order: req.order.into(),
            is_active: req.is_active.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Option<SlideWire> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn translates_snake_case_row() {
        let slide = to_slide(decode(json!({
            "id": "s1",
            "title": "Planejamento tributário",
            "subtitle": "Pague menos impostos",
            "image_url": "/uploads/s1.jpg",
            "button_text": "Fale conosco",
            "button_link": "/contato",
            "order": 2,
            "is_active": false,
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-02T12:00:00Z"
        })))
        .unwrap();

        assert_eq!(slide.id, "s1");
        assert_eq!(slide.image_url.as_deref(), Some("/uploads/s1.jpg"));
        assert_eq!(slide.button_text.as_deref(), Some("Fale conosco"));
        assert_eq!(slide.order, 2);
        assert!(!slide.is_active);
        assert_eq!(slide.created_at.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn falls_back_to_camel_case_keys() {
        let slide = to_slide(decode(json!({
            "id": "s2",
            "title": "Abertura de empresa",
            "imageUrl": "/uploads/s2.jpg",
            "buttonLink": "/servicos",
            "isActive": false
        })))
        .unwrap();

        assert_eq!(slide.image_url.as_deref(), Some("/uploads/s2.jpg"));
        assert_eq!(slide.button_link.as_deref(), Some("/servicos"));
        assert!(!slide.is_active);
    }

    #[test]
    fn is_active_defaults_to_true_only_when_absent() {
        let absent = to_slide(decode(json!({ "id": "s3" }))).unwrap();
        assert!(absent.is_active);

        let explicit = to_slide(decode(json!({ "id": "s3", "is_active": false }))).unwrap();
        assert!(!explicit.is_active);
    }

    #[test]
    fn null_input_yields_none() {
        assert!(to_slide(None).is_none());
        assert!(to_slide(decode(json!(null))).is_none());
    }

    #[test]
    fn create_payload_nulls_empty_optionals() {
        let mut req = CreateSlideRequest::new("Consultoria");
        req.subtitle = Some(String::new());
        req.button_link = Some("/contato".into());

        let body = serde_json::to_value(SlidePayload::from(req)).unwrap();

        assert_eq!(
            body,
            json!({
                "title": "Consultoria",
                "subtitle": null,
                "button_link": "/contato",
                "order": 0,
                "is_active": true
            })
        );
    }

    #[test]
    fn domain_round_trip_preserves_populated_fields() {
        let slide = to_slide(decode(json!({
            "id": "s4",
            "title": "IRPF",
            "subtitle": "Declaração",
            "image_url": "/i.png",
            "order": 5,
            "is_active": true
        })))
        .unwrap();

        let body = serde_json::to_value(SlidePayload::from(UpdateSlideRequest::from(&slide))).unwrap();

        assert_eq!(
            body,
            json!({
                "title": "IRPF",
                "subtitle": "Declaração",
                "image_url": "/i.png",
                "order": 5,
                "is_active": true
            })
        );
    }
}
