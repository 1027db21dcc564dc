use serde::{Deserialize, Serialize};

use crate::modules::testimonials::entities::{
    CreateTestimonialRequest, MediaType, Testimonial, UpdateTestimonialRequest,
};
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, first, flag, position, TimestampsWire};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub client_name: Option<String>,
    #[serde(default, rename = "clientName", deserialize_with = "wire::opt_text")]
    pub client_name_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub testimonial_text: Option<String>,
    #[serde(default, rename = "testimonialText", deserialize_with = "wire::opt_text")]
    pub testimonial_text_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub media_type: Option<String>,
    #[serde(default, rename = "mediaType", deserialize_with = "wire::opt_text")]
    pub media_type_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub media_url: Option<String>,
    #[serde(default, rename = "mediaUrl", deserialize_with = "wire::opt_text")]
    pub media_url_camel: Option<String>,
    // pre-video rows only carried a client photo
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub client_image_url: Option<String>,
    #[serde(default, rename = "clientImageUrl", deserialize_with = "wire::opt_text")]
    pub client_image_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_int")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, rename = "isActive", deserialize_with = "wire::opt_bool")]
    pub is_active_camel: Option<bool>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_testimonial(wire: Option<TestimonialWire>) -> Option<Testimonial> {
    let w = wire?;
    let media_url = first(w.media_url, w.media_url_camel)
        .or(w.client_image_url)
        .or(w.client_image_url_camel);
    let media_type = first(w.media_type, w.media_type_camel)
        .map(|raw| MediaType::parse(&raw))
        .unwrap_or_default();

    Some(Testimonial {
        id: w.id.unwrap_or_default(),
        client_name: first(w.client_name, w.client_name_camel).unwrap_or_default(),
        company: w.company,
        testimonial_text: first(w.testimonial_text, w.testimonial_text_camel).unwrap_or_default(),
        media_type,
        media_url,
        order: position(w.order, None),
        is_active: flag(w.is_active, w.is_active_camel, true),
        created_at: w.timestamps.created_at(),
        updated_at: w.timestamps.updated_at(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestimonialPayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub client_name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub company: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub testimonial_text: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub media_type: PatchField<&'static str>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub media_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<u32>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_active: PatchField<bool>,
}

impl From<CreateTestimonialRequest> for TestimonialPayload {
    fn from(req: CreateTestimonialRequest) -> Self {
        Self {
            client_name: PatchField::Value(req.client_name),
            company: PatchField::from_text(req.company),
            testimonial_text: PatchField::Value(req.testimonial_text),
            media_type: PatchField::Value(req.media_type.as_str()),
            media_url: PatchField::from_text(req.media_url),
            order: PatchField::Value(req.order),
            is_active: PatchField::Value(req.is_active),
        }
    }
}

impl From<UpdateTestimonialRequest> for TestimonialPayload {
    fn from(req: UpdateTestimonialRequest) -> Self {
        Self {
            client_name: req.client_name.into(),
            company: PatchField::from_text(req.company),
            testimonial_text: req.testimonial_text.into(),
            media_type: req.media_type.map(|m| m.as_str()).into(),
            media_url: PatchField::from_text(req.media_url),
            order: req.order.into(),
            is_active: req.is_active.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Option<TestimonialWire> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn media_url_falls_back_to_legacy_client_image() {
        let t = to_testimonial(decode(json!({
            "id": "t1",
            "client_name": "Maria",
            "testimonial_text": "Excelente atendimento",
            "client_image_url": "/uploads/maria.jpg"
        })))
        .unwrap();

        assert_eq!(t.media_url.as_deref(), Some("/uploads/maria.jpg"));
        assert_eq!(t.media_type, MediaType::Image);
    }

    #[test]
    fn media_url_wins_over_legacy_key() {
        let t = to_testimonial(decode(json!({
            "id": "t2",
            "mediaType": "video",
            "mediaUrl": "/uploads/t2.mp4",
            "clientImageUrl": "/uploads/old.jpg"
        })))
        .unwrap();

        assert_eq!(t.media_url.as_deref(), Some("/uploads/t2.mp4"));
        assert_eq!(t.media_type, MediaType::Video);
    }

    #[test]
    fn unknown_media_type_is_image() {
        let t = to_testimonial(decode(json!({ "id": "t3", "media_type": "gif" }))).unwrap();
        assert_eq!(t.media_type, MediaType::Image);
    }

    #[test]
    fn explicit_false_survives() {
        let t = to_testimonial(decode(json!({ "id": "t4", "isActive": false }))).unwrap();
        assert!(!t.is_active);
    }

    #[test]
    fn null_input_yields_none() {
        assert!(to_testimonial(None).is_none());
    }

    #[test]
    fn update_payload_sends_media_type_as_text() {
        let req = UpdateTestimonialRequest {
            media_type: Some(MediaType::Video),
            company: Some(String::new()),
            ..Default::default()
        };

        let body = serde_json::to_value(TestimonialPayload::from(req)).unwrap();

        assert_eq!(body, json!({ "media_type": "video", "company": null }));
    }
}
