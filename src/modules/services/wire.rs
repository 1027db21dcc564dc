use serde::{Deserialize, Serialize};

use crate::modules::services::entities::{
    CreateServiceRequest, Service, ServiceLegacyKeys, UpdateServiceRequest,
};
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, first, flag, position, TimestampsWire};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub image_url: Option<String>,
    #[serde(default, rename = "imageUrl", deserialize_with = "wire::opt_text")]
    pub image_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_int")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, rename = "isActive", deserialize_with = "wire::opt_bool")]
    pub is_active_camel: Option<bool>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_service(wire: Option<ServiceWire>) -> Option<Service> {
    let w = wire?;
    let id = w.id.unwrap_or_default();
    let slug = w
        .slug
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| id.clone());
    let image_url = first(w.image_url, w.image_url_camel);
    let is_active = flag(w.is_active, w.is_active_camel, true);

    Some(Service {
        id,
        name: w.name.unwrap_or_default(),
        slug,
        description: w.description,
        content: w.content,
        icon: w.icon,
        image_url: image_url.clone(),
        order: position(w.order, None),
        is_active,
        created_at: w.timestamps.created_at(),
        updated_at: w.timestamps.updated_at(),
        legacy: ServiceLegacyKeys {
            image_url,
            is_active,
        },
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServicePayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub slug: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub content: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub icon: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub image_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<u32>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_active: PatchField<bool>,
}

impl From<CreateServiceRequest> for ServicePayload {
    fn from(req: CreateServiceRequest) -> Self {
        Self {
            name: PatchField::Value(req.name),
            slug: PatchField::from_text(req.slug),
            description: PatchField::from_text(req.description),
            content: PatchField::from_text(req.content),
            icon: PatchField::from_text(req.icon),
            image_url: PatchField::from_text(req.image_url),
            order: PatchField::Value(req.order),
            is_active: PatchField::Value(req.is_active),
        }
    }
}

impl From<UpdateServiceRequest> for ServicePayload {
    fn from(req: UpdateServiceRequest) -> Self {
        Self {
            name: req.name.into(),
            slug: PatchField::from_text(req.slug),
            description: PatchField::from_text(req.description),
            content: PatchField::from_text(req.content),
            icon: PatchField::from_text(req.icon),
            image_url: PatchField::from_text(req.image_url),
            order: req.order.into(),
            is_active: req.is_active.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Option<ServiceWire> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn slug_falls_back_to_id() {
        let service = to_service(decode(json!({ "id": "svc-9", "name": "Folha de pagamento" }))).unwrap();
        assert_eq!(service.slug, "svc-9");

        let blank = to_service(decode(json!({ "id": "svc-9", "slug": "" }))).unwrap();
        assert_eq!(blank.slug, "svc-9");
    }

    #[test]
    fn serialises_dual_keys_for_legacy_screens() {
        let service = to_service(decode(json!({
            "id": "svc-1",
            "name": "Contabilidade",
            "slug": "contabilidade",
            "imageUrl": "/img/contabilidade.png",
            "is_active": false
        })))
        .unwrap();

        let out = serde_json::to_value(&service).unwrap();

        assert_eq!(out["imageUrl"], "/img/contabilidade.png");
        assert_eq!(out["image_url"], "/img/contabilidade.png");
        assert_eq!(out["isActive"], false);
        assert_eq!(out["is_active"], false);
        assert!(out.get("legacy").is_none());
    }

    #[test]
    fn null_input_yields_none() {
        assert!(to_service(None).is_none());
    }

    #[test]
    fn update_payload_distinguishes_clear_from_keep() {
        let req = UpdateServiceRequest {
            description: Some(String::new()),
            icon: None,
            order: Some(1),
            ..Default::default()
        };

        let body = serde_json::to_value(ServicePayload::from(req)).unwrap();

        assert_eq!(body, json!({ "description": null, "order": 1 }));
    }
}
