use serde::{Deserialize, Serialize};

use crate::modules::clients::entities::{
    Client, ClientLegacyKeys, CreateClientRequest, UpdateClientRequest,
};
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, first, flag, position, TimestampsWire};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub logo_url: Option<String>,
    #[serde(default, rename = "logoUrl", deserialize_with = "wire::opt_text")]
    pub logo_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub website_url: Option<String>,
    #[serde(default, rename = "websiteUrl", deserialize_with = "wire::opt_text")]
    pub website_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub facebook_url: Option<String>,
    #[serde(default, rename = "facebookUrl", deserialize_with = "wire::opt_text")]
    pub facebook_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub instagram_url: Option<String>,
    #[serde(default, rename = "instagramUrl", deserialize_with = "wire::opt_text")]
    pub instagram_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub linkedin_url: Option<String>,
    #[serde(default, rename = "linkedinUrl", deserialize_with = "wire::opt_text")]
    pub linkedin_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub twitter_url: Option<String>,
    #[serde(default, rename = "twitterUrl", deserialize_with = "wire::opt_text")]
    pub twitter_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_int")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, rename = "isActive", deserialize_with = "wire::opt_bool")]
    pub is_active_camel: Option<bool>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_client(wire: Option<ClientWire>) -> Option<Client> {
    let w = wire?;
    let logo_url = first(w.logo_url, w.logo_url_camel);
    let website_url = first(w.website_url, w.website_url_camel);
    let facebook_url = first(w.facebook_url, w.facebook_url_camel);
    let instagram_url = first(w.instagram_url, w.instagram_url_camel);
    let linkedin_url = first(w.linkedin_url, w.linkedin_url_camel);
    let twitter_url = first(w.twitter_url, w.twitter_url_camel);
    let is_active = flag(w.is_active, w.is_active_camel, true);

    Some(Client {
        id: w.id.unwrap_or_default(),
        name: w.name.unwrap_or_default(),
        legacy: ClientLegacyKeys {
            logo_url: logo_url.clone(),
            website_url: website_url.clone(),
            facebook_url: facebook_url.clone(),
            instagram_url: instagram_url.clone(),
            linkedin_url: linkedin_url.clone(),
            twitter_url: twitter_url.clone(),
            is_active,
        },
        logo_url,
        website_url,
        facebook_url,
        instagram_url,
        linkedin_url,
        twitter_url,
        order: position(w.order, None),
        is_active,
        created_at: w.timestamps.created_at(),
        updated_at: w.timestamps.updated_at(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientPayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub website_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub facebook_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub instagram_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub linkedin_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub twitter_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<u32>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_active: PatchField<bool>,
}

impl From<CreateClientRequest> for ClientPayload {
    fn from(req: CreateClientRequest) -> Self {
        Self {
            name: PatchField::Value(req.name),
            website_url: PatchField::from_text(req.website_url),
            facebook_url: PatchField::from_text(req.facebook_url),
            instagram_url: PatchField::from_text(req.instagram_url),
            linkedin_url: PatchField::from_text(req.linkedin_url),
            twitter_url: PatchField::from_text(req.twitter_url),
            order: PatchField::Value(req.order),
            is_active: PatchField::Value(req.is_active),
        }
    }
}

impl From<UpdateClientRequest> for ClientPayload {
    fn from(req: UpdateClientRequest) -> Self {
        Self {
            name: req.name.into(),
            website_url: PatchField::from_text(req.website_url),
            facebook_url: PatchField::from_text(req.facebook_url),
            instagram_url: PatchField::from_text(req.instagram_url),
            linkedin_url: PatchField::from_text(req.linkedin_url),
            twitter_url: PatchField::from_text(req.twitter_url),
            order: req.order.into(),
            is_active: req.is_active.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Option<ClientWire> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn reads_mixed_casing() {
        let client = to_client(decode(json!({
            "id": 42,
            "name": "Padaria Central",
            "logoUrl": "/uploads/logo.png",
            "website_url": "https://padaria.example",
            "instagramUrl": "https://instagram.com/padaria",
            "order": "3"
        })))
        .unwrap();

        assert_eq!(client.id, "42");
        assert_eq!(client.logo_url.as_deref(), Some("/uploads/logo.png"));
        assert_eq!(client.website_url.as_deref(), Some("https://padaria.example"));
        assert_eq!(client.instagram_url.as_deref(), Some("https://instagram.com/padaria"));
        assert_eq!(client.order, 3);
        assert!(client.is_active);
    }

    #[test]
    fn serialises_both_key_styles() {
        let client = to_client(decode(json!({
            "id": "c1",
            "name": "Acme",
            "logo_url": "/l.png",
            "is_active": false
        })))
        .unwrap();

        let out = serde_json::to_value(&client).unwrap();

        assert_eq!(out["logoUrl"], "/l.png");
        assert_eq!(out["logo_url"], "/l.png");
        assert_eq!(out["isActive"], false);
        assert_eq!(out["is_active"], false);
        assert!(out["twitterUrl"].is_null());
    }

    #[test]
    fn null_input_yields_none() {
        assert!(to_client(None).is_none());
    }

    #[test]
    fn domain_round_trip_preserves_populated_fields() {
        let client = to_client(decode(json!({
            "id": "c2",
            "name": "Contábil Sul",
            "website_url": "https://sul.example",
            "linkedin_url": "",
            "order": 1,
            "is_active": true
        })))
        .unwrap();

        let body = serde_json::to_value(ClientPayload::from(UpdateClientRequest::from(&client))).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Contábil Sul",
                "website_url": "https://sul.example",
                "linkedin_url": null,
                "order": 1,
                "is_active": true
            })
        );
    }
}
