use serde::{Deserialize, Serialize};

use crate::modules::taxonomy::entities::{Label, LabelRequest, UpdateLabelRequest};
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, flag, position, CountWire, TimestampsWire};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, rename = "isActive", deserialize_with = "wire::opt_bool")]
    pub is_active_camel: Option<bool>,
    #[serde(default, rename = "_count")]
    pub count: Option<CountWire>,
    #[serde(default, deserialize_with = "wire::opt_int")]
    pub post_count: Option<i64>,
    #[serde(default, rename = "postCount", deserialize_with = "wire::opt_int")]
    pub post_count_camel: Option<i64>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_label(wire: Option<LabelWire>) -> Option<Label> {
    let w = wire?;
    let counted = w.count.and_then(|c| c.posts);

    Some(Label {
        id: w.id.unwrap_or_default(),
        name: w.name.unwrap_or_default(),
        slug: w.slug.unwrap_or_default(),
        description: w.description,
        color: w.color,
        is_active: flag(w.is_active, w.is_active_camel, true),
        post_count: position(counted.or(w.post_count), w.post_count_camel),
        created_at: w.timestamps.created_at(),
        updated_at: w.timestamps.updated_at(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabelPayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub slug: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub color: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_active: PatchField<bool>,
}

impl From<LabelRequest> for LabelPayload {
    fn from(req: LabelRequest) -> Self {
        Self {
            name: PatchField::Value(req.name),
            slug: PatchField::from_text(req.slug),
            description: PatchField::from_text(req.description),
            color: PatchField::from_text(req.color),
            is_active: PatchField::Value(req.is_active),
        }
    }
}

impl From<UpdateLabelRequest> for LabelPayload {
    fn from(req: UpdateLabelRequest) -> Self {
        Self {
            name: req.name.into(),
            slug: PatchField::from_text(req.slug),
            description: PatchField::from_text(req.description),
            color: PatchField::from_text(req.color),
            is_active: req.is_active.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Option<LabelWire> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn post_count_comes_from_count_block() {
        let label = to_label(decode(json!({
            "id": "cat-1",
            "name": "Impostos",
            "slug": "impostos",
            "color": "#1d4ed8",
            "_count": { "posts": 7 }
        })))
        .unwrap();

        assert_eq!(label.post_count, 7);
        assert_eq!(label.color.as_deref(), Some("#1d4ed8"));
        assert!(label.is_active);
    }

    #[test]
    fn missing_count_is_zero() {
        let label = to_label(decode(json!({ "id": "tag-1", "name": "MEI" }))).unwrap();
        assert_eq!(label.post_count, 0);
    }

    #[test]
    fn null_input_yields_none() {
        assert!(to_label(None).is_none());
    }

    #[test]
    fn empty_color_clears_it() {
        let req = UpdateLabelRequest {
            color: Some(String::new()),
            ..Default::default()
        };

        let body = serde_json::to_value(LabelPayload::from(req)).unwrap();

        assert_eq!(body, json!({ "color": null }));
    }
}
