use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::blog::entities::{BlogPost, CreatePostRequest, UpdatePostRequest};
use crate::modules::taxonomy::wire::{to_label, LabelWire};
use crate::modules::taxonomy::Label;
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, first, flag, parse_timestamp, TimestampsWire};

/// Label links arrive either as join rows (`{ category: {...} }`) or as the
/// label itself, depending on the endpoint's `include`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LinkedLabelWire {
    Category { category: LabelWire },
    Tag { tag: LabelWire },
    Direct(LabelWire),
}

impl LinkedLabelWire {
    fn into_label(self) -> Option<Label> {
        match self {
            LinkedLabelWire::Category { category } => to_label(Some(category)),
            LinkedLabelWire::Tag { tag } => to_label(Some(tag)),
            LinkedLabelWire::Direct(label) => to_label(Some(label)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPostWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub featured_image_url: Option<String>,
    #[serde(default, rename = "featuredImageUrl", deserialize_with = "wire::opt_text")]
    pub featured_image_url_camel: Option<String>,
    /// Either a display name or an author object with `name`.
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_published: Option<bool>,
    #[serde(default, rename = "isPublished", deserialize_with = "wire::opt_bool")]
    pub is_published_camel: Option<bool>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub published_at: Option<String>,
    #[serde(default, rename = "publishedAt", deserialize_with = "wire::opt_text")]
    pub published_at_camel: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<Option<LinkedLabelWire>>>,
    #[serde(default)]
    pub tags: Option<Vec<Option<LinkedLabelWire>>>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

fn author_name(raw: Option<Value>) -> Option<String> {
    match raw? {
        Value::String(name) if !name.is_empty() => Some(name),
        Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

fn labels(raw: Option<Vec<Option<LinkedLabelWire>>>) -> Vec<Label> {
    raw.unwrap_or_default()
        .into_iter()
        .flatten()
        .filter_map(LinkedLabelWire::into_label)
        .collect()
}

pub fn to_blog_post(wire: Option<BlogPostWire>) -> Option<BlogPost> {
    let w = wire?;
    Some(BlogPost {
        id: w.id.unwrap_or_default(),
        title: w.title.unwrap_or_default(),
        slug: w.slug.unwrap_or_default(),
        excerpt: w.excerpt,
        content: w.content.unwrap_or_default(),
        featured_image_url: first(w.featured_image_url, w.featured_image_url_camel),
        author: author_name(w.author),
        is_published: flag(w.is_published, w.is_published_camel, false),
        published_at: parse_timestamp(first(
            w.published_at.as_deref(),
            w.published_at_camel.as_deref(),
        )),
        categories: labels(w.categories),
        tags: labels(w.tags),
        created_at: w.timestamps.created_at(),
        updated_at: w.timestamps.updated_at(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlogPostPayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub slug: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub excerpt: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub content: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub featured_image_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub author: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_published: PatchField<bool>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub published_at: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub category_ids: PatchField<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub tag_ids: PatchField<Vec<String>>,
}

impl From<CreatePostRequest> for BlogPostPayload {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: PatchField::Value(req.title),
            slug: PatchField::from_text(req.slug),
            excerpt: PatchField::from_text(req.excerpt),
            content: PatchField::Value(req.content),
            featured_image_url: PatchField::from_text(req.featured_image_url),
            author: PatchField::from_text(req.author),
            is_published: PatchField::Value(req.is_published),
            published_at: req.published_at.map(|ts| ts.to_rfc3339()).into(),
            category_ids: PatchField::Value(req.category_ids),
            tag_ids: PatchField::Value(req.tag_ids),
        }
    }
}

impl From<UpdatePostRequest> for BlogPostPayload {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title.into(),
            slug: PatchField::from_text(req.slug),
            excerpt: PatchField::from_text(req.excerpt),
            content: req.content.into(),
            featured_image_url: PatchField::from_text(req.featured_image_url),
            author: PatchField::from_text(req.author),
            is_published: req.is_published.into(),
            // unpublishing always clears the publication date
            published_at: match (req.is_published, req.published_at) {
                (Some(false), _) => PatchField::Null,
                (_, published_at) => published_at.map(|ts| ts.to_rfc3339()).into(),
            },
            category_ids: req.category_ids.into(),
            tag_ids: req.tag_ids.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Option<BlogPostWire> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn flattens_join_rows_and_direct_labels() {
        let post = to_blog_post(decode(json!({
            "id": "p1",
            "title": "Simples Nacional 2025",
            "slug": "simples-nacional-2025",
            "content": "<p>Novas faixas</p>",
            "is_published": true,
            "published_at": "2025-01-10T09:00:00Z",
            "author": { "id": "u1", "name": "Ana" },
            "categories": [{ "category": { "id": "c1", "name": "Impostos", "slug": "impostos" } }],
            "tags": [{ "id": "t1", "name": "MEI", "slug": "mei" }, null]
        })))
        .unwrap();

        assert_eq!(post.content, "<p>Novas faixas</p>");
        assert_eq!(post.author.as_deref(), Some("Ana"));
        assert_eq!(post.categories.len(), 1);
        assert_eq!(post.categories[0].slug, "impostos");
        assert_eq!(post.tags.len(), 1);
        assert_eq!(post.tags[0].name, "MEI");
        assert!(post.published_at.is_some());
    }

    #[test]
    fn drafts_keep_published_at_empty() {
        let post = to_blog_post(decode(json!({ "id": "p2", "title": "Rascunho", "author": "Equipe" }))).unwrap();

        assert!(!post.is_published);
        assert!(post.published_at.is_none());
        assert_eq!(post.author.as_deref(), Some("Equipe"));
        assert!(post.categories.is_empty());
    }

    #[test]
    fn null_input_yields_none() {
        assert!(to_blog_post(None).is_none());
    }

    #[test]
    fn update_payload_replaces_label_sets() {
        let req = UpdatePostRequest {
            excerpt: Some(String::new()),
            tag_ids: Some(vec!["t1".into(), "t2".into()]),
            ..Default::default()
        };

        let body = serde_json::to_value(BlogPostPayload::from(req)).unwrap();

        assert_eq!(body, json!({ "excerpt": null, "tag_ids": ["t1", "t2"] }));
    }

    #[test]
    fn unpublishing_clears_published_at() {
        let post = to_blog_post(
            serde_json::from_value(json!({
                "id": "p9",
                "title": "IRPF 2025",
                "is_published": true,
                "published_at": "2025-01-10T09:00:00Z"
            }))
            .unwrap(),
        )
        .unwrap();
        let mut req = UpdatePostRequest::from(&post);
        req.is_published = Some(false);

        let body = serde_json::to_value(BlogPostPayload::from(req)).unwrap();

        assert_eq!(body["is_published"], false);
        assert!(body["published_at"].is_null());
        assert!(body.as_object().unwrap().contains_key("published_at"));
    }

    #[test]
    fn untouched_publication_keeps_published_at() {
        let req = UpdatePostRequest {
            title: Some("Novo título".into()),
            ..Default::default()
        };

        let body = serde_json::to_value(BlogPostPayload::from(req)).unwrap();

        assert_eq!(body, json!({ "title": "Novo título" }));
    }
}
