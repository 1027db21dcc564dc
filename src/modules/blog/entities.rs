use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::taxonomy::Label;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    /// Raw HTML from the rich-text editor, stored and returned untouched.
    pub content: String,
    pub featured_image_url: Option<String>,
    pub author: Option<String>,
    pub is_published: bool,
    /// Stays `None` for drafts.
    pub published_at: Option<DateTime<Utc>>,
    pub categories: Vec<Label>,
    pub tags: Vec<Label>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    pub posts: Vec<BlogPost>,
    pub total: Option<u64>,
    pub page: Option<u64>,
    pub total_pages: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    pub published: Option<bool>,
    /// Category slug.
    pub category: Option<String>,
    /// Tag slug.
    pub tag: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PostFilter {
    pub fn published() -> Self {
        Self {
            published: Some(true),
            ..Default::default()
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(published) = self.published {
            query.push(("published".to_string(), published.to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|s| !s.is_empty()) {
            query.push(("category".to_string(), category.to_string()));
        }
        if let Some(tag) = self.tag.as_deref().filter(|s| !s.is_empty()) {
            query.push(("tag".to_string(), tag.to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query.push(("search".to_string(), search.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image_url: Option<String>,
    pub author: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub category_ids: Vec<String>,
    pub tag_ids: Vec<String>,
}

impl CreatePostRequest {
    pub fn draft(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: None,
            excerpt: None,
            content: content.into(),
            featured_image_url: None,
            author: None,
            is_published: false,
            published_at: None,
            category_ids: Vec::new(),
            tag_ids: Vec::new(),
        }
    }
}

/// `category_ids`/`tag_ids` replace the whole set when provided.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image_url: Option<String>,
    pub author: Option<String>,
    /// `Some(false)` also clears `published_at` on the backend.
    pub is_published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
    pub category_ids: Option<Vec<String>>,
    pub tag_ids: Option<Vec<String>>,
}

impl From<&BlogPost> for UpdatePostRequest {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: Some(post.title.clone()),
            slug: Some(post.slug.clone()),
            excerpt: post.excerpt.clone(),
            content: Some(post.content.clone()),
            featured_image_url: post.featured_image_url.clone(),
            author: post.author.clone(),
            is_published: Some(post.is_published),
            published_at: post.published_at,
            category_ids: Some(post.categories.iter().map(|c| c.id.clone()).collect()),
            tag_ids: Some(post.tags.iter().map(|t| t.id.clone()).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_skips_blank_values() {
        let filter = PostFilter {
            published: Some(true),
            category: Some(String::new()),
            tag: Some("mei".into()),
            search: Some("   ".into()),
            page: Some(2),
            limit: None,
        };

        assert_eq!(
            filter.to_query(),
            vec![
                ("published".to_string(), "true".to_string()),
                ("tag".to_string(), "mei".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn empty_filter_sends_no_query() {
        assert!(PostFilter::default().to_query().is_empty());
    }
}
