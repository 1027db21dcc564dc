use crate::modules::blog::entities::{
    BlogPost, CreatePostRequest, PostFilter, PostPage, UpdatePostRequest,
};
use crate::modules::blog::wire::{to_blog_post, BlogPostPayload, BlogPostWire};
use crate::modules::client::api_service::segment;
use crate::modules::client::envelope::{list, one, page_meta, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::transport::{Method, MultipartForm};
use crate::shared::upload::UploadFile;

const SINGLE: &[&str] = &["post"];
const MANY: &[&str] = &["posts"];

impl ApiService {
    pub async fn get_posts(&self, filter: &PostFilter) -> Result<PostPage, ApiError> {
        let body = self
            .request_with_query(Method::Get, "/posts", filter.to_query(), None)
            .await?;
        let rows: Vec<BlogPostWire> = list(&body, MANY)?;

        Ok(PostPage {
            posts: rows.into_iter().filter_map(|w| to_blog_post(Some(w))).collect(),
            total: page_meta(&body, &["total"]),
            page: page_meta(&body, &["page"]),
            total_pages: page_meta(&body, &["totalPages", "total_pages"]),
        })
    }

    pub async fn get_post(&self, id: &str) -> Result<BlogPost, ApiError> {
        let body = self.get(&format!("/posts/{}", segment(id))).await?;
        required(to_blog_post(one(&body, SINGLE)?), "post")
    }

    pub async fn get_post_by_slug(&self, slug: &str) -> Result<BlogPost, ApiError> {
        let body = self.get(&format!("/posts/slug/{}", segment(slug))).await?;
        required(to_blog_post(one(&body, SINGLE)?), "post")
    }

    pub async fn create_post(&self, request: CreatePostRequest) -> Result<BlogPost, ApiError> {
        let payload = BlogPostPayload::from(request);
        let body = self.send_json(Method::Post, "/posts", &payload).await?;
        required(to_blog_post(one(&body, SINGLE)?), "post")
    }

    pub async fn update_post(
        &self,
        id: &str,
        request: UpdatePostRequest,
    ) -> Result<BlogPost, ApiError> {
        let payload = BlogPostPayload::from(request);
        let body = self
            .send_json(Method::Put, &format!("/posts/{}", segment(id)), &payload)
            .await?;
        required(to_blog_post(one(&body, SINGLE)?), "post")
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/posts/{}", segment(id))).await?;
        Ok(())
    }

    pub async fn upload_post_image(&self, id: &str, file: UploadFile) -> Result<BlogPost, ApiError> {
        let form = MultipartForm::new().file("image", file);
        let body = self
            .upload(Method::Post, &format!("/posts/{}/image", segment(id)), form)
            .await?;
        required(to_blog_post(one(&body, SINGLE)?), "post")
    }
}
