pub mod api;
pub mod entities;
pub mod wire;

pub use entities::{BlogPost, CreatePostRequest, PostFilter, PostPage, UpdatePostRequest};
pub use wire::{to_blog_post, BlogPostWire};
