//! Typed client for the firm site backend.
//!
//! `ApiService` is the single point of contact with the REST backend used by
//! the admin dashboard and the public site. Every resource family lives in its
//! own module under `modules/` and adds its methods to `ApiService`.

pub mod modules;
pub mod shared;

pub use modules::access_logs;
pub use modules::auth;
pub use modules::blog;
pub use modules::careers;
pub use modules::client;
pub use modules::clients;
pub use modules::contact;
pub use modules::newsletter;
pub use modules::services;
pub use modules::site_pages;
pub use modules::slides;
pub use modules::taxonomy;
pub use modules::testimonials;
pub use modules::transport;

pub use modules::client::{ApiError, ApiService};
pub use shared::config::ClientConfig;
pub use shared::session::{FileSession, InMemorySession, TokenProvider};

#[cfg(test)]
mod tests;
