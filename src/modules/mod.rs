pub mod access_logs;
pub mod auth;
pub mod blog;
pub mod careers;
pub mod client;
pub mod clients;
pub mod contact;
pub mod newsletter;
pub mod services;
pub mod site_pages;
pub mod slides;
pub mod taxonomy;
pub mod testimonials;
pub mod transport;
