pub mod api_service;
pub(crate) mod envelope;
pub mod error;

pub use api_service::ApiService;
pub use error::{ApiError, DEFAULT_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
