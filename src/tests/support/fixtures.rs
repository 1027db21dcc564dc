use std::sync::Arc;

use crate::modules::client::ApiService;
use crate::modules::transport::HttpTransport;
use crate::shared::session::{InMemorySession, TokenProvider};
use crate::shared::upload::UploadFile;

pub fn service_with(transport: Arc<dyn HttpTransport>, token: Option<&str>) -> ApiService {
    let session: Arc<dyn TokenProvider> = match token {
        Some(token) => Arc::new(InMemorySession::with_token(token)),
        None => Arc::new(InMemorySession::new()),
    };
    ApiService::with_transport(transport, session)
}

pub fn png_file() -> UploadFile {
    UploadFile::new("logo.png", "image/png", vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3])
}
