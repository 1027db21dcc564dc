use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::modules::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Answers after `delay`, long enough for cancellation tests to win the race.
pub struct SlowTransport {
    pub delay: Duration,
}

#[async_trait]
impl HttpTransport for SlowTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tokio::time::sleep(self.delay).await;
        Ok(HttpResponse::json(200, &json!({ "success": true, "slides": [] })))
    }
}

/// Fails every request as if the host were unreachable.
pub struct OfflineTransport;

#[async_trait]
impl HttpTransport for OfflineTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Connect("connection refused".to_string()))
    }
}
