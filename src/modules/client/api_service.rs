use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::modules::client::error::ApiError;
use crate::modules::transport::{
    HttpRequest, HttpResponse, HttpTransport, Method, MultipartForm, ReqwestTransport,
    RequestBody, TransportError,
};
use crate::shared::config::ClientConfig;
use crate::shared::session::TokenProvider;

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";

/// Typed façade over the site backend.
///
/// Cloning is cheap; clones share the transport and the session. Each call is
/// an independent request: nothing is cached, deduplicated or retried.
#[derive(Clone)]
pub struct ApiService {
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn TokenProvider>,
    cancellation: Option<CancellationToken>,
}

impl std::fmt::Debug for ApiService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiService")
            .field("authenticated", &self.session.current_token().is_some())
            .field("scoped", &self.cancellation.is_some())
            .finish()
    }
}

impl ApiService {
    /// Production wiring: reqwest transport against `config.base_url`.
    pub fn new(config: &ClientConfig, session: Arc<dyn TokenProvider>) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport), session))
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>, session: Arc<dyn TokenProvider>) -> Self {
        Self {
            transport,
            session,
            cancellation: None,
        }
    }

    /// Handle whose calls fail with `ApiError::Cancelled` once `token` is cancelled.
    /// Tie the token to the lifetime of whatever issued the calls.
    pub fn scoped(&self, token: CancellationToken) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            session: Arc::clone(&self.session),
            cancellation: Some(token),
        }
    }

    pub fn session(&self) -> &Arc<dyn TokenProvider> {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.current_token().is_some()
    }

    // ──────────────────────────────────────────────────────────
    // Request primitives
    // ──────────────────────────────────────────────────────────

    /// JSON request. The body is parsed as JSON whatever the status (`{}` when
    /// it is not JSON); 2xx returns it decoded as `T`, anything else becomes
    /// `ApiError::Http`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let value = self.request_with_query(method, endpoint, Vec::new(), body).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn request_with_query(
        &self,
        method: Method,
        endpoint: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut request = HttpRequest::new(method, endpoint);
        request.query = query;
        request.set_header("Content-Type", JSON_CONTENT_TYPE);
        request.body = match body {
            Some(value) => RequestBody::Json(value),
            None => RequestBody::Empty,
        };
        self.attach_authorization(&mut request);

        let response = self.dispatch(request).await?;
        into_json_result(response)
    }

    pub(crate) async fn get(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.request_with_query(Method::Get, endpoint, Vec::new(), None)
            .await
    }

    pub(crate) async fn send_json<P: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        payload: &P,
    ) -> Result<Value, ApiError> {
        let body = to_json_body(payload)?;
        self.request_with_query(method, endpoint, Vec::new(), Some(body))
            .await
    }

    pub(crate) async fn delete(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.request_with_query(Method::Delete, endpoint, Vec::new(), None)
            .await
    }

    /// Multipart request. Only the Authorization header is attached; the
    /// transport picks the multipart content type and boundary.
    pub async fn upload(
        &self,
        method: Method,
        endpoint: &str,
        form: MultipartForm,
    ) -> Result<Value, ApiError> {
        let mut request = HttpRequest::new(method, endpoint);
        request.body = RequestBody::Multipart(form);
        self.attach_authorization(&mut request);

        let response = self.dispatch(request).await?;
        into_json_result(response)
    }

    /// Raw download for non-JSON payloads (CSV exports). Errors are still
    /// normalized from a JSON body when the backend sends one.
    pub async fn download(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
    ) -> Result<Vec<u8>, ApiError> {
        let mut request = HttpRequest::new(Method::Get, endpoint);
        request.query = query;
        self.attach_authorization(&mut request);

        let response = self.dispatch(request).await?;
        if response.is_success() {
            Ok(response.body)
        } else {
            let status = response.status;
            Err(ApiError::from_response(status, parse_body(&response.body)))
        }
    }

    fn attach_authorization(&self, request: &mut HttpRequest) {
        let token = self
            .session
            .current_token()
            .or_else(|| self.session.refresh().filter(|t| !t.trim().is_empty()));
        if let Some(token) = token {
            request.set_header("Authorization", format!("Bearer {}", token));
        }
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, path = %path, "Sending request");

        let outcome = match &self.cancellation {
            Some(token) => {
                if token.is_cancelled() {
                    debug!(%method, path = %path, "Request cancelled before dispatch");
                    return Err(ApiError::Cancelled);
                }
                tokio::select! {
                    biased;

                    _ = token.cancelled() => {
                        debug!(%method, path = %path, "Request cancelled");
                        return Err(ApiError::Cancelled);
                    }
                    result = self.transport.send(request) => result,
                }
            }
            None => self.transport.send(request).await,
        };

        match outcome {
            Ok(response) => {
                if response.is_success() {
                    debug!(%method, path = %path, status = response.status, "Request succeeded");
                } else {
                    warn!(%method, path = %path, status = response.status, "Request failed");
                }
                Ok(response)
            }
            Err(e) => {
                error!(%method, path = %path, "Connectivity failure: {}", e);
                Err(ApiError::Network)
            }
        }
    }
}

pub(crate) fn to_json_body<P: Serialize>(payload: &P) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

fn parse_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

fn into_json_result(response: HttpResponse) -> Result<Value, ApiError> {
    let body = parse_body(&response.body);
    if response.is_success() {
        Ok(body)
    } else {
        Err(ApiError::from_response(response.status, body))
    }
}

const SEGMENT_BASE: &str = "http://localhost/";

/// Path segment for ids coming from callers; keeps `/` and `?` out of the route.
pub(crate) fn segment(id: &str) -> String {
    let Ok(mut url) = Url::parse(SEGMENT_BASE) else {
        return id.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(id);
    }
    url.path().trim_start_matches('/').to_string()
}
