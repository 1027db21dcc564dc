use serde_json::Value;

use crate::shared::session::SessionError;

pub const DEFAULT_ERROR_MESSAGE: &str = "Erro na requisição";
pub const NETWORK_ERROR_MESSAGE: &str = "Erro de conexão. Verifique sua conexão com a internet.";

/// Errors surfaced to callers of `ApiService`.
///
/// `Http` carries the backend's message verbatim; callers show it to the admin
/// and handle 401/403 themselves (no redirect happens here).
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// Parsed response body, `{}` when it was not JSON.
        data: Value,
    },

    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,

    #[error("Requisição cancelada")]
    Cancelled,

    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),

    #[error("Resposta sem o campo esperado: {0}")]
    MissingField(&'static str),

    #[error("Falha ao acessar a sessão: {0}")]
    Session(#[from] SessionError),
}

impl ApiError {
    /// Build the error for a non-2xx response:
    /// message is `body.error`, then `body.message`, then a generic text.
    pub(crate) fn from_response(status: u16, data: Value) -> Self {
        let message = message_field(&data, "error")
            .or_else(|| message_field(&data, "message"))
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

        ApiError::Http {
            status,
            message,
            data,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's response body (`error.response.data` in the dashboard).
    pub fn response_data(&self) -> Option<&Value> {
        match self {
            ApiError::Http { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network)
    }
}

fn message_field(data: &Value, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_error_field() {
        let err = ApiError::from_response(
            400,
            json!({ "error": "categoria possui posts associados", "message": "ignored" }),
        );

        assert_eq!(err.to_string(), "categoria possui posts associados");
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.response_data().unwrap()["error"],
            "categoria possui posts associados"
        );
    }

    #[test]
    fn falls_back_to_message_field() {
        let err = ApiError::from_response(413, json!({ "message": "arquivo muito grande" }));
        assert_eq!(err.to_string(), "arquivo muito grande");
    }

    #[test]
    fn null_error_falls_through_to_message() {
        let err = ApiError::from_response(422, json!({ "error": null, "message": "inválido" }));
        assert_eq!(err.to_string(), "inválido");
    }

    #[test]
    fn falls_back_to_generic_message() {
        let err = ApiError::from_response(500, json!({}));
        assert_eq!(err.to_string(), DEFAULT_ERROR_MESSAGE);
        assert_eq!(err.response_data(), Some(&json!({})));
    }

    #[test]
    fn auth_errors_are_flagged() {
        assert!(ApiError::from_response(401, json!({})).is_auth_error());
        assert!(ApiError::from_response(403, json!({})).is_auth_error());
        assert!(!ApiError::from_response(404, json!({})).is_auth_error());
        assert!(!ApiError::Network.is_auth_error());
    }

    #[test]
    fn network_error_has_fixed_message_and_no_status() {
        assert_eq!(ApiError::Network.to_string(), NETWORK_ERROR_MESSAGE);
        assert_eq!(ApiError::Network.status(), None);
        assert!(ApiError::Network.response_data().is_none());
    }
}
