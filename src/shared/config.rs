use std::env;
use std::time::Duration;

const DEFAULT_APP_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_API_HOST: &str = "localhost";
const DEFAULT_API_PORT: &str = "3001";
const DEFAULT_USER_AGENT: &str = concat!("site-api-client/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute base URL, always ending in `/api` unless overridden, never with a trailing slash.
    pub base_url: String,
    /// `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    /// Explicit wiring, no env reads.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load client configuration from environment variables.
    ///
    /// `.env.{RUST_ENV}` is tried first, then `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = resolve_base_url(&lookup);

        let timeout = match lookup("API_TIMEOUT_SECS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or(ConfigError::InvalidValue {
                        key: "API_TIMEOUT_SECS",
                        value: raw.clone(),
                    })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let user_agent = lookup("API_USER_AGENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            base_url,
            timeout,
            user_agent,
        })
    }
}

/// Base URL resolution order: explicit override, production host/port, dev origin proxy.
fn resolve_base_url<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("API_BASE_URL").filter(|v| !v.trim().is_empty()) {
        return normalize_base_url(&url);
    }

    let is_production = lookup("RUST_ENV").as_deref() == Some("production");
    if is_production {
        let host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string());
        let port = lookup("API_PORT").unwrap_or_else(|| DEFAULT_API_PORT.to_string());
        return format!("http://{}:{}/api", host.trim(), port.trim());
    }

    let origin = lookup("APP_ORIGIN")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_APP_ORIGIN.to_string());
    format!("{}/api", normalize_base_url(&origin))
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn lookup_from(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn override_wins_and_trailing_slash_is_trimmed() {
        let config = ClientConfig::from_lookup(lookup_from(hashmap! {
            "API_BASE_URL" => "https://api.example.com/api/",
            "RUST_ENV" => "production",
        }))
        .unwrap();

        assert_eq!(config.base_url, "https://api.example.com/api");
    }

    #[test]
    fn production_uses_host_and_port() {
        let config = ClientConfig::from_lookup(lookup_from(hashmap! {
            "RUST_ENV" => "production",
            "API_HOST" => "10.0.0.5",
            "API_PORT" => "8080",
        }))
        .unwrap();

        assert_eq!(config.base_url, "http://10.0.0.5:8080/api");
    }

    #[test]
    fn development_goes_through_the_origin_proxy() {
        let config = ClientConfig::from_lookup(lookup_from(HashMap::new())).unwrap();

        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = ClientConfig::from_lookup(lookup_from(hashmap! {
            "API_BASE_URL" => "   ",
            "APP_ORIGIN" => "http://127.0.0.1:5173/",
        }))
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:5173/api");
    }

    #[test]
    fn timeout_is_parsed_in_seconds() {
        let config = ClientConfig::from_lookup(lookup_from(hashmap! {
            "API_TIMEOUT_SECS" => "15",
        }))
        .unwrap();

        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let result = ClientConfig::from_lookup(lookup_from(hashmap! {
            "API_TIMEOUT_SECS" => "soon",
        }));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "API_TIMEOUT_SECS",
                ..
            })
        ));
    }

    #[test]
    fn new_does_not_read_env() {
        let config = ClientConfig::new("http://backend/api/");
        assert_eq!(config.base_url, "http://backend/api");
        assert!(config.user_agent.starts_with("site-api-client/"));
    }
}
