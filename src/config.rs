//! Runtime configuration
//!
//! Native builds read the environment (after `dotenvy` has loaded `.env`).
//! The browser build bakes `API_BASE_URL` / `SESSION_TRUST` in at compile
//! time and otherwise falls back to the page origin.

use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_SESSION_VERIFY_PATH: &str = "/api/login";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// How the navigation shell decides that a stored session is still good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionTrust {
    /// A stored token plus username is enough.
    #[default]
    Presence,
    /// The stored token must also match the one the backend reports.
    Revalidate,
}

impl FromStr for SessionTrust {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "presence" => Ok(SessionTrust::Presence),
            "revalidate" => Ok(SessionTrust::Revalidate),
            _ => Err(ConfigError::InvalidValue {
                key: "SESSION_TRUST",
                value: s.to_string(),
            }),
        }
    }
}

/// Settings the UI needs, provided to components through context.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub session_trust: SessionTrust,
    pub session_verify_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: DEFAULT_API_URL.to_string(),
            session_trust: SessionTrust::default(),
            session_verify_path: DEFAULT_SESSION_VERIFY_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ClientConfig::default();
        let session_trust = match lookup("SESSION_TRUST") {
            Some(raw) => raw.parse()?,
            None => defaults.session_trust,
        };

        Ok(ClientConfig {
            api_url: lookup("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            session_trust,
            session_verify_path: lookup("SESSION_VERIFY_PATH")
                .unwrap_or(defaults.session_verify_path),
        })
    }

    /// Load the configuration for the running target, falling back to
    /// defaults on bad values.
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        let result = Self::from_lookup(|key| match key {
            "API_URL" => option_env!("API_BASE_URL")
                .map(str::to_string)
                .or_else(page_origin),
            "SESSION_TRUST" => option_env!("SESSION_TRUST").map(str::to_string),
            "SESSION_VERIFY_PATH" => option_env!("SESSION_VERIFY_PATH").map(str::to_string),
            _ => None,
        });

        #[cfg(not(target_arch = "wasm32"))]
        let result = Self::from_lookup(|key| std::env::var(key).ok());

        result.unwrap_or_else(|e| {
            tracing::warn!("{}; using default client configuration", e);
            ClientConfig::default()
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

/// Settings for the `--server` mode (static bundle + API proxy).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub static_dir: std::path::PathBuf,
    /// Audience for Cloud Run identity tokens; unset outside that platform.
    pub identity_audience: Option<String>,
    pub metadata_url: String,
}

#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_METADATA_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/identity";

#[cfg(not(target_arch = "wasm32"))]
impl ServerConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw.clone(),
            })?,
            None => 3000,
        };

        Ok(ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            backend_url: lookup("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| "dist".to_string())
                .into(),
            identity_audience: lookup("IDENTITY_TOKEN_AUDIENCE").filter(|a| !a.trim().is_empty()),
            metadata_url: lookup("METADATA_URL").unwrap_or_else(|| DEFAULT_METADATA_URL.to_string()),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.session_trust, SessionTrust::Presence);
    }

    #[test]
    fn test_client_config_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("API_URL", "https://backend.example.com/"),
            ("SESSION_TRUST", "Revalidate"),
            ("SESSION_VERIFY_PATH", "/api/auth/session"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://backend.example.com");
        assert_eq!(config.session_trust, SessionTrust::Revalidate);
        assert_eq!(config.session_verify_path, "/api/auth/session");
    }

    #[test]
    fn test_unknown_session_trust_is_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[("SESSION_TRUST", "sometimes")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { key: "SESSION_TRUST", value: "sometimes".to_string() }
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.backend_url, DEFAULT_API_URL);
        assert_eq!(config.static_dir, std::path::PathBuf::from("dist"));
        assert!(config.identity_audience.is_none());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_server_config_bad_port() {
        let result = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { key: "PORT", .. })));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_server_config_blank_audience_is_ignored() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("IDENTITY_TOKEN_AUDIENCE", "  "),
            ("BACKEND_URL", "https://api.example.com/"),
        ]))
        .unwrap();
        assert!(config.identity_audience.is_none());
        assert_eq!(config.backend_url, "https://api.example.com");
    }
}
