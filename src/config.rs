use std::env;

// ============================================================================
// Application Configuration - environment-driven
// ============================================================================
//
// Everything has a sensible local default; only malformed values are
// rejected. RUST_LOG is consumed directly by tracing-subscriber's
// EnvFilter and is not part of this struct.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {variable}: {message}")]
    InvalidValue {
        variable: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote backend (auth, payments, notifications,
    /// load planning).
    pub backend_base_url: String,
    pub backend_api_token: Option<String>,
    pub metrics_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            env::var("BACKEND_BASE_URL").ok(),
            env::var("BACKEND_API_TOKEN").ok(),
            env::var("METRICS_PORT").ok(),
        )
    }

    fn from_parts(
        base_url: Option<String>,
        api_token: Option<String>,
        metrics_port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut backend_base_url =
            base_url.unwrap_or_else(|| "http://127.0.0.1:8080".to_string());

        if !backend_base_url.starts_with("http://") && !backend_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                variable: "BACKEND_BASE_URL",
                message: "must start with http:// or https://".to_string(),
            });
        }
        while backend_base_url.ends_with('/') {
            backend_base_url.pop();
        }

        let metrics_port = metrics_port
            .unwrap_or_else(|| "9090".to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidValue {
                variable: "METRICS_PORT",
                message: e.to_string(),
            })?;

        Ok(Self {
            backend_base_url,
            backend_api_token: api_token,
            metrics_port,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
