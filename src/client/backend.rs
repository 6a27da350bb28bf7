use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::domain::decode::{decode, DecodeError};
use crate::metrics::Metrics;
use super::types::*;

// ============================================================================
// Backend Client - thin REST wrappers over the remote backend
// ============================================================================
//
// Uniform POST wrappers, one per delegated capability. Deliberately no
// retry, backoff, or idempotency handling: callers see the first failure.
// Responses are decoded through the same fail-fast boundary as the rest of
// the domain model.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status} for {endpoint}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
    metrics: Option<Arc<Metrics>>,
}

impl BackendClient {
    pub fn new(config: &AppConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: config.backend_base_url.clone(),
            api_token: config.backend_api_token.clone(),
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn record(&self, endpoint: &str, outcome: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.record_backend_request(endpoint, outcome);
        }
    }

    /// Uniform POST wrapper shared by every delegated capability.
    async fn post<Req, Resp>(
        &self,
        endpoint: &'static str,
        entity: &'static str,
        request: &Req,
    ) -> Result<Resp, BackendError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(endpoint = endpoint, "Calling backend");

        let mut builder = self.http.post(&url).json(request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                self.record(endpoint, "transport_error");
                return Err(BackendError::Transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            self.record(endpoint, "http_error");
            tracing::warn!(endpoint = endpoint, status = %status, "Backend returned error status");
            return Err(BackendError::Status { endpoint, status });
        }

        let value: serde_json::Value = response.json().await.map_err(|e| {
            self.record(endpoint, "transport_error");
            BackendError::Transport(e)
        })?;

        match decode::<Resp>(entity, value) {
            Ok(decoded) => {
                self.record(endpoint, "ok");
                Ok(decoded)
            }
            Err(e) => {
                self.record(endpoint, "decode_error");
                Err(BackendError::Decode(e))
            }
        }
    }

    /// Authenticate against the backend. Session handling stays remote;
    /// this only forwards credentials and returns the issued token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, BackendError> {
        self.post("/api/auth/login", "login response", request).await
    }

    /// Open a payment checkout session for an invoice.
    pub async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSessionResponse, BackendError> {
        self.post("/api/payments/checkout", "checkout session", request).await
    }

    /// Ask the backend to deliver a notification.
    pub async fn send_notification(
        &self,
        request: &NotificationRequest,
    ) -> Result<NotificationResponse, BackendError> {
        self.post("/api/notifications", "notification receipt", request).await
    }

    /// Request a truck load plan. The packing computation itself runs on
    /// the backend.
    pub async fn request_load_plan(
        &self,
        request: &LoadPlanRequest,
    ) -> Result<LoadPlanResponse, BackendError> {
        self.post("/api/load-plans", "load plan", request).await
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
