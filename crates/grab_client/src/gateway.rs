use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use thiserror::Error;
use url::Url;

use crate::wire::{ErrorWire, ProgressWire, SubmitWire};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
/// Fallback when an error response carries no usable message.
pub const SERVER_ERROR_FALLBACK: &str = "Erro no servidor";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub poll_interval: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url"),
            poll_interval: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("invalid server base url: {0}")]
    BaseUrl(String),
    /// Application-level rejection; the message is what the user sees.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum PollError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed progress payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub filename: String,
}

#[async_trait]
pub trait Gateway: Send + Sync {
    async fn submit(&self, youtube_url: &str) -> Result<SubmissionReceipt, GatewayError>;
    async fn poll_progress(&self) -> Result<ProgressWire, PollError>;
}

pub struct ReqwestGateway {
    client: reqwest::Client,
    submit_url: Url,
    progress_url: Url,
}

impl ReqwestGateway {
    pub fn new(settings: &ClientSettings) -> Result<Self, GatewayError> {
        let progress_url = settings
            .base_url
            .join("progress")
            .map_err(|err| GatewayError::BaseUrl(err.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            submit_url: settings.base_url.clone(),
            progress_url,
        })
    }
}

#[async_trait]
impl Gateway for ReqwestGateway {
    async fn submit(&self, youtube_url: &str) -> Result<SubmissionReceipt, GatewayError> {
        let response = self
            .client
            .post(self.submit_url.clone())
            .header(ACCEPT, "application/json")
            .form(&[("youtube_url", youtube_url)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorWire>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
            return Err(GatewayError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<SubmitWire>()
            .await
            .map_err(map_transport_error)?;
        if !body.success {
            // Reachable when the server answers 2xx without committing to a
            // result; there is no filename to link, so the cycle fails.
            return Err(GatewayError::Server {
                status: status.as_u16(),
                message: body.error.unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string()),
            });
        }
        match body.filename {
            Some(filename) => Ok(SubmissionReceipt { filename }),
            None => Err(GatewayError::Server {
                status: status.as_u16(),
                message: SERVER_ERROR_FALLBACK.to_string(),
            }),
        }
    }

    async fn poll_progress(&self) -> Result<ProgressWire, PollError> {
        let response = self.client.get(self.progress_url.clone()).send().await?;
        let payload = response.text().await?;
        Ok(serde_json::from_str(&payload)?)
    }
}

fn map_transport_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}
