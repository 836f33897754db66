pub mod email;

use async_trait::async_trait;
use thiserror::Error;

pub use email::{MockEmailProvider, SmtpProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not enabled: {0}")]
    NotEnabled(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Send error: {0}")]
    SendFailed(String),

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),
}

#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub provider_id: Option<String>,
}

impl ProviderResponse {
    pub fn success(provider_id: Option<String>) -> Self {
        Self { provider_id }
    }
}

/// One outbound HTML email.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub from_name: String,
    pub from_email: String,
    pub to: String,
    pub subject: String,
    pub body_html: String,
}

/// The mail dispatcher. Implementations are shared across requests and
/// must tolerate overlapping sends.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &EmailMessage) -> Result<ProviderResponse, ProviderError>;
    async fn health_check(&self) -> Result<(), ProviderError>;
    /// Whether accepted messages actually leave the process.
    fn is_enabled(&self) -> bool;
}
