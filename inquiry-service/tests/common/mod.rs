#![allow(dead_code)]

use async_trait::async_trait;
use inquiry_service::config::{CorsConfig, InquiryConfig, MailConfig};
use inquiry_service::services::{EmailMessage, EmailProvider, ProviderError, ProviderResponse};
use inquiry_service::startup::Application;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub const ADMIN_EMAIL: &str = "admin@school.example";
pub const SENDER_EMAIL: &str = "website@school.example";
pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Dispatcher that keeps every accepted message for inspection.
#[derive(Default)]
pub struct RecordingMailer {
    failure: Option<String>,
    send_count: AtomicU64,
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    /// A mailer whose every send fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Number of send attempts, failed ones included.
    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }

    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for RecordingMailer {
    async fn send(&self, email: &EmailMessage) -> Result<ProviderResponse, ProviderError> {
        let attempt = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(reason) = &self.failure {
            return Err(ProviderError::SendFailed(reason.clone()));
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(ProviderResponse::success(Some(format!("recorded-{}", attempt))))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub mailer: Arc<RecordingMailer>,
    pub client: reqwest::Client,
}

pub fn test_config() -> InquiryConfig {
    InquiryConfig {
        // Use random port for testing (port 0)
        common: CoreConfig { port: 0 },
        mail: MailConfig {
            host: "smtp.test.local".to_string(),
            port: 587,
            user: SENDER_EMAIL.to_string(),
            password: Secret::new("test".to_string()),
            from_name: "Young Achievers Website".to_string(),
            admin_email: ADMIN_EMAIL.to_string(),
            enabled: false,
        },
        cors: CorsConfig {
            allowed_origins: vec![
                "https://youngachievers-2.onrender.com".to_string(),
                ALLOWED_ORIGIN.to_string(),
            ],
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(RecordingMailer::default()).await
    }

    /// App whose dispatcher rejects every message with `reason`.
    pub async fn spawn_failing(reason: &str) -> Self {
        Self::spawn_with(RecordingMailer::failing(reason)).await
    }

    async fn spawn_with(mailer: RecordingMailer) -> Self {
        let mailer = Arc::new(mailer);

        let app = Application::build_with_provider(test_config(), mailer.clone())
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let (address, client) = serve(app).await;

        TestApp {
            address,
            port,
            mailer,
            client,
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_json("/api/contact-inquiry", body).await
    }

    pub async fn post_admission(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_json("/api/admission-inquiry", body).await
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.mailer.sent_messages()
    }
}

/// Run `app` in the background and wait until it answers on `/`.
pub async fn serve(app: Application) -> (String, reqwest::Client) {
    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    // Wait for HTTP server to be ready by polling the liveness endpoint
    let client = reqwest::Client::new();
    for _ in 0..50 {
        if client.get(&address).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }

    (address, client)
}
