//! Application startup and lifecycle management.
//!
//! Builds the dispatcher from configuration, wires the HTTP router with the
//! shared middleware stack and owns the listener until shutdown.

use crate::config::InquiryConfig;
use crate::handlers::{admission_inquiry, contact_inquiry, health_check, metrics_endpoint, root};
use crate::services::{EmailProvider, MockEmailProvider, SmtpProvider};
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, origin_guard_middleware, request_id_middleware,
    security_headers_middleware, OriginAllowList, REQUEST_ID_HEADER,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: InquiryConfig,
    pub email_provider: Arc<dyn EmailProvider>,
    pub allowed_origins: OriginAllowList,
}

impl AppState {
    pub fn new(config: InquiryConfig, email_provider: Arc<dyn EmailProvider>) -> Self {
        let allowed_origins = OriginAllowList::new(&config.cors.allowed_origins);
        Self {
            config,
            email_provider,
            allowed_origins,
        }
    }
}

/// Pick the dispatcher for this configuration.
pub fn build_email_provider(config: &InquiryConfig) -> Result<Arc<dyn EmailProvider>, AppError> {
    if !config.mail.enabled {
        tracing::info!("Mail delivery disabled, using mock email provider");
        return Ok(Arc::new(MockEmailProvider::new()));
    }

    let provider = SmtpProvider::new(&config.mail).map_err(|e| {
        tracing::error!("Failed to initialize SMTP provider: {}", e);
        AppError::EmailError(e.to_string())
    })?;
    tracing::info!(host = %config.mail.host, port = config.mail.port, "SMTP email provider initialized");

    Ok(Arc::new(provider))
}

/// Check the transport once in the background; the outcome is only logged.
fn spawn_transport_check(provider: Arc<dyn EmailProvider>) {
    tokio::spawn(async move {
        match provider.health_check().await {
            Ok(()) => tracing::info!("Mail transport ready"),
            Err(e) => tracing::error!(error = %e, "Mail transport verification failed"),
        }
    });
}

pub fn build_router(state: AppState) -> Router {
    let allowed_origins = state.allowed_origins.clone();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/contact-inquiry", post(contact_inquiry))
        .route("/api/admission-inquiry", post(admission_inquiry))
        .with_state(state)
        .layer(allowed_origins.cors_layer())
        .layer(from_fn_with_state(allowed_origins, origin_guard_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: InquiryConfig) -> Result<Self, AppError> {
        let provider = build_email_provider(&config)?;
        Self::build_with_provider(config, provider).await
    }

    /// Build the application around an existing dispatcher.
    pub async fn build_with_provider(
        config: InquiryConfig,
        email_provider: Arc<dyn EmailProvider>,
    ) -> Result<Self, AppError> {
        spawn_transport_check(Arc::clone(&email_provider));

        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Inquiry service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, email_provider),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CorsConfig, MailConfig};
    use secrecy::Secret;
    use service_core::config::Config as CoreConfig;

    fn config(enabled: bool) -> InquiryConfig {
        InquiryConfig {
            common: CoreConfig { port: 0 },
            mail: MailConfig {
                host: "smtp.gmail.com".to_string(),
                port: 587,
                user: "school@gmail.com".to_string(),
                password: Secret::new("app-password".to_string()),
                from_name: "Young Achievers Website".to_string(),
                admin_email: "admin@school.example".to_string(),
                enabled,
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:5173".to_string()],
            },
        }
    }

    #[tokio::test]
    async fn disabled_mail_selects_non_delivering_provider() {
        let provider = build_email_provider(&config(false)).unwrap();
        assert!(!provider.is_enabled());
    }

    #[tokio::test]
    async fn enabled_mail_selects_smtp_provider() {
        let provider = build_email_provider(&config(true)).unwrap();
        assert!(provider.is_enabled());
    }
}
