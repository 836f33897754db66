//! Origin allow-list enforcement.
//!
//! `CorsLayer` alone only withholds the CORS response headers, which leaves
//! the handler running for any origin. [`origin_guard_middleware`] refuses a
//! request outright when it carries an `Origin` that is not listed, while
//! requests without `Origin` (curl, server-to-server) always pass.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const CORS_BLOCKED_MESSAGE: &str = "CORS blocked: Origin not allowed";

#[derive(Debug, Clone)]
pub struct OriginAllowList {
    origins: Arc<Vec<HeaderValue>>,
}

impl OriginAllowList {
    /// Entries that are not valid header values are logged and skipped.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origins = origins
            .into_iter()
            .filter_map(|origin| {
                let origin = origin.as_ref().trim();
                match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::error!(origin, error = %e, "Invalid CORS origin, skipping");
                        None
                    }
                }
            })
            .collect();

        Self {
            origins: Arc::new(origins),
        }
    }

    pub fn origins(&self) -> &[HeaderValue] {
        &self.origins
    }

    /// `None` means the request did not come from a browser page.
    pub fn permits(&self, origin: Option<&HeaderValue>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.origins.iter().any(|allowed| allowed == origin),
        }
    }

    /// CORS response headers for listed origins, including preflight answers.
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.origins.iter().cloned()))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true)
    }
}

pub async fn origin_guard_middleware(
    State(allow_list): State<OriginAllowList>,
    req: Request,
    next: Next,
) -> Response {
    if allow_list.permits(req.headers().get(header::ORIGIN)) {
        return next.run(req).await;
    }

    tracing::warn!(
        origin = ?req.headers().get(header::ORIGIN),
        method = %req.method(),
        uri = %req.uri(),
        "Rejected request from disallowed origin"
    );

    (
        StatusCode::FORBIDDEN,
        Json(json!({ "message": CORS_BLOCKED_MESSAGE })),
    )
        .into_response()
}
