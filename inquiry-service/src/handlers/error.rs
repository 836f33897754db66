use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dtos::InquiryErrorResponse;
use crate::models::InquiryKind;
use crate::services::{record_inquiry, ProviderError};

/// Everything that can stop a submission from becoming an email.
#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("{kind} inquiry missing required fields: {}", .missing.join(", "))]
    MissingFields {
        kind: InquiryKind,
        missing: Vec<&'static str>,
    },

    #[error("{kind} inquiry body rejected: {reason}")]
    MalformedBody { kind: InquiryKind, reason: String },

    #[error("{kind} inquiry email could not be rendered: {source}")]
    Render {
        kind: InquiryKind,
        #[source]
        source: askama::Error,
    },

    #[error("{kind} inquiry email failed: {source}")]
    Dispatch {
        kind: InquiryKind,
        #[source]
        source: ProviderError,
    },
}

impl InquiryError {
    pub fn malformed(kind: InquiryKind, rejection: JsonRejection) -> Self {
        InquiryError::MalformedBody {
            kind,
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for InquiryError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            InquiryError::MissingFields { kind, missing } => {
                record_inquiry(kind, "rejected");
                (
                    StatusCode::BAD_REQUEST,
                    InquiryErrorResponse {
                        message: kind.required_message().to_string(),
                        missing: missing.into_iter().map(str::to_string).collect(),
                        error: None,
                    },
                )
            }
            InquiryError::MalformedBody { kind, reason } => {
                record_inquiry(kind, "rejected");
                (
                    StatusCode::BAD_REQUEST,
                    InquiryErrorResponse {
                        message: kind.required_message().to_string(),
                        missing: Vec::new(),
                        error: Some(reason),
                    },
                )
            }
            InquiryError::Render { kind, source } => {
                record_inquiry(kind, "failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    InquiryErrorResponse {
                        message: kind.failure_message().to_string(),
                        missing: Vec::new(),
                        error: Some(source.to_string()),
                    },
                )
            }
            InquiryError::Dispatch { kind, source } => {
                record_inquiry(kind, "failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    InquiryErrorResponse {
                        message: kind.failure_message().to_string(),
                        missing: Vec::new(),
                        error: Some(source.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
