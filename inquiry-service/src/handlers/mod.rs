//! HTTP handlers for inquiry-service.

pub mod admission;
pub mod contact;
pub mod error;
pub mod health;

pub use admission::admission_inquiry;
pub use contact::contact_inquiry;
pub use error::InquiryError;
pub use health::{health_check, metrics_endpoint, root};

use axum::Json;

use crate::dtos::InquiryAccepted;
use crate::models::InquiryKind;
use crate::services::{record_inquiry, EmailMessage};
use crate::startup::AppState;

/// Hand one rendered inquiry to the dispatcher. Exactly one send attempt is
/// made; its failure is returned to the caller as is.
pub(crate) async fn dispatch(
    state: &AppState,
    kind: InquiryKind,
    subject: String,
    body_html: String,
) -> Result<Json<InquiryAccepted>, InquiryError> {
    let email = EmailMessage {
        from_name: state.config.mail.from_name.clone(),
        from_email: state.config.mail.user.clone(),
        to: state.config.mail.admin_email.clone(),
        subject,
        body_html,
    };

    match state.email_provider.send(&email).await {
        Ok(response) => {
            record_inquiry(kind, "sent");
            tracing::info!(
                %kind,
                provider_id = ?response.provider_id,
                subject = %email.subject,
                "Inquiry email sent"
            );
            Ok(Json(InquiryAccepted {
                message: kind.success_message().to_string(),
            }))
        }
        Err(source) => {
            tracing::error!(%kind, error = %source, "Failed to send inquiry email");
            Err(InquiryError::Dispatch { kind, source })
        }
    }
}
