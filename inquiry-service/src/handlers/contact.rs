use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{dispatch, InquiryError};
use crate::dtos::{ContactInquiryRequest, InquiryAccepted};
use crate::models::InquiryKind;
use crate::startup::AppState;
use crate::templates;

#[tracing::instrument(skip(state, payload))]
pub async fn contact_inquiry(
    State(state): State<AppState>,
    payload: Result<Json<ContactInquiryRequest>, JsonRejection>,
) -> Result<Json<InquiryAccepted>, InquiryError> {
    let kind = InquiryKind::Contact;
    let Json(request) = payload.map_err(|rejection| InquiryError::malformed(kind, rejection))?;

    let inquiry = request
        .into_inquiry()
        .map_err(|missing| InquiryError::MissingFields { kind, missing })?;

    let body_html = templates::render_contact(&inquiry)
        .map_err(|source| InquiryError::Render { kind, source })?;
    dispatch(&state, kind, inquiry.subject(), body_html).await
}
