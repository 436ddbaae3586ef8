//! Donation form submission. Same fire-and-forget shape as the contact
//! form; card processing happens elsewhere, this records the pledge.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use noor_core::{DocId, Donation, DonationFrequency, collections};

use super::contact::{SubmissionAccepted, is_valid_email};
use crate::db::detach_write;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Donation form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationForm {
    pub donor_name: String,
    pub email: String,
    pub amount: Decimal,
    #[serde(default)]
    pub frequency: DonationFrequency,
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /donate - submit a donation pledge.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<DonationForm>,
) -> Result<(StatusCode, Json<SubmissionAccepted>)> {
    let email = form.email.trim().to_lowercase();

    if !is_valid_email(&email) {
        return Err(AppError::BadRequest(
            "Please enter a valid email address.".to_string(),
        ));
    }
    if form.donor_name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required.".to_string()));
    }
    if form.amount <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Amount must be greater than zero.".to_string(),
        ));
    }

    let donation = Donation {
        donor_name: form.donor_name.trim().to_string(),
        email,
        amount: form.amount,
        frequency: form.frequency,
        message: form
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty()),
    };
    let data =
        serde_json::to_value(&donation).map_err(|e| AppError::Internal(e.to_string()))?;

    let id = DocId::generate();
    let accepted = SubmissionAccepted {
        id: id.to_string(),
    };

    detach_write(
        state.pool().clone(),
        state.relay().clone(),
        collections::DONATIONS,
        id,
        data,
    );

    Ok((StatusCode::ACCEPTED, Json(accepted)))
}
