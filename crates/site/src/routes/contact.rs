//! Contact form submission.
//!
//! The create is fire-and-forget: the handler validates, hands the payload
//! to the store on a detached task, and answers immediately. A permission
//! rejection surfaces later on the relay, never in this response.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use noor_core::{ContactSubmission, DocId, collections};

use crate::db::detach_write;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Contact form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Response for an accepted submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAccepted {
    /// The id the record will have if the write lands, so a client can
    /// reconcile after a relayed error.
    pub id: String,
}

/// POST /contact - submit a contact message.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<SubmissionAccepted>)> {
    let email = form.email.trim().to_lowercase();

    if !is_valid_email(&email) {
        return Err(AppError::BadRequest(
            "Please enter a valid email address.".to_string(),
        ));
    }
    if form.full_name.trim().is_empty()
        || form.subject.trim().is_empty()
        || form.message.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "Name, subject and message are required.".to_string(),
        ));
    }

    let submission = ContactSubmission {
        full_name: form.full_name.trim().to_string(),
        email,
        subject: form.subject.trim().to_string(),
        message: form.message.trim().to_string(),
        is_read: false,
    };
    let data = serde_json::to_value(&submission)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let id = DocId::generate();
    let accepted = SubmissionAccepted {
        id: id.to_string(),
    };

    detach_write(
        state.pool().clone(),
        state.relay().clone(),
        collections::CONTACT_SUBMISSIONS,
        id,
        data,
    );

    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

/// Basic email validation.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@localhost"));
    }
}
