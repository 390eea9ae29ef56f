use axum::{extract::State, Json};
use serde::Serialize;

use crate::contact::submission::{ContactForm, FormPhase, SubmitError};
use crate::contact::validation::ContactDraft;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub phase: FormPhase,
    /// How long the client should keep the confirmation visible before resetting.
    pub display_for_ms: u64,
}

impl From<SubmitError> for AppError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::Invalid(fields) => AppError::InvalidForm(fields),
            SubmitError::Delivery(e) => AppError::Internal(e),
        }
    }
}

/// POST /api/v1/contact
///
/// Validates the form, then runs the simulated send. Nothing is transmitted.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(draft): Json<ContactDraft>,
) -> Result<Json<ContactResponse>, AppError> {
    let mut form = ContactForm::new(draft, state.contact_display);
    form.submit(state.transport.as_ref()).await?;

    Ok(Json(ContactResponse {
        status: "sent",
        phase: form.phase(),
        display_for_ms: form.display_for().as_millis() as u64,
    }))
}
