//! Survey Actions
//!
//! The request flow behind each user action. Flows return `Result<T, String>`
//! where the error is the message shown inline next to the control.

use tracing::{debug, warn};

use crate::api::SurveyApi;
use crate::models::{HealthStatus, NewSurvey, Survey};
use crate::reconcile::{Followup, ListEvent};

pub const QUESTIONS_REQUIRED: &str = "Please enter some questions.";
pub const CREATE_FAILED: &str =
    "Failed to create survey. Ensure backend is running and Google Auth is complete.";
pub const EMAIL_REQUIRED: &str = "Please enter a recipient email.";
pub const APPROVE_FAILED: &str = "Failed to approve survey.";
pub const DELETE_FAILED: &str = "Failed to delete survey.";
pub const REFRESH_FAILED: &str = "Failed to refresh survey.";
pub const FETCH_FAILED: &str = "Failed to fetch surveys.";

// ========================
// Validation
// ========================

/// Local check run before any request is issued
pub fn prepare_survey(questions_text: &str, title: &str) -> Result<NewSurvey, String> {
    NewSurvey::from_form(questions_text, title).ok_or_else(|| QUESTIONS_REQUIRED.to_string())
}

/// Non-blank only; the address is not otherwise validated.
pub fn prepare_recipient(email: &str) -> Result<&str, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED.to_string());
    }
    Ok(email)
}

// ========================
// Requests
// ========================

pub async fn create_survey<A: SurveyApi + ?Sized>(api: &A, data: &NewSurvey) -> Result<Survey, String> {
    debug!(
        title = ?data.title(),
        questions = data.questions_text().lines().filter(|l| !l.trim().is_empty()).count(),
        "creating survey"
    );
    api.create_survey(data).await.map_err(|e| {
        warn!(error = %e, "create survey failed");
        e.user_message(CREATE_FAILED)
    })
}

pub async fn approve_survey<A: SurveyApi + ?Sized>(
    api: &A,
    id: u32,
    recipient_email: &str,
) -> Result<Survey, String> {
    api.approve_survey(id, recipient_email).await.map_err(|e| {
        warn!(id, error = %e, "approve survey failed");
        e.user_message(APPROVE_FAILED)
    })
}

pub async fn delete_survey<A: SurveyApi + ?Sized>(api: &A, id: u32) -> Result<(), String> {
    api.delete_survey(id).await.map_err(|e| {
        warn!(id, error = %e, "delete survey failed");
        e.user_message(DELETE_FAILED)
    })
}

pub async fn refresh_survey<A: SurveyApi + ?Sized>(api: &A, id: u32) -> Result<Survey, String> {
    api.get_survey_by_id(id).await.map_err(|e| {
        warn!(id, error = %e, "refresh survey failed");
        e.user_message(REFRESH_FAILED)
    })
}

/// Full list fetch. The list shows a fixed message on failure, never the server detail.
pub async fn fetch_surveys<A: SurveyApi + ?Sized>(api: &A) -> Result<Vec<Survey>, String> {
    api.get_surveys().await.map_err(|e| {
        warn!(error = %e, "fetch surveys failed");
        FETCH_FAILED.to_string()
    })
}

/// Carry out a follow-up returned by the store and produce the event to apply next.
pub async fn run_followup<A: SurveyApi + ?Sized>(api: &A, followup: Followup) -> ListEvent {
    match followup {
        Followup::Refetch => {
            let fetched = fetch_surveys(api).await;
            debug!(ok = fetched.is_ok(), "refetch finished");
            ListEvent::Fetched(fetched)
        }
    }
}

pub async fn backend_health<A: SurveyApi + ?Sized>(api: &A) -> Result<HealthStatus, String> {
    api.health().await.map_err(|e| {
        debug!(error = %e, "health check failed");
        e.to_string()
    })
}
