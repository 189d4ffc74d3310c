//! Survey Backend Bindings
//!
//! Frontend bindings to the survey REST API, organized as a trait so the
//! action flows can run against an in-memory backend in tests.

mod error;
mod http;

use async_trait::async_trait;

use crate::models::{HealthStatus, NewSurvey, Survey};

pub use error::{ApiError, ApiResult};
pub use http::HttpSurveyApi;

/// The survey backend's REST surface.
///
/// Thin request/response pass-throughs: no retry, no caching, and failures
/// come back unchanged as [`ApiError`]. Futures are `?Send` because the
/// browser's fetch futures are not.
#[async_trait(?Send)]
pub trait SurveyApi {
    /// `POST /surveys/`
    async fn create_survey(&self, data: &NewSurvey) -> ApiResult<Survey>;

    /// `GET /surveys/`, in whatever order the backend chooses
    async fn get_surveys(&self) -> ApiResult<Vec<Survey>>;

    /// `GET /surveys/{id}/`
    async fn get_survey_by_id(&self, id: u32) -> ApiResult<Survey>;

    /// `POST /surveys/{id}/approve`
    async fn approve_survey(&self, id: u32, recipient_email: &str) -> ApiResult<Survey>;

    /// `DELETE /surveys/{id}/`; any response body is ignored
    async fn delete_survey(&self, id: u32) -> ApiResult<()>;

    /// `GET /health`
    async fn health(&self) -> ApiResult<HealthStatus>;
}
