//! Frontend Models
//!
//! Data structures matching the survey backend's JSON.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status, assigned by the backend only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStatus {
    Draft,
    Approved,
    Deleted,
}

impl SurveyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SurveyStatus::Draft => "draft",
            SurveyStatus::Approved => "approved",
            SurveyStatus::Deleted => "deleted",
        }
    }

    /// Only drafts can be approved.
    pub fn can_approve(self) -> bool {
        self == SurveyStatus::Draft
    }

    /// `deleted` is terminal.
    pub fn can_delete(self) -> bool {
        self != SurveyStatus::Deleted
    }
}

impl fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Survey data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Survey {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    pub questions_text: String,
    pub status: SurveyStatus,
    #[serde(default)]
    pub form_url: Option<String>,
    #[serde(default)]
    pub recipient_email: Option<String>,
    #[serde(default)]
    pub google_form_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Survey {
    /// Heading text for the survey card
    pub fn display_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Untitled Survey")
    }

    /// Title used in the delete confirmation prompt
    pub fn confirm_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Untitled")
    }
}

/// Accepts RFC 3339 as well as the offset-less form SQLite hands back.
/// Anything else decodes as `None` rather than failing the whole survey.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Body of `POST /surveys/`.
///
/// Only built through [`NewSurvey::from_form`], so a request can never carry
/// blank questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSurvey {
    questions_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl NewSurvey {
    /// Questions are kept exactly as typed; the title is trimmed and dropped when empty.
    pub fn from_form(questions_text: &str, title: &str) -> Option<Self> {
        if questions_text.trim().is_empty() {
            return None;
        }
        let title = title.trim();
        Some(Self {
            questions_text: questions_text.to_string(),
            title: (!title.is_empty()).then(|| title.to_string()),
        })
    }

    pub fn questions_text(&self) -> &str {
        &self.questions_text
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Body of `POST /surveys/{id}/approve`
#[derive(Debug, Serialize)]
pub struct ApproveRequest<'a> {
    pub recipient_email: &'a str,
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
