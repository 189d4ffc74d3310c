//! Survey List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store per
//! list view; other components only feed it events through callbacks.

use reactive_stores::Store;

use crate::models::Survey;
use crate::reconcile::{self, Followup, ListEvent};

/// What the list view should render
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListPhase {
    #[default]
    Loading,
    Failed(String),
    Ready,
}

/// Client-side cache of all surveys plus its load phase
#[derive(Clone, Debug, Default, Store)]
pub struct SurveyListState {
    /// Newest first
    pub surveys: Vec<Survey>,
    pub phase: ListPhase,
}

/// Type alias for the store
pub type SurveyStore = Store<SurveyListState>;

impl SurveyListState {
    /// Apply one event. Runs to completion inside a single store update, so
    /// events never interleave.
    pub fn apply(&mut self, event: ListEvent) -> Option<Followup> {
        match event {
            ListEvent::Refresh => {
                self.phase = ListPhase::Loading;
                Some(Followup::Refetch)
            }
            ListEvent::Fetched(Ok(fetched)) => {
                reconcile::replace_all(&mut self.surveys, fetched);
                self.phase = ListPhase::Ready;
                None
            }
            ListEvent::Fetched(Err(message)) => {
                // never show stale rows under an error
                self.surveys.clear();
                self.phase = ListPhase::Failed(message);
                None
            }
            ListEvent::Created(survey) => {
                reconcile::merge_created(&mut self.surveys, survey);
                None
            }
            ListEvent::Updated(survey) => {
                reconcile::apply_update(&mut self.surveys, survey);
                None
            }
            // Soft delete: the row stays with status `deleted`, so ask the
            // backend instead of filtering locally.
            ListEvent::Deleted(_) => {
                self.phase = ListPhase::Loading;
                Some(Followup::Refetch)
            }
        }
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<u32> {
        self.surveys.iter().map(|s| s.id).collect()
    }
}
