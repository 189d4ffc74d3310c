//! List Reconciliation
//!
//! Pure helpers that keep the client-side survey cache consistent with the
//! backend. The cache is always ordered newest first (id descending).

use crate::models::Survey;

/// Inputs that change the survey list
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// Mount or manual reload: fetch everything
    Refresh,
    /// Result of a full fetch (`Err` carries the user-facing message)
    Fetched(Result<Vec<Survey>, String>),
    /// A survey created by the form
    Created(Survey),
    /// Server representation returned by an item action
    Updated(Survey),
    /// An item was deleted on the backend
    Deleted(u32),
}

/// Work the list view must do after applying an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    Refetch,
}

pub fn sort_newest_first(surveys: &mut [Survey]) {
    surveys.sort_by(|a, b| b.id.cmp(&a.id));
}

/// Replace the whole cache with a fetched snapshot
pub fn replace_all(cache: &mut Vec<Survey>, mut fetched: Vec<Survey>) {
    sort_newest_first(&mut fetched);
    *cache = fetched;
}

/// Insert a created survey, dropping any stale entry with the same id
pub fn merge_created(cache: &mut Vec<Survey>, created: Survey) {
    cache.retain(|s| s.id != created.id);
    cache.insert(0, created);
    sort_newest_first(cache);
}

/// Swap in the server's version of an existing survey.
/// Returns false (and leaves the cache alone) when the id is unknown.
pub fn apply_update(cache: &mut Vec<Survey>, updated: Survey) -> bool {
    let Some(slot) = cache.iter_mut().find(|s| s.id == updated.id) else {
        return false;
    };
    *slot = updated;
    sort_newest_first(cache);
    true
}


#[cfg(test)]
pub(crate) use tests::make_survey;
