//! Application Context
//!
//! App-wide handles provided via the Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpSurveyApi;

#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<HttpSurveyApi>,
}

impl AppContext {
    pub fn new(api: HttpSurveyApi) -> Self {
        Self { api: StoredValue::new(api) }
    }

    /// Client handle for a request; cheap to clone.
    pub fn api(&self) -> HttpSurveyApi {
        self.api.get_value()
    }

    pub fn api_base_url(&self) -> String {
        self.api.with_value(|api| api.base_url().to_string())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
