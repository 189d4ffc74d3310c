//! Survey Review App
//!
//! Root component: header, creation form and survey list.

use leptos::prelude::*;
use tracing::debug;

use crate::api::HttpSurveyApi;
use crate::components::{HealthBadge, SurveyForm, SurveyList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Survey;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(HttpSurveyApi::new(&config.api_base_url)));

    // Most recent survey from the form; the list merges it into its store
    let (latest_survey, set_latest_survey) = signal::<Option<Survey>>(None);

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Google Forms Creator & Review"</h1>
                <HealthBadge />
            </header>
            <main>
                <SurveyForm on_created=move |survey: Survey| set_latest_survey.set(Some(survey)) />
                <hr />
                <SurveyList
                    new_survey=latest_survey
                    on_updated=move |survey: Survey| debug!(id = survey.id, status = %survey.status, "survey updated")
                    on_deleted=move |id: u32| debug!(id, "survey deleted")
                />
            </main>
        </div>
    }
}
