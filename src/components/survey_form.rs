//! Survey Form Component
//!
//! Collects question lines and an optional title, then creates the survey.

use leptos::prelude::*;
use tracing::info;

use crate::actions;
use crate::context::use_app_context;
use crate::models::Survey;
use crate::task::TaskSlot;

/// Form for creating a new survey
#[component]
pub fn SurveyForm(
    /// Receives the created survey
    #[prop(into)] on_created: Callback<Survey>,
) -> impl IntoView {
    let ctx = use_app_context();
    let tasks = TaskSlot::new();

    let (questions_text, set_questions_text) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() { return; }

        let data = match actions::prepare_survey(&questions_text.get_untracked(), &title.get_untracked()) {
            Ok(data) => data,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };

        set_error.set(None);
        set_submitting.set(true);
        let api = ctx.api();
        tasks.spawn(async move {
            let result = actions::create_survey(&api, &data).await;
            set_submitting.set(false);
            match result {
                Ok(survey) => {
                    info!(id = survey.id, "survey created");
                    on_created.run(survey);
                    set_questions_text.set(String::new());
                    set_title.set(String::new());
                }
                // fields keep their content so the user can retry
                Err(msg) => set_error.set(Some(msg)),
            }
        });
    };

    view! {
        <form class="survey-form" on:submit=submit>
            <h2>"Create New Survey"</h2>
            {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
            <div class="field">
                <label for="title">"Survey Title (Optional):"</label>
                <input
                    type="text"
                    id="title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    disabled=move || submitting.get()
                />
            </div>
            <div class="field">
                <label for="questions">"Questions (one per line):"</label>
                <textarea
                    id="questions"
                    rows="10"
                    cols="50"
                    prop:value=move || questions_text.get()
                    on:input=move |ev| set_questions_text.set(event_target_value(&ev))
                    disabled=move || submitting.get()
                />
            </div>
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Creating..." } else { "Create Survey" }}
            </button>
        </form>
    }
}
