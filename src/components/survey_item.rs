//! Survey Item Component
//!
//! One survey card with approve, delete and refresh actions. All UI state
//! here is per item; a pending action on one card never touches another.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::models::{Survey, SurveyStatus};
use crate::task::TaskSlot;

/// Blocking browser confirmation; treats a missing window as "no".
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn card_class(status: SurveyStatus) -> &'static str {
    match status {
        SurveyStatus::Draft => "survey-card draft",
        SurveyStatus::Approved => "survey-card approved",
        SurveyStatus::Deleted => "survey-card deleted",
    }
}

/// A single survey card
#[component]
pub fn SurveyItem(
    survey: Survey,
    /// Server representation after approve/refresh
    #[prop(into)] on_updated: Callback<Survey>,
    /// Id of a survey the backend confirmed as deleted
    #[prop(into)] on_deleted: Callback<u32>,
) -> impl IntoView {
    let ctx = use_app_context();
    // Detached: a list reload can unmount this card while a request is in
    // flight, and its result must still reach the list.
    let approve_task = TaskSlot::detached();
    let delete_task = TaskSlot::detached();
    let refresh_task = TaskSlot::detached();

    let id = survey.id;
    let status = survey.status;
    let heading = format!("{} (ID: {})", survey.display_title(), id);
    let confirm_prompt = format!("Are you sure you want to delete survey \"{}\"?", survey.confirm_title());

    let (recipient_email, set_recipient_email) = signal(String::new());
    let (show_email_input, set_show_email_input) = signal(false);
    let (approving, set_approving) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (refreshing, set_refreshing) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let approve = move |_: MouseEvent| {
        let email = recipient_email.get_untracked();
        let email = match actions::prepare_recipient(&email) {
            Ok(email) => email.to_string(),
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        set_error.set(None);
        set_approving.set(true);
        let api = ctx.api();
        approve_task.spawn(async move {
            let result = actions::approve_survey(&api, id, &email).await;
            set_approving.set(false);
            match result {
                Ok(updated) => {
                    set_show_email_input.set(false);
                    on_updated.run(updated);
                }
                Err(msg) => set_error.set(Some(msg)),
            }
        });
    };

    let delete = move |_: MouseEvent| {
        if !confirm(&confirm_prompt) { return; }
        set_deleting.set(true);
        set_error.set(None);
        let api = ctx.api();
        delete_task.spawn(async move {
            let result = actions::delete_survey(&api, id).await;
            set_deleting.set(false);
            match result {
                Ok(()) => on_deleted.run(id),
                Err(msg) => set_error.set(Some(msg)),
            }
        });
    };

    let refresh = move |_: MouseEvent| {
        set_refreshing.set(true);
        set_error.set(None);
        let api = ctx.api();
        refresh_task.spawn(async move {
            let result = actions::refresh_survey(&api, id).await;
            set_refreshing.set(false);
            match result {
                Ok(fresh) => on_updated.run(fresh),
                Err(msg) => set_error.set(Some(msg)),
            }
        });
    };

    let created = survey
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string());

    view! {
        <div class=card_class(status)>
            <h3>{heading}</h3>
            <p>"Status: " <strong>{status.as_str()}</strong></p>
            {created.map(|c| view! { <p class="created-at">"Created: " {c}</p> })}
            {survey.form_url.clone().map(|url| {
                let href = url.clone();
                view! {
                    <p>
                        "Form URL: "
                        <a href=href target="_blank" rel="noopener noreferrer">{url}</a>
                    </p>
                }
            })}
            {survey.recipient_email.clone().map(|email| view! { <p>"Sent to: " {email}</p> })}
            <details>
                <summary>"View Questions"</summary>
                <pre class="questions">{survey.questions_text.clone()}</pre>
            </details>

            {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}

            <div class="survey-actions">
                <Show when=move || status.can_approve()>
                    <Show
                        when=move || show_email_input.get()
                        fallback=move || view! {
                            <button
                                class="approve-btn"
                                on:click=move |_| set_show_email_input.set(true)
                                disabled=move || approving.get()
                            >
                                "Approve"
                            </button>
                        }
                    >
                        <div class="approve-form">
                            <input
                                type="email"
                                placeholder="Recipient Email"
                                prop:value=move || recipient_email.get()
                                on:input=move |ev| set_recipient_email.set(event_target_value(&ev))
                                disabled=move || approving.get()
                            />
                            <button
                                on:click=approve
                                disabled=move || approving.get() || recipient_email.get().trim().is_empty()
                            >
                                {move || if approving.get() { "Approving..." } else { "Send Approval Email" }}
                            </button>
                            <button
                                class="cancel-btn"
                                on:click=move |_| set_show_email_input.set(false)
                                disabled=move || approving.get()
                            >
                                "Cancel"
                            </button>
                        </div>
                    </Show>
                </Show>

                <Show when=move || status.can_delete()>
                    <button
                        class="delete-btn"
                        on:click=delete.clone()
                        disabled=move || deleting.get()
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Delete Survey" }}
                    </button>
                </Show>

                <button
                    class="refresh-btn"
                    on:click=refresh
                    disabled=move || refreshing.get()
                >
                    "Refresh"
                </button>
            </div>
        </div>
    }
}
