//! Survey List Component
//!
//! Owns the survey store and reconciles it with the three mutation sources:
//! the initial fetch, surveys created by the form, and item-level
//! updates/deletes.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

use crate::actions;
use crate::components::SurveyItem;
use crate::context::use_app_context;
use crate::models::Survey;
use crate::reconcile::ListEvent;
use crate::store::{ListPhase, SurveyListState, SurveyListStateStoreFields, SurveyStore};
use crate::task::TaskSlot;

/// Survey list view
#[component]
pub fn SurveyList(
    /// Latest survey created elsewhere (the form)
    new_survey: ReadSignal<Option<Survey>>,
    /// Propagated after an item update has been merged
    #[prop(into)] on_updated: Callback<Survey>,
    /// Propagated after a delete has triggered a refetch
    #[prop(into)] on_deleted: Callback<u32>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store: SurveyStore = Store::new(SurveyListState::default());
    // a newer fetch supersedes an older one
    let fetches = TaskSlot::new();

    let dispatch = move |event: ListEvent| {
        debug!(?event, "list event");
        let Some(followup) = store.try_update(|state| state.apply(event)).flatten() else {
            return;
        };
        let api = ctx.api();
        fetches.spawn(async move {
            let next = actions::run_followup(&api, followup).await;
            store.update(|state| {
                state.apply(next);
            });
        });
    };

    // Initial fetch on mount
    Effect::new(move |_| dispatch(ListEvent::Refresh));

    // Merge surveys coming from the form
    Effect::new(move |_| {
        if let Some(survey) = new_survey.get() {
            dispatch(ListEvent::Created(survey));
        }
    });

    let on_item_updated = Callback::new(move |survey: Survey| {
        dispatch(ListEvent::Updated(survey.clone()));
        on_updated.run(survey);
    });

    let on_item_deleted = Callback::new(move |id: u32| {
        dispatch(ListEvent::Deleted(id));
        on_deleted.run(id);
    });

    view! {
        <section class="survey-list">
            {move || match store.phase().get() {
                ListPhase::Loading => view! { <p class="loading">"Loading surveys..."</p> }.into_any(),
                ListPhase::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
                ListPhase::Ready => view! {
                    <h2>"Existing Surveys"</h2>
                    <Show when=move || store.surveys().read().is_empty()>
                        <p class="empty">"No surveys created yet."</p>
                    </Show>
                    <For
                        each=move || store.surveys().get()
                        // whole value as key so a server replacement re-renders the card
                        key=|survey| survey.clone()
                        children=move |survey| {
                            view! {
                                <SurveyItem
                                    survey=survey
                                    on_updated=on_item_updated
                                    on_deleted=on_item_deleted
                                />
                            }
                        }
                    />
                }.into_any(),
            }}
        </section>
    }
}
