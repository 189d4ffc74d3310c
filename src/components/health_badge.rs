//! Backend Health Badge
//!
//! Shows whether the configured backend answers `GET /health`.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::task::TaskSlot;

#[derive(Clone, Debug, PartialEq)]
enum Health {
    Checking,
    Healthy,
    Unhealthy(String),
}

#[component]
pub fn HealthBadge() -> impl IntoView {
    let ctx = use_app_context();
    let tasks = TaskSlot::new();
    let (health, set_health) = signal(Health::Checking);
    let base_url = ctx.api_base_url();

    let check = move || {
        set_health.set(Health::Checking);
        let api = ctx.api();
        tasks.spawn(async move {
            let next = match actions::backend_health(&api).await {
                Ok(status) if status.is_healthy() => Health::Healthy,
                Ok(status) => Health::Unhealthy(status.status),
                Err(e) => Health::Unhealthy(e),
            };
            set_health.set(next);
        });
    };

    Effect::new(move |_| check());

    view! {
        <div class="health-badge" title=base_url>
            {move || match health.get() {
                Health::Checking => view! { <span class="health checking">"Backend: checking..."</span> }.into_any(),
                Health::Healthy => view! { <span class="health ok">"Backend: healthy"</span> }.into_any(),
                Health::Unhealthy(reason) => view! {
                    <span class="health down" title=reason>"Backend: unreachable"</span>
                }.into_any(),
            }}
            <button class="health-retry" on:click=move |_| check()>"↻"</button>
        </div>
    }
}
