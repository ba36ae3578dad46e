use crate::components::common::Button;
use crate::pages::requests::types::SummaryCounters;
use leptos::*;

#[component]
fn Counter(#[prop(into)] label: String, value: Signal<usize>, accent: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <span class=format!(
                "inline-flex h-8 min-w-[2rem] items-center justify-center rounded-full px-2 text-sm font-bold {}",
                accent
            )>
                {move || value.get()}
            </span>
            <span class="text-sm text-fg-muted">{label}</span>
        </div>
    }
}

#[component]
pub fn RequestSummary(counters: Signal<SummaryCounters>, on_new_request: Callback<()>) -> impl IntoView {
    let pick = move |f: fn(&SummaryCounters) -> usize| Signal::derive(move || counters.with(f));
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
            <div>
                <h2 class="text-xl font-semibold text-fg">{"Requests"}</h2>
                <p class="text-sm text-fg-muted">
                    {move || format!("{} requests in total", counters.with(|c| c.total))}
                </p>
            </div>
            <div class="flex flex-wrap items-center gap-4">
                <Counter label="Pending" value=pick(|c| c.pending) accent="bg-status-warning-bg text-status-warning-text"/>
                <Counter label="In Progress" value=pick(|c| c.in_progress) accent="bg-status-info-bg text-status-info-text"/>
                <Counter label="Completed" value=pick(|c| c.completed) accent="bg-status-success-bg text-status-success-text"/>
                <Counter label="High Priority" value=pick(|c| c.high_priority) accent="bg-status-error-bg text-status-error-text"/>
                <Button on:click=move |_| on_new_request.call(())>{"New Request"}</Button>
            </div>
        </section>
    }
}
