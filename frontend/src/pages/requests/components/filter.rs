use crate::api::RequestStatus;
use crate::components::common::{Button, ButtonVariant};
use crate::pages::requests::types::DEPARTMENT_OPTIONS;
use crate::pages::requests::utils::FilterFormState;
use leptos::*;

const CONTROL_CLASS: &str = "rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg";

#[component]
pub fn SearchFilter(
    filter_state: FilterFormState,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
    on_download: Callback<()>,
) -> impl IntoView {
    let search_term = filter_state.search_term_signal();
    let start_date = filter_state.start_date_signal();
    let status = filter_state.status_signal();
    let department = filter_state.department_signal();

    view! {
        <form
            class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-3 lg:flex-row lg:items-end"
            on:submit=move |ev| {
                ev.prevent_default();
                on_apply.call(());
            }
        >
            <input
                type="search"
                class=format!("{} flex-1", CONTROL_CLASS)
                placeholder="Search by guest, phone, ID, service or location"
                prop:value=move || search_term.get()
                on:input=move |ev| search_term.set(event_target_value(&ev))
            />
            <input
                type="date"
                class=CONTROL_CLASS
                aria-label="Start date"
                prop:value=move || start_date.get()
                on:input=move |ev| start_date.set(event_target_value(&ev))
            />
            <select
                class=CONTROL_CLASS
                aria-label="Status"
                prop:value=move || status.get()
                on:change=move |ev| status.set(event_target_value(&ev))
            >
                <option value="">{"Status"}</option>
                {RequestStatus::ALL
                    .iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect_view()}
            </select>
            <select
                class=CONTROL_CLASS
                aria-label="Department"
                prop:value=move || department.get()
                on:change=move |ev| department.set(event_target_value(&ev))
            >
                <option value="">{"Department"}</option>
                {DEPARTMENT_OPTIONS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
            <div class="flex gap-2">
                <Button attr:type="submit">{"Apply"}</Button>
                <Button
                    variant=ButtonVariant::Secondary
                    attr:type="button"
                    on:click=move |_| on_clear.call(())
                >
                    {"Clear"}
                </Button>
                <Button
                    variant=ButtonVariant::Secondary
                    attr:type="button"
                    on:click=move |_| on_download.call(())
                >
                    {"Download"}
                </Button>
            </div>
        </form>
    }
}
