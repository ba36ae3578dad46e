use crate::api::FacilityRequest;
use crate::components::{empty_state::EmptyState, layout::LoadingSpinner};
use crate::pages::requests::components::status_label::{PriorityBadge, StatusBadge};
use crate::pages::requests::types::{option_label, serial_number, SERVICE_OPTIONS};
use crate::utils::time::format_created_on;
use leptos::*;

const HEADERS: [&str; 11] = [
    "SL No",
    "Guest Name",
    "Request ID",
    "Created On",
    "Location",
    "Service",
    "Department",
    "Phone Number",
    "Priority",
    "Status",
    "Actions",
];

#[component]
pub fn RequestsTable(
    rows: Signal<Vec<FacilityRequest>>,
    page: Signal<usize>,
    loading: Signal<bool>,
    on_view: Callback<FacilityRequest>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {HEADERS
                            .iter()
                            .map(|header| view! {
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {*header}
                                </th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        let current_page = page.get();
                        rows.get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, request)| {
                                let short_id = request.short_id().to_string();
                                let created_on = format_created_on(&request.created_on);
                                let location = request.location();
                                let service = option_label(&SERVICE_OPTIONS, &request.service).to_string();
                                let priority = request.priority.clone();
                                let status = request.status.clone();
                                let guest_name = request.guest_name.clone();
                                let department = request.department.clone();
                                let phone_number = request.phone_number.clone();
                                let selected = store_value(request);
                                view! {
                                    <tr class="hover:bg-surface-muted">
                                        <td class="px-4 py-3 text-sm text-fg">{serial_number(current_page, index)}</td>
                                        <td class="px-4 py-3 text-sm text-fg">{guest_name}</td>
                                        <td class="px-4 py-3 text-sm font-mono text-fg">{short_id}</td>
                                        <td class="px-4 py-3 text-sm text-fg">{created_on}</td>
                                        <td class="px-4 py-3 text-sm text-fg">{location}</td>
                                        <td class="px-4 py-3 text-sm text-fg">{service}</td>
                                        <td class="px-4 py-3 text-sm text-fg">{department}</td>
                                        <td class="px-4 py-3 text-sm text-fg">{phone_number}</td>
                                        <td class="px-4 py-3 text-sm"><PriorityBadge priority=priority/></td>
                                        <td class="px-4 py-3 text-sm"><StatusBadge status=status/></td>
                                        <td class="px-4 py-3 text-sm">
                                            <button
                                                type="button"
                                                class="text-action-primary-bg hover:underline"
                                                on:click=move |_| on_view.call(selected.get_value())
                                            >
                                                {"View"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Show when=move || loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || !loading.get() && rows.with(|rows| rows.is_empty())>
                <div class="p-4">
                    <EmptyState title="No data available"/>
                </div>
            </Show>
        </div>
    }
}
