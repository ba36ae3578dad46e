use crate::api::FacilityRequest;
use crate::components::alert_dialog::AlertDialog;
use crate::pages::requests::{
    components::{
        create_modal::CreateRequestModal, detail_modal::RequestDetailModal, filter::SearchFilter,
        pager::Pager, summary::RequestSummary, table::RequestsTable,
    },
    layout::RequestsLayout,
    types::Operation,
    view_model::use_requests_view_model,
};
use leptos::*;

#[component]
pub fn RequestsPage() -> impl IntoView {
    let vm = use_requests_view_model();

    // Initial load on mount.
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            vm.refresh();
        }
    });

    let rows = vm.page_items();
    let page = vm.current_page();
    let total_pages = vm.total_pages();
    let loading = Signal::from(vm.store.loading);
    let alert = Signal::from(vm.store.alert);
    let create_open = Signal::from(vm.create_open);
    let editor_phase = Signal::from(vm.editor_phase);

    view! {
        <>
            <RequestsLayout>
                <RequestSummary
                    counters=vm.counters()
                    on_new_request=Callback::new(move |_| vm.open_create())
                />
                <SearchFilter
                    filter_state=vm.filter_state
                    on_apply=Callback::new(move |_| vm.apply_filters())
                    on_clear=Callback::new(move |_| vm.clear_filters())
                    on_download=Callback::new(move |_| vm.download_csv())
                />
                <RequestsTable
                    rows=rows
                    page=page
                    loading=loading
                    on_view=Callback::new(move |request: FacilityRequest| vm.open_editor(request))
                />
                <Pager
                    page=page
                    total_pages=total_pages
                    on_page=Callback::new(move |number: usize| vm.go_to_page(number))
                    on_prev=Callback::new(move |_| vm.prev_page())
                    on_next=Callback::new(move |_| vm.next_page())
                />
            </RequestsLayout>
            <CreateRequestModal
                open=create_open
                state=vm.create_state
                submitting=vm.is_running(Operation::Create)
                on_submit=Callback::new(move |_| vm.submit_create())
                on_close=Callback::new(move |_| vm.close_create())
            />
            <RequestDetailModal
                draft=vm.draft
                phase=editor_phase
                on_update=Callback::new(move |_| vm.submit_update())
                on_close=Callback::new(move |_| vm.close_editor())
                on_request_delete=Callback::new(move |_| vm.request_delete())
                on_confirm_delete=Callback::new(move |_| vm.confirm_delete())
                on_cancel_delete=Callback::new(move |_| vm.cancel_delete())
            />
            <AlertDialog alert=alert on_dismiss=Callback::new(move |_| vm.dismiss_alert())/>
        </>
    }
}
