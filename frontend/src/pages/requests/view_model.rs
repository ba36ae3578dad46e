use crate::api::{ApiClient, ApiError, FacilityRequest, NewRequest, RequestUpdate};
use crate::components::alert_dialog::Alert;
use crate::pages::requests::{
    repository::RequestsRepository,
    types::{
        clamp_page, page_slice, requests_csv, total_pages, EditorEvent, EditorPhase, Operation,
        PendingOperation, RequestFilter, SummaryCounters, CSV_FILE_NAME,
    },
    utils::{EditorDraftState, FilterFormState, FormError, NewRequestFormState},
};
use crate::utils::{download::trigger_csv_download, time::now_iso};
use leptos::*;

pub const FETCH_FAILED: &str = "Failed to fetch requests";
pub const CREATE_SUCCEEDED: &str = "Request submitted successfully";
pub const CREATE_FAILED: &str = "Error submitting request. Please try again.";
pub const UPDATE_SUCCEEDED: &str = "Request updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update request";
pub const DELETE_SUCCEEDED: &str = "Your request has been deleted.";
pub const DELETE_FAILED: &str = "Failed to delete request";

/// In-memory list of requests plus the view state that has to follow it.
#[derive(Clone, Copy)]
pub struct RequestStore {
    repository: StoredValue<RequestsRepository>,
    pub requests: RwSignal<Vec<FacilityRequest>>,
    pub loading: RwSignal<bool>,
    pub page: RwSignal<usize>,
    pub applied_filter: RwSignal<RequestFilter>,
    pub alert: RwSignal<Option<Alert>>,
}

impl RequestStore {
    fn new(repository: RequestsRepository) -> Self {
        Self {
            repository: store_value(repository),
            requests: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            page: create_rw_signal(1),
            applied_filter: create_rw_signal(RequestFilter::default()),
            alert: create_rw_signal(None),
        }
    }

    fn repository(&self) -> RequestsRepository {
        self.repository.get_value()
    }

    fn filtered_len(&self) -> usize {
        self.applied_filter
            .with_untracked(|filter| self.requests.with_untracked(|list| filter.apply(list).len()))
    }

    async fn reload(self) -> Result<Vec<FacilityRequest>, ApiError> {
        self.loading.set(true);
        let result = self.repository().fetch_all().await;
        self.loading.set(false);
        apply_fetch_result(self, &result);
        result
    }

    /// Refresh contract after every successful mutation.
    async fn reload_from_first_page(self) {
        self.page.set(1);
        let _ = self.reload().await;
    }
}

fn apply_fetch_result(store: RequestStore, result: &Result<Vec<FacilityRequest>, ApiError>) {
    match result {
        Ok(list) => {
            log::debug!("fetched {} requests", list.len());
            store.requests.set(list.clone());
            let len = store.filtered_len();
            store.page.update(|page| *page = clamp_page(*page, len));
        }
        Err(err) => {
            // Keep whatever was shown before.
            log::error!("fetching requests failed: {}", err);
            store.alert.set(Some(Alert::error("Error", FETCH_FAILED)));
        }
    }
}

fn transition(phase: RwSignal<EditorPhase>, event: EditorEvent) -> bool {
    let current = phase.get_untracked();
    match current.next(event) {
        Some(next) => {
            phase.set(next);
            true
        }
        None => {
            log::debug!("editor ignored {:?} while {:?}", event, current);
            false
        }
    }
}

fn reject_form(store: RequestStore, form: &str, err: FormError) {
    let alert = validation_alert(&err);
    let api_error = ApiError::from(err);
    log::warn!(
        "{} form rejected: {} {:?}",
        form,
        api_error.code,
        api_error.details
    );
    store.alert.set(Some(alert));
}

fn validation_alert(err: &FormError) -> Alert {
    match err {
        FormError::MissingFields(_) => Alert::warning(err.title(), err.to_string()),
        _ => Alert::error(err.title(), err.to_string()),
    }
}

#[derive(Clone, Copy)]
pub struct RequestsViewModel {
    pub store: RequestStore,
    pub filter_state: FilterFormState,
    pub create_state: NewRequestFormState,
    pub create_open: RwSignal<bool>,
    pub draft: EditorDraftState,
    pub editor_phase: RwSignal<EditorPhase>,
    pub pending: RwSignal<PendingOperation>,
    filtered: Memo<Vec<FacilityRequest>>,
    pub fetch_action: Action<(), Result<Vec<FacilityRequest>, ApiError>>,
    pub create_action: Action<NewRequest, Result<String, ApiError>>,
    pub update_action: Action<(String, RequestUpdate), Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl RequestsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let store = RequestStore::new(RequestsRepository::new(api));

        let filter_state = FilterFormState::default();
        let create_state = NewRequestFormState::default();
        let create_open = create_rw_signal(false);
        let draft = EditorDraftState::default();
        let editor_phase = create_rw_signal(EditorPhase::Closed);
        let pending = create_rw_signal(PendingOperation::default());

        let filtered = create_memo(move |_| {
            store
                .applied_filter
                .with(|filter| store.requests.with(|list| filter.apply(list)))
        });

        let fetch_action = create_action(move |_: &()| store.reload());

        let submit_create_action = create_action(move |payload: &NewRequest| {
            let payload = payload.clone();
            async move {
                let result = store.repository().create(payload).await;
                match &result {
                    Ok(message) => {
                        log::info!("request created");
                        create_open.set(false);
                        create_state.reset();
                        let text = if message.trim().is_empty() {
                            CREATE_SUCCEEDED.to_string()
                        } else {
                            message.clone()
                        };
                        store.alert.set(Some(Alert::success("Success", text)));
                        store.reload_from_first_page().await;
                    }
                    Err(err) => {
                        log::error!("creating request failed: {}", err);
                        store.alert.set(Some(Alert::error("Error", CREATE_FAILED)));
                    }
                }
                pending.update(|slot| slot.finish(Operation::Create));
                result
            }
        });

        let update_action = create_action(move |input: &(String, RequestUpdate)| {
            let (id, payload) = input.clone();
            async move {
                let result = store.repository().update(&id, payload).await;
                match &result {
                    Ok(()) => {
                        log::info!("request {} updated", id);
                        transition(editor_phase, EditorEvent::Succeeded);
                        draft.reset();
                        store
                            .alert
                            .set(Some(Alert::success("Success", UPDATE_SUCCEEDED)));
                        store.reload_from_first_page().await;
                    }
                    Err(err) => {
                        log::error!("updating request {} failed: {}", id, err);
                        transition(editor_phase, EditorEvent::Failed);
                        store.alert.set(Some(Alert::error("Error", UPDATE_FAILED)));
                    }
                }
                pending.update(|slot| slot.finish(Operation::Update));
                result
            }
        });

        let delete_action = create_action(move |id: &String| {
            let id = id.clone();
            async move {
                let result = store.repository().delete(&id).await;
                match &result {
                    Ok(()) => {
                        log::info!("request {} deleted", id);
                        transition(editor_phase, EditorEvent::Succeeded);
                        draft.reset();
                        store
                            .alert
                            .set(Some(Alert::success("Deleted!", DELETE_SUCCEEDED)));
                        store.reload_from_first_page().await;
                    }
                    Err(err) => {
                        log::error!("deleting request {} failed: {}", id, err);
                        transition(editor_phase, EditorEvent::Failed);
                        store.alert.set(Some(Alert::error("Error", DELETE_FAILED)));
                    }
                }
                pending.update(|slot| slot.finish(Operation::Delete));
                result
            }
        });

        Self {
            store,
            filter_state,
            create_state,
            create_open,
            draft,
            editor_phase,
            pending,
            filtered,
            fetch_action,
            create_action: submit_create_action,
            update_action,
            delete_action,
        }
    }

    pub fn refresh(&self) {
        self.fetch_action.dispatch(());
    }

    pub fn filtered_requests(&self) -> Memo<Vec<FacilityRequest>> {
        self.filtered
    }

    pub fn total_pages(&self) -> Signal<usize> {
        let filtered = self.filtered_requests();
        Signal::derive(move || filtered.with(|list| total_pages(list.len())))
    }

    pub fn current_page(&self) -> Signal<usize> {
        let filtered = self.filtered_requests();
        let page = self.store.page;
        Signal::derive(move || filtered.with(|list| clamp_page(page.get(), list.len())))
    }

    pub fn page_items(&self) -> Signal<Vec<FacilityRequest>> {
        let filtered = self.filtered_requests();
        let current = self.current_page();
        Signal::derive(move || filtered.with(|list| page_slice(list, current.get())))
    }

    pub fn counters(&self) -> Signal<SummaryCounters> {
        let requests = self.store.requests;
        Signal::derive(move || requests.with(|list| SummaryCounters::from_requests(list)))
    }

    pub fn is_running(&self, operation: Operation) -> Signal<bool> {
        let pending = self.pending;
        Signal::derive(move || pending.with(|slot| slot.is_running(operation)))
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let pending = self.pending;
        Signal::derive(move || pending.with(|slot| slot.is_busy()))
    }

    pub fn go_to_page(&self, page: usize) {
        let len = self.store.filtered_len();
        self.store.page.set(clamp_page(page, len));
    }

    pub fn next_page(&self) {
        self.go_to_page(self.store.page.get_untracked().saturating_add(1));
    }

    pub fn prev_page(&self) {
        self.go_to_page(self.store.page.get_untracked().saturating_sub(1));
    }

    pub fn apply_filters(&self) {
        let snapshot = self.filter_state.snapshot();
        log::info!("applying filters: {:?}", snapshot);
        self.store.applied_filter.set(snapshot);
        self.store.page.set(1);
    }

    pub fn clear_filters(&self) {
        self.filter_state.reset();
        self.apply_filters();
    }

    pub fn open_create(&self) {
        self.create_open.set(true);
    }

    pub fn close_create(&self) {
        if !self.pending.get_untracked().is_running(Operation::Create) {
            self.create_open.set(false);
        }
    }

    pub fn submit_create(&self) {
        if self.create_state.reading_attachment_signal().get_untracked() {
            log::warn!("create ignored while the attachment is still being read");
            return;
        }
        let payload = match self.create_state.to_payload(now_iso()) {
            Ok(payload) => payload,
            Err(err) => {
                reject_form(self.store, "create", err);
                return;
            }
        };
        if !self.pending.try_update(|slot| slot.try_begin(Operation::Create)).unwrap_or(false) {
            log::warn!("create ignored while another operation is running");
            return;
        }
        self.create_action.dispatch(payload);
    }

    pub fn open_editor(&self, request: FacilityRequest) {
        if transition(self.editor_phase, EditorEvent::Open) {
            self.draft.load_from_request(&request);
        }
    }

    pub fn close_editor(&self) {
        if transition(self.editor_phase, EditorEvent::Close) {
            self.draft.reset();
        }
    }

    pub fn submit_update(&self) {
        if self.editor_phase.get_untracked() != EditorPhase::Open {
            return;
        }
        let (id, payload) = match self.draft.to_payload() {
            Ok(result) => result,
            Err(err) => {
                reject_form(self.store, "update", err);
                return;
            }
        };
        if !self.pending.try_update(|slot| slot.try_begin(Operation::Update)).unwrap_or(false) {
            log::warn!("update ignored while another operation is running");
            return;
        }
        transition(self.editor_phase, EditorEvent::SubmitUpdate);
        self.update_action.dispatch((id, payload));
    }

    pub fn request_delete(&self) {
        if self.pending.get_untracked().is_busy() {
            return;
        }
        transition(self.editor_phase, EditorEvent::RequestDelete);
    }

    /// Declining is silent and leaves the editor as it was.
    pub fn cancel_delete(&self) {
        transition(self.editor_phase, EditorEvent::CancelDelete);
    }

    pub fn confirm_delete(&self) {
        if self.editor_phase.get_untracked() != EditorPhase::ConfirmingDelete {
            return;
        }
        if !self.pending.try_update(|slot| slot.try_begin(Operation::Delete)).unwrap_or(false) {
            transition(self.editor_phase, EditorEvent::CancelDelete);
            return;
        }
        transition(self.editor_phase, EditorEvent::ConfirmDelete);
        self.delete_action.dispatch(self.draft.id_signal().get_untracked());
    }

    pub fn download_csv(&self) {
        let rows = self.filtered.get_untracked();
        let result = requests_csv(&rows)
            .and_then(|csv| trigger_csv_download(CSV_FILE_NAME, &csv));
        if let Err(err) = result {
            log::error!("csv export failed: {}", err);
            self.store
                .alert
                .set(Some(Alert::error("Error", format!("Download failed: {}", err))));
        }
    }

    pub fn dismiss_alert(&self) {
        self.store.alert.set(None);
    }
}

impl Default for RequestsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_requests_view_model() -> RequestsViewModel {
    match use_context::<RequestsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = RequestsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::{Priority, RequestStatus};
    use crate::components::alert_dialog::AlertKind;
    use crate::test_support::ssr::{with_local_runtime, with_local_runtime_async, with_runtime};
    use serde_json::{json, Value};

    fn request_json(index: usize) -> Value {
        json!({
            "_id": format!("req-{:02}", index),
            "floor": "1",
            "room": "ICU",
            "block": "Maternity",
            "guestName": format!("Guest {}", index),
            "phoneNumber": "9000000000",
            "service": "cardiology",
            "department": "Cardiology",
            "priority": if index % 2 == 0 { "HIGH" } else { "LOW" },
            "status": "PENDING",
            "createdOn": "2024-03-05T09:15:00.000Z"
        })
    }

    fn list_json(n: usize) -> Value {
        Value::Array((0..n).map(request_json).collect())
    }

    fn mock_server(n: usize) -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/capture");
            then.status(200).json_body(list_json(n));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/requests");
            then.status(201)
                .json_body(json!({ "message": "Request submitted successfully" }));
        });
        server.mock(|when, then| {
            when.method(PATCH).path("/api/requests/req-03");
            then.status(200).json_body(request_json(3));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/api/requests/req-03");
            then.status(200).json_body(json!({ "message": "deleted" }));
        });
        server
    }

    fn stored(index: usize) -> FacilityRequest {
        serde_json::from_value(request_json(index)).unwrap()
    }

    fn view_model(server: &MockServer) -> RequestsViewModel {
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        RequestsViewModel::new()
    }

    async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        for _ in 0..100 {
            if condition() {
                return true;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        false
    }

    fn fill_create_form(vm: &RequestsViewModel) {
        let form = vm.create_state;
        form.floor_signal().set("2".into());
        form.room_signal().set("Laboratory".into());
        form.block_signal().set("Outpatient".into());
        form.guest_name_signal().set("Meera".into());
        form.phone_number_signal().set("9111111111".into());
        form.service_signal().set("surgery".into());
        form.department_signal().set("Oncology".into());
    }

    #[test]
    fn pagination_follows_filtered_list() {
        with_runtime(|| {
            let server = mock_server(0);
            let vm = view_model(&server);
            vm.store.requests.set((0..15).map(stored).collect());

            assert_eq!(vm.total_pages().get(), 2);
            assert_eq!(vm.page_items().get().len(), 10);

            vm.next_page();
            assert_eq!(vm.current_page().get(), 2);
            let second = vm.page_items().get();
            assert_eq!(second.len(), 5);
            assert_eq!(second[0].id, "req-10");

            vm.next_page();
            assert_eq!(vm.current_page().get(), 2, "next past the last page is a no-op");
            vm.go_to_page(1);
            vm.prev_page();
            assert_eq!(vm.current_page().get(), 1, "prev before page 1 is a no-op");
        });
    }

    #[test]
    fn apply_filters_narrows_list_and_resets_page() {
        with_runtime(|| {
            let server = mock_server(0);
            let vm = view_model(&server);
            vm.store.requests.set((0..15).map(stored).collect());
            vm.go_to_page(2);

            vm.filter_state.search_term_signal().set("guest 1".into());
            vm.apply_filters();

            assert_eq!(vm.store.page.get(), 1);
            // "Guest 1" and "Guest 10".."Guest 14"
            assert_eq!(vm.filtered_requests().get().len(), 6);
            assert_eq!(vm.total_pages().get(), 1);

            vm.clear_filters();
            assert_eq!(vm.filtered_requests().get().len(), 15);
        });
    }

    #[test]
    fn derived_page_signals_share_one_filtered_list() {
        with_runtime(|| {
            let server = mock_server(0);
            let vm = view_model(&server);
            let total = vm.total_pages();
            let items = vm.page_items();
            let current = vm.current_page();
            vm.store.requests.set((0..25).map(stored).collect());
            vm.go_to_page(3);
            assert_eq!(total.get(), 3);
            assert_eq!(items.get().len(), 5);

            vm.filter_state.search_term_signal().set("guest 2".into());
            vm.apply_filters();

            // "Guest 2" and "Guest 20".."Guest 24"
            assert_eq!(vm.filtered_requests().get().len(), 6);
            assert_eq!(total.get(), 1);
            assert_eq!(current.get(), 1);
            assert_eq!(items.get().len(), 6);
            assert_eq!(items.get()[0].id, "req-02");
        });
    }

    #[test]
    fn counters_follow_store() {
        with_runtime(|| {
            let server = mock_server(0);
            let vm = view_model(&server);
            vm.store.requests.set((0..5).map(stored).collect());
            let counters = vm.counters().get();
            assert_eq!(counters.total, 5);
            assert_eq!(counters.pending, 5);
            assert_eq!(counters.high_priority, 3);
        });
    }

    #[test]
    fn create_with_missing_guest_name_never_posts() {
        with_runtime(|| {
            let server = mock_server(0);
            let vm = view_model(&server);
            vm.open_create();
            fill_create_form(&vm);
            vm.create_state.guest_name_signal().set(String::new());

            vm.submit_create();

            let alert = vm.store.alert.get().expect("validation alert");
            assert_eq!(alert.kind, AlertKind::Warning);
            assert_eq!(alert.title, "Missing Fields");
            assert!(vm.create_open.get(), "modal stays open");
            assert!(!vm.pending.get().is_busy());
            assert_eq!(server.hits(POST, "/api/requests"), 0);
        });
    }

    #[test]
    fn create_waits_for_attachment_to_finish_reading() {
        with_runtime(|| {
            let server = mock_server(0);
            let vm = view_model(&server);
            vm.open_create();
            fill_create_form(&vm);
            vm.create_state.reading_attachment_signal().set(true);

            vm.submit_create();

            assert!(vm.store.alert.get().is_none());
            assert!(vm.create_open.get());
            assert!(!vm.pending.get().is_busy());
            assert_eq!(vm.create_state.guest_name_signal().get(), "Meera");
            assert_eq!(server.hits(POST, "/api/requests"), 0);
        });
    }

    #[test]
    fn update_with_invalid_enum_never_patches() {
        with_runtime(|| {
            let server = mock_server(0);
            let vm = view_model(&server);
            vm.open_editor(stored(3));
            vm.draft.status_signal().set("ARCHIVED".into());

            vm.submit_update();

            let alert = vm.store.alert.get().expect("validation alert");
            assert_eq!(alert.kind, AlertKind::Error);
            assert_eq!(alert.text, "Invalid status value");
            assert_eq!(vm.editor_phase.get(), EditorPhase::Open);
            assert_eq!(server.hits_for_method(PATCH), 0);

            vm.draft.status_signal().set("PENDING".into());
            vm.draft.priority_signal().set("CRITICAL".into());
            vm.submit_update();
            assert_eq!(vm.store.alert.get().unwrap().text, "Invalid priority value");
            assert_eq!(server.hits_for_method(PATCH), 0);
        });
    }

    #[test]
    fn fetched_record_with_unrecognised_status_lists_but_cannot_be_saved_unchanged() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            let mut legacy = request_json(1);
            legacy["status"] = json!("NEW");
            server.mock(|when, then| {
                when.method(GET).path("/api/capture");
                then.status(200).json_body(json!([request_json(0), legacy]));
            });
            let vm = view_model(&server);

            vm.refresh();
            assert!(wait_until(|| vm.fetch_action.value().get().is_some()).await);
            assert!(vm.store.alert.get().is_none());
            let rows = vm.page_items().get();
            assert_eq!(rows.len(), 2);
            assert_eq!(vm.counters().get().pending, 1);

            vm.open_editor(rows[1].clone());
            assert_eq!(vm.draft.status_signal().get(), "NEW");
            vm.submit_update();

            let alert = vm.store.alert.get().expect("validation alert");
            assert_eq!(alert.text, "Invalid status value");
            assert_eq!(vm.editor_phase.get(), EditorPhase::Open);
            assert_eq!(server.hits_for_method(PATCH), 0);
            runtime.dispose();
        });
    }

    #[test]
    fn declined_delete_changes_nothing() {
        with_runtime(|| {
            let server = mock_server(0);
            let vm = view_model(&server);
            vm.store.requests.set((0..4).map(stored).collect());
            vm.open_editor(stored(3));
            vm.draft.guest_name_signal().set("Edited".into());

            vm.request_delete();
            assert_eq!(vm.editor_phase.get(), EditorPhase::ConfirmingDelete);
            vm.cancel_delete();

            assert_eq!(vm.editor_phase.get(), EditorPhase::Open);
            assert_eq!(vm.draft.guest_name_signal().get(), "Edited");
            assert_eq!(vm.store.requests.get().len(), 4);
            assert!(vm.store.alert.get().is_none());
            assert_eq!(server.hits_for_method(DELETE), 0);
        });
    }

    #[test]
    fn close_editor_clears_draft() {
        with_runtime(|| {
            let server = mock_server(0);
            let vm = view_model(&server);
            vm.open_editor(stored(3));
            assert_eq!(vm.draft.id_signal().get(), "req-03");
            vm.close_editor();
            assert_eq!(vm.editor_phase.get(), EditorPhase::Closed);
            assert_eq!(vm.draft.id_signal().get(), "");
        });
    }

    #[test]
    fn refresh_loads_store_and_clamps_page() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server(12);
            let vm = view_model(&server);
            vm.store.requests.set((0..30).map(stored).collect());
            vm.go_to_page(3);

            vm.refresh();
            assert!(
                wait_until(|| vm.fetch_action.value().get().is_some()).await,
                "fetch should complete"
            );
            assert_eq!(vm.store.requests.get().len(), 12);
            assert_eq!(vm.store.page.get(), 2, "page clamps when the list shrinks");
            assert!(!vm.store.loading.get());
            runtime.dispose();
        });
    }

    #[test]
    fn failed_fetch_keeps_previous_list() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/capture");
                then.status(500).json_body(json!({ "message": "boom" }));
            });
            let vm = view_model(&server);
            vm.store.requests.set((0..3).map(stored).collect());

            vm.refresh();
            assert!(wait_until(|| vm.fetch_action.value().get().is_some()).await);
            assert_eq!(vm.store.requests.get().len(), 3);
            let alert = vm.store.alert.get().expect("error alert");
            assert_eq!(alert.kind, AlertKind::Error);
            assert_eq!(alert.text, FETCH_FAILED);
            runtime.dispose();
        });
    }

    #[test]
    fn successful_create_posts_once_then_refetches() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server(11);
            let vm = view_model(&server);
            vm.open_create();
            fill_create_form(&vm);
            vm.store.page.set(2);

            vm.submit_create();
            assert!(vm.is_running(Operation::Create).get());
            vm.submit_create();

            assert!(wait_until(|| vm.create_action.value().get().is_some()).await);
            assert_eq!(server.hits(POST, "/api/requests"), 1);
            assert_eq!(server.hits(GET, "/api/capture"), 1);
            assert!(!vm.create_open.get());
            assert_eq!(vm.create_state.guest_name_signal().get(), "");
            assert_eq!(vm.store.page.get(), 1);
            assert_eq!(vm.store.requests.get().len(), 11);
            assert_eq!(
                vm.store.alert.get().map(|a| a.text),
                Some("Request submitted successfully".to_string())
            );
            assert!(!vm.pending.get().is_busy());
            runtime.dispose();
        });
    }

    #[test]
    fn failed_create_keeps_form_for_retry() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(POST).path("/api/requests");
                then.transport_error();
            });
            let vm = view_model(&server);
            vm.open_create();
            fill_create_form(&vm);

            vm.submit_create();
            assert!(wait_until(|| vm.create_action.value().get().is_some()).await);
            assert!(vm.create_open.get());
            assert_eq!(vm.create_state.guest_name_signal().get(), "Meera");
            assert_eq!(vm.store.alert.get().map(|a| a.text), Some(CREATE_FAILED.to_string()));
            assert!(!vm.pending.get().is_busy());
            assert_eq!(server.hits_for_method(GET), 0);
            runtime.dispose();
        });
    }

    #[test]
    fn valid_update_patches_nine_fields_and_closes_editor() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server(4);
            let vm = view_model(&server);
            vm.open_editor(stored(3));
            vm.draft.priority_signal().set("HIGH".into());
            vm.draft.status_signal().set("PENDING".into());

            vm.submit_update();
            assert_eq!(vm.editor_phase.get(), EditorPhase::Updating);
            assert!(wait_until(|| vm.update_action.value().get().is_some()).await);

            assert_eq!(server.hits(PATCH, "/api/requests/req-03"), 1);
            let body = server
                .last_json_body(PATCH, "/api/requests/req-03")
                .expect("patch body");
            let object = body.as_object().expect("object");
            assert_eq!(object.len(), 9);
            assert_eq!(object["priority"], "HIGH");
            assert_eq!(object["status"], "PENDING");
            assert!(!object.contains_key("_id"));
            assert!(!object.contains_key("createdOn"));

            assert_eq!(server.hits(GET, "/api/capture"), 1);
            assert_eq!(vm.editor_phase.get(), EditorPhase::Closed);
            assert_eq!(
                vm.store.alert.get().map(|a| a.text),
                Some(UPDATE_SUCCEEDED.to_string())
            );
            runtime.dispose();
        });
    }

    #[test]
    fn failed_update_reopens_editor() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(PATCH).path("/api/requests/req-03");
                then.status(400).json_body(json!({ "message": "bad request" }));
            });
            let vm = view_model(&server);
            vm.open_editor(stored(3));
            vm.draft.guest_name_signal().set("Edited".into());

            vm.submit_update();
            assert!(wait_until(|| vm.update_action.value().get().is_some()).await);
            assert_eq!(vm.editor_phase.get(), EditorPhase::Open);
            assert_eq!(vm.draft.guest_name_signal().get(), "Edited");
            assert_eq!(vm.store.alert.get().map(|a| a.text), Some(UPDATE_FAILED.to_string()));
            assert_eq!(server.hits_for_method(GET), 0);
            runtime.dispose();
        });
    }

    #[test]
    fn confirmed_delete_issues_one_delete_then_one_fetch() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = mock_server(3);
            let vm = view_model(&server);
            vm.open_editor(stored(3));

            vm.request_delete();
            vm.confirm_delete();
            assert_eq!(vm.editor_phase.get(), EditorPhase::Deleting);
            vm.submit_update();
            assert!(wait_until(|| vm.delete_action.value().get().is_some()).await);

            assert_eq!(server.hits(DELETE, "/api/requests/req-03"), 1);
            assert_eq!(server.hits(GET, "/api/capture"), 1);
            assert_eq!(server.hits_for_method(PATCH), 0);
            let order: Vec<_> = server.received().into_iter().map(|r| r.method).collect();
            assert_eq!(order, vec![DELETE, GET]);
            assert_eq!(vm.editor_phase.get(), EditorPhase::Closed);
            assert_eq!(vm.store.requests.get().len(), 3);
            assert_eq!(
                vm.store.alert.get().map(|a| a.title),
                Some("Deleted!".to_string())
            );
            runtime.dispose();
        });
    }

    #[test]
    fn failed_delete_keeps_editor_open() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(DELETE).path("/api/requests/req-03");
                then.status(404).json_body(json!({ "error": "not found" }));
            });
            let vm = view_model(&server);
            vm.open_editor(stored(3));
            vm.request_delete();
            vm.confirm_delete();

            assert!(wait_until(|| vm.delete_action.value().get().is_some()).await);
            assert_eq!(vm.editor_phase.get(), EditorPhase::Open);
            assert_eq!(vm.store.alert.get().map(|a| a.text), Some(DELETE_FAILED.to_string()));
            assert!(!vm.pending.get().is_busy());
            runtime.dispose();
        });
    }

    #[test]
    fn use_requests_view_model_reuses_context() {
        with_local_runtime(|| {
            with_runtime(|| {
                let server = mock_server(0);
                let vm = view_model(&server);
                vm.filter_state.status_signal().set("COMPLETED".into());
                provide_context(vm);

                let used = use_requests_view_model();
                assert_eq!(used.filter_state.snapshot().status, Some(RequestStatus::Completed));
                assert_eq!(used.create_state.priority_signal().get(), Priority::Medium.as_str());
            });
        });
    }
}
