use crate::components::common::{Button, ButtonVariant};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::pages::requests::components::fields::{ReadOnlyField, SelectField, TextField};
use crate::pages::requests::types::{
    EditorPhase, BLOCK_OPTIONS, DEPARTMENT_OPTIONS, FLOOR_OPTIONS, PRIORITY_OPTIONS, ROOM_OPTIONS,
    SERVICE_OPTIONS, STATUS_OPTIONS,
};
use crate::pages::requests::utils::EditorDraftState;
use crate::utils::time::format_created_on;
use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::*;

/// Edit form for one selected request, with its delete confirmation.
#[component]
pub fn RequestDetailModal(
    draft: EditorDraftState,
    phase: Signal<EditorPhase>,
    on_update: Callback<()>,
    on_close: Callback<()>,
    on_request_delete: Callback<()>,
    on_confirm_delete: Callback<()>,
    on_cancel_delete: Callback<()>,
) -> impl IntoView {
    let busy = Signal::derive(move || phase.get().is_busy());
    let updating = Signal::derive(move || phase.get() == EditorPhase::Updating);
    let deleting = Signal::derive(move || phase.get() == EditorPhase::Deleting);
    let confirming = Signal::derive(move || phase.get() == EditorPhase::ConfirmingDelete);
    let id = draft.id_signal();
    let created_on = draft.created_on_signal();
    let created_on_text = Signal::derive(move || created_on.with(|raw| format_created_on(raw)));

    view! {
        <Show when=move || phase.get().is_visible()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    disabled=move || busy.get()
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[51] w-full max-w-2xl rounded-lg bg-surface-elevated shadow-xl border border-border p-6"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" && !confirming.get_untracked() {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3 mb-4">
                        <h2 class="text-lg font-semibold text-fg">{"Request Details"}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            disabled=move || busy.get()
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    <form
                        class="space-y-4"
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            on_update.call(());
                        }
                    >
                        <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                            <ReadOnlyField label="Request ID" value=Signal::derive(move || id.get())/>
                            <ReadOnlyField label="Created On" value=created_on_text/>
                            <SelectField label="Floor" placeholder="Select Floor" options=&FLOOR_OPTIONS value=draft.floor_signal() disabled=busy/>
                            <SelectField label="Room" placeholder="Select Room" options=&ROOM_OPTIONS value=draft.room_signal() disabled=busy/>
                            <SelectField label="Block" placeholder="Select Block" options=&BLOCK_OPTIONS value=draft.block_signal() disabled=busy/>
                            <TextField label="Guest Name" value=draft.guest_name_signal() disabled=busy/>
                            <TextField label="Phone Number" value=draft.phone_number_signal() input_type="tel" disabled=busy/>
                            <SelectField label="Service" placeholder="Select Service" options=&SERVICE_OPTIONS value=draft.service_signal() disabled=busy/>
                            <SelectField label="Department" placeholder="Select Department" options=&DEPARTMENT_OPTIONS value=draft.department_signal() disabled=busy/>
                            <SelectField label="Priority" placeholder="Select Priority" options=&PRIORITY_OPTIONS value=draft.priority_signal() disabled=busy/>
                            <SelectField label="Status" placeholder="Select Status" options=&STATUS_OPTIONS value=draft.status_signal() disabled=busy/>
                        </div>
                        <div class="flex justify-between gap-2">
                            <Button
                                variant=ButtonVariant::Danger
                                attr:type="button"
                                disabled=busy
                                loading=deleting
                                on:click=move |_| on_request_delete.call(())
                            >
                                {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                            </Button>
                            <div class="flex gap-2">
                                <Button
                                    variant=ButtonVariant::Secondary
                                    attr:type="button"
                                    disabled=busy
                                    on:click=move |_| on_close.call(())
                                >
                                    {"Close"}
                                </Button>
                                <Button attr:type="submit" disabled=busy loading=updating>
                                    {move || if updating.get() { "Updating..." } else { "Update" }}
                                </Button>
                            </div>
                        </div>
                    </form>
                </div>
            </div>
            <ConfirmDialog
                is_open=confirming
                title="Are you sure?"
                message="You won't be able to revert this!"
                confirm_label="Yes, delete it!"
                destructive=true
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
            />
        </Show>
    }
}
