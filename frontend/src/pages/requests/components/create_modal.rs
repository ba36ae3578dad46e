use crate::components::common::{Button, ButtonVariant};
use crate::pages::requests::components::fields::{SelectField, TextField};
use crate::pages::requests::types::{
    ATTACHMENT_ACCEPT, BLOCK_OPTIONS, DEPARTMENT_OPTIONS, FLOOR_OPTIONS, PRIORITY_OPTIONS,
    ROOM_OPTIONS, SERVICE_OPTIONS,
};
use crate::pages::requests::utils::NewRequestFormState;
use leptos::ev::{Event, KeyboardEvent, SubmitEvent};
use leptos::*;

fn is_submit_disabled(submitting: bool, reading_attachment: bool) -> bool {
    submitting || reading_attachment
}

#[cfg(target_arch = "wasm32")]
fn read_attachment(ev: Event, state: NewRequestFormState) {
    use crate::api::Attachment;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let file = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.item(0));
    let target = state.attachment_signal();
    let reading = state.reading_attachment_signal();
    let Some(file) = file else {
        target.set(None);
        return;
    };
    reading.set(true);
    spawn_local(async move {
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => target.set(Some(Attachment {
                file_name: file.name(),
                mime_type: file.type_(),
                bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
            })),
            Err(err) => {
                log::warn!("reading attachment failed: {:?}", err);
                target.set(None);
            }
        }
        reading.set(false);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn read_attachment(_ev: Event, _state: NewRequestFormState) {}

#[component]
pub fn CreateRequestModal(
    open: Signal<bool>,
    state: NewRequestFormState,
    submitting: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let attachment = state.attachment_signal();
    let reading = state.reading_attachment_signal();
    let attachment_name = move || {
        attachment.with(|file| file.as_ref().map(|f| f.file_name.clone()))
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[51] w-full max-w-2xl rounded-lg bg-surface-elevated shadow-xl border border-border p-6"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg mb-4">{"New Request"}</h2>
                    <form
                        class="space-y-4"
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            on_submit.call(());
                        }
                    >
                        <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                            <SelectField label="Floor" placeholder="Select Floor" options=&FLOOR_OPTIONS value=state.floor_signal() disabled=submitting/>
                            <SelectField label="Room" placeholder="Select Room" options=&ROOM_OPTIONS value=state.room_signal() disabled=submitting/>
                            <SelectField label="Block" placeholder="Select Block" options=&BLOCK_OPTIONS value=state.block_signal() disabled=submitting/>
                            <TextField label="Guest Name" value=state.guest_name_signal() placeholder="Guest Name" disabled=submitting/>
                            <TextField label="Phone Number" value=state.phone_number_signal() input_type="tel" placeholder="Phone Number" disabled=submitting/>
                            <SelectField label="Service" placeholder="Select Service" options=&SERVICE_OPTIONS value=state.service_signal() disabled=submitting/>
                            <SelectField label="Department" placeholder="Select Department" options=&DEPARTMENT_OPTIONS value=state.department_signal() disabled=submitting/>
                            <SelectField label="Priority" placeholder="Select Priority" options=&PRIORITY_OPTIONS value=state.priority_signal() disabled=submitting/>
                        </div>
                        <label class="block text-sm font-medium text-fg">
                            {"Attachment"}
                            <input
                                type="file"
                                accept=ATTACHMENT_ACCEPT
                                class="mt-1 block w-full text-sm text-fg"
                                disabled=move || submitting.get()
                                on:change=move |ev| read_attachment(ev, state)
                            />
                        </label>
                        {move || attachment_name().map(|name| view! {
                            <p class="text-xs text-fg-muted">{name}</p>
                        })}
                        <div class="flex justify-end gap-2">
                            <Button
                                variant=ButtonVariant::Secondary
                                attr:type="button"
                                disabled=submitting
                                on:click=move |_| on_close.call(())
                            >
                                {"Cancel"}
                            </Button>
                            <Button
                                attr:type="submit"
                                loading=submitting
                                disabled=Signal::derive(move || {
                                    is_submit_disabled(submitting.get(), reading.get())
                                })
                            >
                                {move || {
                                    if submitting.get() {
                                        "Submitting..."
                                    } else if reading.get() {
                                        "Reading file..."
                                    } else {
                                        "Submit"
                                    }
                                }}
                            </Button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
