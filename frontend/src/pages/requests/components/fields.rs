use crate::pages::requests::types::SelectOption;
use leptos::*;

const INPUT_CLASS: &str =
    "mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg disabled:opacity-60";

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    options: &'static [SelectOption],
    value: RwSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|(option_value, option_label)| {
                        let option_value = *option_value;
                        view! {
                            <option
                                value=option_value
                                selected=move || value.with(|current| current == option_value)
                            >
                                {*option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            <input
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn ReadOnlyField(#[prop(into)] label: String, #[prop(into)] value: MaybeSignal<String>) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            <input type="text" class=INPUT_CLASS readonly=true prop:value=move || value.get()/>
        </label>
    }
}
