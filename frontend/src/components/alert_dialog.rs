use leptos::ev::KeyboardEvent;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Error,
}

impl AlertKind {
    fn accent_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "bg-status-success-bg text-status-success-text",
            AlertKind::Warning => "bg-status-warning-bg text-status-warning-text",
            AlertKind::Error => "bg-status-error-bg text-status-error-text",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            AlertKind::Success => "✓",
            AlertKind::Warning => "!",
            AlertKind::Error => "✕",
        }
    }
}

/// Blocking message shown until the user acknowledges it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub text: String,
}

impl Alert {
    pub fn new(kind: AlertKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, title, text)
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, title, text)
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, title, text)
    }
}

#[component]
pub fn AlertDialog(
    alert: Signal<Option<Alert>>,
    on_dismiss: Callback<()>,
    #[prop(optional, into)] button_label: MaybeSignal<String>,
) -> impl IntoView {
    let button_text = Signal::derive(move || {
        let text = button_label.get();
        if text.trim().is_empty() {
            "Okay".to_string()
        } else {
            text
        }
    });
    let dismiss_on_backdrop = on_dismiss;
    let dismiss_on_esc = on_dismiss;
    let dismiss_on_button = on_dismiss;

    view! {
        <Show when=move || alert.with(|a| a.is_some())>
            <div class="fixed inset-0 z-[80] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| dismiss_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[81] w-full max-w-sm rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4 text-center"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" || ev.key() == "Enter" {
                            ev.prevent_default();
                            dismiss_on_esc.call(());
                        }
                    }
                >
                    {move || alert.get().map(|alert| view! {
                        <div class=format!(
                            "mx-auto flex h-12 w-12 items-center justify-center rounded-full text-xl font-bold {}",
                            alert.kind.accent_class()
                        )>
                            {alert.kind.icon()}
                        </div>
                        <h2 class="text-lg font-semibold text-fg">{alert.title}</h2>
                        <p class="text-sm text-fg-muted">{alert.text}</p>
                    })}
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-6 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| dismiss_on_button.call(())
                    >
                        {move || button_text.get()}
                    </button>
                </div>
            </div>
        </Show>
    }
}
