use crate::api::{Priority, RequestStatus, Stored};
use crate::pages::requests::types::status_badge_label;
use leptos::*;

const MUTED_BADGE: &str = "bg-surface-muted text-fg-muted";

pub fn status_badge_class(status: Option<RequestStatus>) -> &'static str {
    match status {
        Some(RequestStatus::Pending) => "bg-status-warning-bg text-status-warning-text",
        Some(RequestStatus::InProgress) => "bg-status-info-bg text-status-info-text",
        Some(RequestStatus::Completed) => "bg-status-success-bg text-status-success-text",
        None => MUTED_BADGE,
    }
}

pub fn priority_badge_class(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(Priority::High) => "bg-status-error-bg text-status-error-text",
        Some(Priority::Medium) => "bg-status-warning-bg text-status-warning-text",
        Some(Priority::Low) => "bg-status-success-bg text-status-success-text",
        None => MUTED_BADGE,
    }
}

#[component]
pub fn StatusBadge(status: Option<Stored<RequestStatus>>) -> impl IntoView {
    let class = status_badge_class(status.as_ref().and_then(|stored| stored.known()));
    let label = status_badge_label(status.as_ref()).to_string();
    view! {
        <span class=format!("inline-flex rounded-full px-2 py-1 text-xs font-semibold {}", class)>
            {label}
        </span>
    }
}

#[component]
pub fn PriorityBadge(priority: Stored<Priority>) -> impl IntoView {
    let class = priority_badge_class(priority.known());
    let label = priority.as_str().to_string();
    view! {
        <span class=format!("inline-flex rounded-full px-2 py-1 text-xs font-semibold {}", class)>
            {label}
        </span>
    }
}
