//! Inline banners for form results and load failures. Messages come from
//! `AppError` or fixed strings and never include tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-800 dark:border-red-500 dark:bg-red-950/40 dark:text-red-200"
        }
        AlertKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
        }
        AlertKind::Info => {
            "rounded-lg border border-gray-200 bg-gray-50 px-4 py-3 text-sm text-gray-700 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-200"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}

/// Latest outcome of a page action, if any.
pub type Feedback = Option<(AlertKind, String)>;

/// Renders the banner for a [`Feedback`] signal.
#[component]
pub fn FeedbackBanner(#[prop(into)] feedback: Signal<Feedback>) -> impl IntoView {
    move || {
        feedback
            .get()
            .map(|(kind, message)| view! { <Alert kind=kind message=message /> })
    }
}
