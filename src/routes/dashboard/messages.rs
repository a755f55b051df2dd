use super::PageHeader;
use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind, Feedback, FeedbackBanner, Spinner, confirm},
    features::{
        auth::state::use_api,
        messages::{
            client,
            types::{ContactMessage, mark_read_locally, unread_count},
        },
    },
};
use leptos::prelude::*;

/// Contact inbox. Opening a message marks it read right away in the list and
/// then tells the API; a failed update is reported but not rolled back.
#[component]
pub fn MessagesPage() -> impl IntoView {
    let api = use_api();
    let messages = RwSignal::new(Vec::<ContactMessage>::new());
    let selected = RwSignal::new(None::<String>);
    let (feedback, set_feedback) = signal::<Feedback>(None);

    let list_api = api.clone();
    let inbox = LocalResource::new(move || {
        let api = list_api.clone();
        async move { client::list_messages(&api).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(list)) = inbox.get() {
            messages.set(list);
        }
    });

    let read_api = api.clone();
    let read_action = Action::new_local(move |id: &String| {
        let api = read_api.clone();
        let id = id.clone();
        async move { client::mark_message_read(&api, &id).await }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let api = api.clone();
        let id = id.clone();
        async move { client::delete_message(&api, &id).await.map(|()| id) }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = read_action.value().get() {
            log::warn!("failed to mark message read: {err}");
            set_feedback.set(Some((AlertKind::Error, err.message().to_string())));
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(id) => {
                    messages.update(|list| list.retain(|message| message.id != id));
                    if selected.get_untracked().as_deref() == Some(id.as_str()) {
                        selected.set(None);
                    }
                    set_feedback.set(Some((AlertKind::Success, "Message deleted.".to_string())));
                }
                Err(err) => set_feedback.set(Some((AlertKind::Error, err.message().to_string()))),
            }
        }
    });

    let open = move |id: String| {
        let mut changed = false;
        messages.update(|list| changed = mark_read_locally(list, &id));
        selected.set(Some(id.clone()));
        if changed {
            read_action.dispatch(id);
        }
    };

    let current = Signal::derive(move || {
        let id = selected.get()?;
        messages.with(|list| list.iter().find(|message| message.id == id).cloned())
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Messages" subtitle="Questions sent through the contact form." />
            <FeedbackBanner feedback=feedback />
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match inbox.get() {
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                    Some(Ok(_)) => {
                        view! {
                            <div class="grid gap-6 lg:grid-cols-3">
                                <div class="lg:col-span-1 space-y-2">
                                    <p class="text-sm text-gray-500 dark:text-gray-400">
                                        {move || messages.with(|list| format!("{} unread", unread_count(list)))}
                                    </p>
                                    <ul class="divide-y divide-gray-200 rounded-lg border border-gray-200 bg-white dark:divide-gray-700 dark:border-gray-700 dark:bg-gray-800">
                                        <For
                                            each=move || messages.get()
                                            key=|message| (message.id.clone(), message.is_read())
                                            children=move |message| {
                                                let id = message.id.clone();
                                                let active_id = message.id.clone();
                                                view! {
                                                    <li>
                                                        <button
                                                            type="button"
                                                            class="flex w-full items-start gap-3 px-4 py-3 text-left hover:bg-gray-50 dark:hover:bg-gray-700/50"
                                                            class:bg-red-50=move || selected.get().as_deref() == Some(active_id.as_str())
                                                            on:click=move |_| open(id.clone())
                                                        >
                                                            <span class="inline-flex h-9 w-9 shrink-0 items-center justify-center rounded-full bg-red-100 text-sm font-semibold text-red-800">
                                                                {message.initial()}
                                                            </span>
                                                            <span class="min-w-0 flex-1">
                                                                <span
                                                                    class="block truncate text-sm text-gray-900 dark:text-white"
                                                                    class:font-semibold=!message.is_read()
                                                                >
                                                                    {message.subject.clone()}
                                                                </span>
                                                                <span class="block truncate text-xs text-gray-500 dark:text-gray-400">
                                                                    {message.name.clone()}
                                                                </span>
                                                            </span>
                                                        </button>
                                                    </li>
                                                }
                                            }
                                        />
                                    </ul>
                                </div>
                                <div class=format!("lg:col-span-2 {}", Theme::CARD)>
                                    {move || match current.get() {
                                        Some(message) => {
                                            let delete_id = message.id.clone();
                                            view! {
                                                <div class="space-y-4">
                                                    <div class="flex items-start justify-between gap-4">
                                                        <div>
                                                            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                                                                {message.subject.clone()}
                                                            </h2>
                                                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                                                {format!("{} <{}>", message.name, message.email)}
                                                            </p>
                                                            <p class="text-xs text-gray-400">{message.created.clone()}</p>
                                                        </div>
                                                        <button
                                                            type="button"
                                                            class=Theme::DANGER_ACTION
                                                            on:click=move |_| {
                                                                if confirm("Delete this message?") {
                                                                    delete_action.dispatch(delete_id.clone());
                                                                }
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                    <p class="whitespace-pre-line text-gray-700 dark:text-gray-300">
                                                        {message.message.clone()}
                                                    </p>
                                                </div>
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! {
                                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                                    "Select a message to read it."
                                                </p>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Suspense>
        </div>
    }
}
