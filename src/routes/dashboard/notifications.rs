use super::PageHeader;
use crate::{
    app_lib::theme::Theme,
    components::{
        Alert, AlertKind, Button, Feedback, FeedbackBanner, Spinner, TextArea, TextField,
        confirm,
        forms::{bind, setter},
    },
    features::{
        auth::state::use_api,
        notifications::{client, types::NotificationForm},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_navigate, use_params},
    params::Params,
};

#[component]
fn NotificationFields(form: RwSignal<NotificationForm>) -> impl IntoView {
    view! {
        <TextField
            label="Title"
            id="title"
            required=true
            value=bind(form, |f| &f.title)
            on_input=setter(form, |f| &mut f.title)
        />
        <TextArea
            label="Message"
            id="body"
            required=true
            value=bind(form, |f| &f.body)
            on_input=setter(form, |f| &mut f.body)
        />
    }
}

/// Broadcast form plus the history of sent notifications.
#[component]
pub fn NotificationsPage() -> impl IntoView {
    let api = use_api();
    let form = RwSignal::new(NotificationForm::default());
    let (feedback, set_feedback) = signal::<Feedback>(None);

    let list_api = api.clone();
    let notifications = LocalResource::new(move || {
        let api = list_api.clone();
        async move { client::list_notifications(&api).await }
    });

    let send_api = api.clone();
    let send_action = Action::new_local(move |form: &NotificationForm| {
        let api = send_api.clone();
        let form = form.clone();
        async move { client::send_to_all(&api, &form).await }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let api = api.clone();
        let id = id.clone();
        async move { client::delete_notification(&api, &id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(()) => {
                    form.set(NotificationForm::default());
                    set_feedback.set(Some((AlertKind::Success, "Notification sent to all users.".to_string())));
                    notifications.refetch();
                }
                Err(err) => set_feedback.set(Some((AlertKind::Error, err.message().to_string()))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    set_feedback.set(Some((AlertKind::Success, "Notification deleted.".to_string())));
                    notifications.refetch();
                }
                Err(err) => set_feedback.set(Some((AlertKind::Error, err.message().to_string()))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_feedback.set(None);
        let current = form.get_untracked();
        if let Err(err) = current.validate() {
            set_feedback.set(Some((AlertKind::Error, err.message().to_string())));
            return;
        }
        send_action.dispatch(current);
    };

    view! {
        <div class="space-y-6">
            <PageHeader title="Notifications" subtitle="Send an announcement to every RedLink user." />
            <form class=format!("max-w-2xl space-y-5 {}", Theme::CARD) on:submit=on_submit>
                <NotificationFields form=form />
                <Button button_type="submit" disabled=send_action.pending()>
                    "Send to all"
                </Button>
            </form>
            <FeedbackBanner feedback=feedback />
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match notifications.get() {
                    Some(Ok(list)) if list.is_empty() => {
                        view! { <Alert kind=AlertKind::Info message="No notifications sent yet." /> }.into_any()
                    }
                    Some(Ok(list)) => {
                        view! {
                            <ul class="space-y-3">
                                {list
                                    .into_iter()
                                    .map(|notification| {
                                        let delete_id = notification.id.clone();
                                        view! {
                                            <li class=format!("flex items-start justify-between gap-4 {}", Theme::CARD)>
                                                <div class="space-y-1">
                                                    <h3 class="font-semibold text-gray-900 dark:text-white">
                                                        {notification.title.clone()}
                                                    </h3>
                                                    <p class="text-sm text-gray-600 dark:text-gray-300">{notification.body.clone()}</p>
                                                    <p class="text-xs text-gray-400">{notification.created_at.clone()}</p>
                                                </div>
                                                <div class="flex shrink-0 gap-3">
                                                    <A href=paths::notification_edit(&notification.id) {..} class=Theme::ROW_ACTION>
                                                        "Edit"
                                                    </A>
                                                    <button
                                                        type="button"
                                                        class=Theme::DANGER_ACTION
                                                        on:click=move |_| {
                                                            if confirm("Delete this notification?") {
                                                                delete_action.dispatch(delete_id.clone());
                                                            }
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[derive(Params, PartialEq, Clone)]
struct NotificationParams {
    id: Option<String>,
}

#[component]
pub fn EditNotificationPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let params = use_params::<NotificationParams>();
    let notification_id = Signal::derive(move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    });
    let form = RwSignal::new(NotificationForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let load_api = api.clone();
    let notification = LocalResource::new(move || {
        let api = load_api.clone();
        let id = notification_id.get();
        async move { client::get_notification(&api, &id).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(notification)) = notification.get() {
            form.set(NotificationForm::from_notification(&notification));
        }
    });

    let save_action = Action::new_local(move |(id, form): &(String, NotificationForm)| {
        let api = api.clone();
        let id = id.clone();
        let form = form.clone();
        async move { client::update_notification(&api, &id, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => navigate(paths::DASHBOARD_NOTIFICATIONS, Default::default()),
                Err(err) => set_error.set(Some(err.message().to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        save_action.dispatch((notification_id.get_untracked(), form.get_untracked()));
    };

    view! {
        <div class="max-w-2xl space-y-6">
            <PageHeader title="Edit notification" />
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match notification.get() {
                    Some(Ok(_)) => {
                        view! {
                            <form class=format!("space-y-5 {}", Theme::CARD) on:submit=on_submit>
                                <NotificationFields form=form />
                                <Button button_type="submit" disabled=save_action.pending()>
                                    "Save changes"
                                </Button>
                                {move || {
                                    error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                                }}
                            </form>
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
