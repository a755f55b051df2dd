use crate::{
    app_lib::{AppError, theme::Theme},
    components::{
        Alert, AlertKind, Feedback, FeedbackBanner, PublicLayout, Spinner, confirm,
        layout::use_viewer,
    },
    features::{
        auth::state::use_api,
        requests::{
            client,
            types::{BloodRequest, DoneStatus, can_manage_request},
        },
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_navigate, use_params},
    params::Params,
};

#[derive(Params, PartialEq, Clone)]
struct RequestParams {
    id: Option<String>,
}

#[component]
pub fn RequestDetailPage() -> impl IntoView {
    view! {
        <PublicLayout>
            <RequestDetail />
        </PublicLayout>
    }
}

#[component]
fn RequestDetail() -> impl IntoView {
    let api = use_api();
    let viewer = use_viewer();
    let navigate = use_navigate();
    let params = use_params::<RequestParams>();
    let (feedback, set_feedback) = signal::<Feedback>(None);

    let fetch_api = api.clone();
    let request = LocalResource::new(move || {
        let api = fetch_api.clone();
        let id = params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        async move { client::get_request(&api, &id).await }
    });

    let status_api = api.clone();
    let status_action = Action::new_local(move |(id, status): &(String, DoneStatus)| {
        let api = status_api.clone();
        let id = id.clone();
        let status = *status;
        async move { client::set_request_status(&api, &id, status).await }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let api = api.clone();
        let id = id.clone();
        async move { client::delete_request(&api, &id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = status_action.value().get() {
            match result {
                Ok(()) => {
                    set_feedback.set(Some((AlertKind::Success, "Request status updated.".to_string())));
                    request.refetch();
                }
                Err(err) => set_feedback.set(Some((AlertKind::Error, err.message().to_string()))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => navigate(paths::REQUESTS, Default::default()),
                Err(err) => set_feedback.set(Some((AlertKind::Error, err.message().to_string()))),
            }
        }
    });

    let render = move |request: BloodRequest| {
        let manage = can_manage_request(viewer.get().as_ref(), &request);
        let next = if request.is_complete() {
            DoneStatus::NonComplete
        } else {
            DoneStatus::Complete
        };
        let status_id = request.id.clone();
        let delete_id = request.id.clone();
        let rows = [
            ("Blood type", request.blood_type.clone()),
            ("Units needed", request.quantity.clone()),
            ("Urgency", request.urgency.clone()),
            ("Request date", request.request_day().to_string()),
            ("Donation point", request.donation_point.clone()),
            ("Hospital", request.hospital_name.clone()),
            ("Contact number", request.contact_number.clone()),
            ("Email", request.email.clone()),
            ("Transportation", request.transportation.clone()),
            ("Status", request.done_status.label().to_string()),
        ];

        view! {
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{request.patient_name.clone()}</h1>
                <dl class="grid gap-4 sm:grid-cols-2">
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            let value = if value.trim().is_empty() { "-".to_string() } else { value };
                            view! {
                                <div>
                                    <dt class="text-sm font-medium text-gray-500 dark:text-gray-400">{label}</dt>
                                    <dd class="text-gray-900 dark:text-white">{value}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
                {(!request.description.trim().is_empty())
                    .then(|| {
                        view! {
                            <div>
                                <h2 class="text-sm font-medium text-gray-500 dark:text-gray-400">"Description"</h2>
                                <p class="mt-1 text-gray-700 dark:text-gray-300">{request.description.clone()}</p>
                            </div>
                        }
                    })}
                {manage
                    .then(|| {
                        view! {
                            <div class="flex gap-4 border-t border-gray-200 pt-4 dark:border-gray-700">
                                <button
                                    type="button"
                                    class=Theme::ROW_ACTION
                                    on:click=move |_| {
                                        status_action.dispatch((status_id.clone(), next));
                                    }
                                >
                                    {if next == DoneStatus::Complete { "Mark complete" } else { "Reopen" }}
                                </button>
                                <button
                                    type="button"
                                    class=Theme::DANGER_ACTION
                                    on:click=move |_| {
                                        if confirm("Delete this request?") {
                                            delete_action.dispatch(delete_id.clone());
                                        }
                                    }
                                >
                                    "Delete"
                                </button>
                            </div>
                        }
                    })}
            </div>
        }
    };

    view! {
        <div class=format!("max-w-3xl mx-auto space-y-4 {}", Theme::CARD)>
            <A href=paths::REQUESTS {..} class=Theme::LINK>"Back to requests"</A>
            <FeedbackBanner feedback=feedback />
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match request.get() {
                    Some(Ok(detail)) => render(detail).into_any(),
                    Some(Err(err)) => {
                        let message = match err {
                            AppError::Http { status: 404, .. } => "Request not found.".to_string(),
                            other => other.message().to_string(),
                        };
                        view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
