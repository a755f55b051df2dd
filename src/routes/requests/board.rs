use super::RequestCard;
use crate::{
    app_lib::{AppError, theme::Theme},
    components::{
        Alert, AlertKind, Feedback, FeedbackBanner, PublicLayout, SelectField, Spinner, TextField,
        confirm, layout::use_viewer, ui::same_label,
    },
    features::{
        auth::state::use_api,
        requests::{
            client,
            types::{DoneStatus, can_manage_request, filter_requests},
        },
        users::types::BLOOD_TYPES,
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

/// Public list of blood requests. Filtering happens in the browser; owners
/// and admins can close or delete their own requests from here.
#[component]
pub fn RequestBoardPage() -> impl IntoView {
    view! {
        <PublicLayout>
            <RequestBoard />
        </PublicLayout>
    }
}

#[derive(Clone)]
enum BoardAction {
    SetStatus(String, DoneStatus),
    Delete(String),
}

#[component]
fn RequestBoard() -> impl IntoView {
    let api = use_api();
    let viewer = use_viewer();
    let (donation_point, set_donation_point) = signal(String::new());
    let (blood_type, set_blood_type) = signal(String::new());
    let (feedback, set_feedback) = signal::<Feedback>(None);

    let list_api = api.clone();
    let requests = LocalResource::new(move || {
        let api = list_api.clone();
        async move { client::list_all_requests(&api).await }
    });

    let board_action = Action::new_local(move |action: &BoardAction| {
        let api = api.clone();
        let action = action.clone();
        async move {
            match action {
                BoardAction::SetStatus(id, status) => {
                    client::set_request_status(&api, &id, status).await?;
                    Ok::<_, AppError>("Request status updated.")
                }
                BoardAction::Delete(id) => {
                    client::delete_request(&api, &id).await?;
                    Ok("Request deleted.")
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = board_action.value().get() {
            match result {
                Ok(message) => {
                    set_feedback.set(Some((AlertKind::Success, message.to_string())));
                    requests.refetch();
                }
                Err(err) => set_feedback.set(Some((AlertKind::Error, err.message().to_string()))),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div class="space-y-1">
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"Blood requests"</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Patients and hospitals looking for donors right now."
                    </p>
                </div>
                <A
                    href=paths::ADD_REQUEST
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-red-700 rounded-lg hover:bg-red-800"
                >
                    <span class="material-symbols-outlined mr-2 text-base">"add"</span>
                    "Request blood"
                </A>
            </div>

            <div class="grid gap-4 md:grid-cols-2">
                <TextField
                    label="Donation point"
                    id="filter_donation_point"
                    placeholder="Search by location"
                    value=donation_point
                    on_input=move |value| set_donation_point.set(value)
                />
                <SelectField
                    label="Blood type"
                    id="filter_blood_type"
                    placeholder="All blood types"
                    options=same_label(&BLOOD_TYPES)
                    value=blood_type
                    on_change=move |value| set_blood_type.set(value)
                />
            </div>

            <FeedbackBanner feedback=feedback />

            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match requests.get() {
                    Some(Ok(list)) => {
                        let visible = filter_requests(&list, &donation_point.get(), &blood_type.get());
                        if visible.is_empty() {
                            return view! { <Alert kind=AlertKind::Info message="No requests match your search." /> }
                                .into_any();
                        }
                        let user = viewer.get();
                        view! {
                            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                                {visible
                                    .into_iter()
                                    .map(|request| {
                                        let manage = can_manage_request(user.as_ref(), &request);
                                        let id = request.id.clone();
                                        let next = if request.is_complete() {
                                            DoneStatus::NonComplete
                                        } else {
                                            DoneStatus::Complete
                                        };
                                        view! {
                                            <RequestCard request=request>
                                                {manage
                                                    .then(|| {
                                                        let status_id = id.clone();
                                                        let delete_id = id.clone();
                                                        view! {
                                                            <button
                                                                type="button"
                                                                class=Theme::ROW_ACTION
                                                                on:click=move |_| {
                                                                    board_action.dispatch(BoardAction::SetStatus(status_id.clone(), next));
                                                                }
                                                            >
                                                                {if next == DoneStatus::Complete { "Mark complete" } else { "Reopen" }}
                                                            </button>
                                                            <button
                                                                type="button"
                                                                class=Theme::DANGER_ACTION
                                                                on:click=move |_| {
                                                                    if confirm("Delete this request?") {
                                                                        board_action.dispatch(BoardAction::Delete(delete_id.clone()));
                                                                    }
                                                                }
                                                            >
                                                                "Delete"
                                                            </button>
                                                        }
                                                    })}
                                            </RequestCard>
                                        }
                                    })
                                    .collect_view()}
                            </div>
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
