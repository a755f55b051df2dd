use super::PageHeader;
use crate::{
    app_lib::{AppError, theme::Theme},
    components::{
        Alert, AlertKind, Button, Feedback, FeedbackBanner, Pagination, SelectField, Spinner,
        TextField, confirm, forms::RequestFields, ui::same_label,
    },
    features::{
        auth::state::use_api,
        requests::{
            client,
            types::{DoneStatus, RequestForm, RequestQuery},
        },
        users::types::BLOOD_TYPES,
    },
    routes::{paths, requests::AddRequestForm},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_navigate, use_params},
    params::Params,
};

#[derive(Clone)]
enum RequestCommand {
    SetStatus(String, DoneStatus),
    Delete(String),
}

/// Paginated request table. Filters go to the API and reset to page one.
#[component]
pub fn DashboardRequestsPage() -> impl IntoView {
    let api = use_api();
    let page = RwSignal::new(1_u32);
    let (name, set_name) = signal(String::new());
    let (blood_type, set_blood_type) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (feedback, set_feedback) = signal::<Feedback>(None);

    let list_api = api.clone();
    let requests = LocalResource::new(move || {
        let api = list_api.clone();
        let query = RequestQuery {
            page: page.get(),
            name: name.get(),
            blood_type: blood_type.get(),
            location: location.get(),
            ..RequestQuery::default()
        };
        async move { client::list_requests(&api, &query).await }
    });
    let total_pages = Signal::derive(move || match requests.get() {
        Some(Ok(result)) => {
            let limit = RequestQuery::default().limit;
            u32::try_from(result.total_pages(limit)).unwrap_or(u32::MAX)
        }
        _ => 1,
    });

    let command_action = Action::new_local(move |command: &RequestCommand| {
        let api = api.clone();
        let command = command.clone();
        async move {
            match command {
                RequestCommand::SetStatus(id, status) => {
                    client::set_request_status(&api, &id, status).await?;
                    Ok::<_, AppError>("Request status updated.")
                }
                RequestCommand::Delete(id) => {
                    client::delete_request(&api, &id).await?;
                    Ok("Request deleted.")
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = command_action.value().get() {
            match result {
                Ok(message) => {
                    set_feedback.set(Some((AlertKind::Success, message.to_string())));
                    requests.refetch();
                }
                Err(err) => set_feedback.set(Some((AlertKind::Error, err.message().to_string()))),
            }
        }
    });

    let filter_input = move |setter: WriteSignal<String>| {
        move |value: String| {
            setter.set(value);
            page.set(1);
        }
    };

    view! {
        <div class="space-y-6">
            <PageHeader title="Blood requests" subtitle="Every request posted on RedLink.">
                <A
                    href=paths::DASHBOARD_REQUEST_ADD
                    {..}
                    class="inline-flex items-center px-4 py-2 text-sm font-medium text-white bg-red-700 rounded-lg hover:bg-red-800"
                >
                    <span class="material-symbols-outlined mr-1 text-base">"add"</span>
                    "Add request"
                </A>
            </PageHeader>
            <div class="grid gap-4 md:grid-cols-3">
                <TextField
                    label="Patient name"
                    id="filter_name"
                    value=name
                    on_input=filter_input(set_name)
                />
                <SelectField
                    label="Blood type"
                    id="filter_blood_type"
                    placeholder="All blood types"
                    options=same_label(&BLOOD_TYPES)
                    value=blood_type
                    on_change=filter_input(set_blood_type)
                />
                <TextField
                    label="Location"
                    id="filter_location"
                    value=location
                    on_input=filter_input(set_location)
                />
            </div>
            <FeedbackBanner feedback=feedback />
            <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class=Theme::TH>"Patient"</th>
                            <th scope="col" class=Theme::TH>"Blood type"</th>
                            <th scope="col" class=Theme::TH>"Units"</th>
                            <th scope="col" class=Theme::TH>"Donation point"</th>
                            <th scope="col" class=Theme::TH>"Date"</th>
                            <th scope="col" class=Theme::TH>"Status"</th>
                            <th scope="col" class=Theme::TH>
                                <span class="sr-only">"Actions"</span>
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="7" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match requests.get() {
                                Some(Ok(result)) if result.requests.is_empty() => {
                                    view! {
                                        <tr>
                                            <td colspan="7" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No requests found."
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                Some(Ok(result)) => {
                                    result
                                        .requests
                                        .into_iter()
                                        .map(|request| {
                                            let status = request.done_status;
                                            let status_id = request.id.clone();
                                            let delete_id = request.id.clone();
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class=format!("{} font-medium text-gray-900 dark:text-white", Theme::TD)>
                                                        {request.patient_name.clone()}
                                                    </td>
                                                    <td class=Theme::TD>{request.blood_type.clone()}</td>
                                                    <td class=Theme::TD>{request.quantity.clone()}</td>
                                                    <td class=Theme::TD>{request.donation_point.clone()}</td>
                                                    <td class=Theme::TD>{request.request_day().to_string()}</td>
                                                    <td class=Theme::TD>
                                                        <select
                                                            class="rounded-lg border border-gray-300 bg-gray-50 p-1.5 text-sm dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                                                            aria-label="Status"
                                                            on:change=move |event| {
                                                                let next = DoneStatus::parse(&event_target_value(&event));
                                                                command_action.dispatch(RequestCommand::SetStatus(status_id.clone(), next));
                                                            }
                                                        >
                                                            {DoneStatus::ALL
                                                                .into_iter()
                                                                .map(|option| {
                                                                    view! {
                                                                        <option value=option.as_str() selected=option == status>
                                                                            {option.label()}
                                                                        </option>
                                                                    }
                                                                })
                                                                .collect_view()}
                                                        </select>
                                                    </td>
                                                    <td class=format!("{} text-right space-x-3", Theme::TD)>
                                                        <A href=paths::request_edit(&request.id) {..} class=Theme::ROW_ACTION>"Edit"</A>
                                                        <button
                                                            type="button"
                                                            class=Theme::DANGER_ACTION
                                                            on:click=move |_| {
                                                                if confirm("Delete this request?") {
                                                                    command_action.dispatch(RequestCommand::Delete(delete_id.clone()));
                                                                }
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                                Some(Err(err)) => {
                                    view! {
                                        <tr>
                                            <td colspan="7" class="px-6 py-4">
                                                <Alert kind=AlertKind::Error message=err.message().to_string() />
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <tr>
                                            <td colspan="7" class="px-6 py-12 text-center"><Spinner /></td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>
            <Pagination page=page total_pages=total_pages />
        </div>
    }
}

#[component]
pub fn DashboardAddRequestPage() -> impl IntoView {
    view! {
        <div class="max-w-4xl">
            <AddRequestForm redirect_to=paths::DASHBOARD_REQUESTS />
        </div>
    }
}

#[derive(Params, PartialEq, Clone)]
struct RequestParams {
    id: Option<String>,
}

#[component]
pub fn EditRequestPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let params = use_params::<RequestParams>();
    let request_id = Signal::derive(move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    });
    let form = RwSignal::new(RequestForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let load_api = api.clone();
    let request = LocalResource::new(move || {
        let api = load_api.clone();
        let id = request_id.get();
        async move { client::get_request(&api, &id).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(request)) = request.get() {
            form.set(RequestForm::from_request(&request));
        }
    });

    let save_action = Action::new_local(move |(id, form): &(String, RequestForm)| {
        let api = api.clone();
        let id = id.clone();
        let form = form.clone();
        async move { client::update_request(&api, &id, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => navigate(paths::DASHBOARD_REQUESTS, Default::default()),
                Err(err) => set_error.set(Some(err.message().to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        let current = form.get_untracked();
        if let Err(err) = current.validate() {
            set_error.set(Some(err.message().to_string()));
            return;
        }
        save_action.dispatch((request_id.get_untracked(), current));
    };

    view! {
        <div class="max-w-4xl space-y-6">
            <PageHeader title="Edit request" subtitle="Correct the details of a blood request." />
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match request.get() {
                    Some(Ok(_)) => {
                        view! {
                            <form class=format!("space-y-6 {}", Theme::CARD) on:submit=on_submit>
                                <RequestFields form=form />
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
