use super::status_badge;
use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind, Spinner},
    features::{auth::state::use_api, users::client},
    routes::{dashboard::PageHeader, paths},
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params, params::Params};

#[derive(Params, PartialEq, Clone)]
struct UserParams {
    id: Option<String>,
}

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let api = use_api();
    let params = use_params::<UserParams>();
    let user = LocalResource::new(move || {
        let api = api.clone();
        let id = params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        async move { client::get_user(&api, &id).await }
    });

    view! {
        <div class="max-w-3xl space-y-6">
            <PageHeader title="Donor details" subtitle="Profile as stored by RedLink." />
            <div class=Theme::CARD>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match user.get() {
                        Some(Ok(detail)) => {
                            let rows = [
                                ("Email", detail.email.clone()),
                                ("Phone number", detail.phone_number.clone()),
                                ("Blood type", detail.blood_type.clone()),
                                ("Gender", detail.gender.clone()),
                                ("Date of birth", detail.date_of_birth.clone()),
                                ("Address", detail.address.clone()),
                                ("Last donation", detail.last_donation_date.clone()),
                                ("Role", detail.role_label().to_string()),
                            ];
                            view! {
                                <div class="space-y-6">
                                    <div class="flex items-center justify-between">
                                        <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                                            {detail.name.clone()}
                                        </h2>
                                        <span class=status_badge(detail.status)>{detail.status.label()}</span>
                                    </div>
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
                                    <A href=paths::user_edit(&detail.id) {..} class=Theme::LINK>"Edit"</A>
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
            <A href=paths::DASHBOARD_USERS {..} class=Theme::LINK>"Back to donors"</A>
        </div>
    }
}
