use super::{UserFilters, UserTable, user_commands};
use crate::{
    components::{Alert, AlertKind, Feedback, FeedbackBanner, Spinner},
    features::{
        auth::state::{use_api, use_current_user},
        users::{client, types::UserFilter},
    },
    routes::{dashboard::PageHeader, paths},
};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UsersListPage() -> impl IntoView {
    let api = use_api();
    let self_id = use_current_user().map(|user| user.id).unwrap_or_default();
    let filter = RwSignal::new(UserFilter::default());
    let (feedback, set_feedback) = signal::<Feedback>(None);

    let users = LocalResource::new(move || {
        let api = api.clone();
        async move { client::list_users(&api).await }
    });
    let commands = user_commands(set_feedback, move || users.refetch());

    view! {
        <div class="space-y-6">
            <PageHeader title="Donors" subtitle="Every registered account on RedLink.">
                <A
                    href=paths::DASHBOARD_USER_ADD
                    {..}
                    class="inline-flex items-center px-4 py-2 text-sm font-medium text-white bg-red-700 rounded-lg hover:bg-red-800"
                >
                    <span class="material-symbols-outlined mr-1 text-base">"person_add"</span>
                    "Add donor"
                </A>
            </PageHeader>
            <UserFilters filter=filter />
            <FeedbackBanner feedback=feedback />
            <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <Suspense fallback=move || view! { <div class="p-12"><Spinner /></div> }>
                    {move || {
                        let self_id = self_id.clone();
                        match users.get() {
                            Some(Ok(list)) => {
                                let visible = filter.with(|filter| filter.apply(&list));
                                view! { <UserTable users=visible self_id=self_id commands=commands /> }.into_any()
                            }
                            Some(Err(err)) => {
                                view! {
                                    <div class="p-4">
                                        <Alert kind=AlertKind::Error message=err.message().to_string() />
                                    </div>
                                }
                                    .into_any()
                            }
                            None => view! { <div class="p-12"><Spinner /></div> }.into_any(),
                        }
                    }}
                </Suspense>
            </div>
        </div>
    }
}
