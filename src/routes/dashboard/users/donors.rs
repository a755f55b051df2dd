use super::{UserFilters, UserTable, user_commands};
use crate::{
    components::{Alert, AlertKind, Feedback, FeedbackBanner, Pagination, Spinner},
    features::{
        auth::state::{use_api, use_current_user},
        users::{
            client,
            types::{DONORS_PER_PAGE, UserFilter},
        },
    },
    routes::dashboard::PageHeader,
};
use leptos::prelude::*;

/// Donors able to give right now, paged by the API and filtered locally
/// within the current page.
#[component]
pub fn DonorsPage() -> impl IntoView {
    let api = use_api();
    let self_id = use_current_user().map(|user| user.id).unwrap_or_default();
    let page = RwSignal::new(1_u32);
    let filter = RwSignal::new(UserFilter::default());
    let (feedback, set_feedback) = signal::<Feedback>(None);

    let donors = LocalResource::new(move || {
        let api = api.clone();
        let page = page.get();
        async move { client::available_donors(&api, page, DONORS_PER_PAGE).await }
    });
    let total_pages = Signal::derive(move || match donors.get() {
        Some(Ok(result)) => result.total_pages.max(1),
        _ => 1,
    });
    let commands = user_commands(set_feedback, move || donors.refetch());

    view! {
        <div class="space-y-6">
            <PageHeader title="Available donors" subtitle="Donors who are currently able to give blood." />
            <UserFilters filter=filter />
            <FeedbackBanner feedback=feedback />
            <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <Suspense fallback=move || view! { <div class="p-12"><Spinner /></div> }>
                    {move || {
                        let self_id = self_id.clone();
                        match donors.get() {
                            Some(Ok(result)) => {
                                let visible = filter.with(|filter| filter.apply(&result.users));
                                view! {
                                    <p class="px-6 pt-4 text-sm text-gray-500 dark:text-gray-400">
                                        {format!("{} donors available", result.count)}
                                    </p>
                                    <UserTable users=visible self_id=self_id commands=commands />
                                }
                                    .into_any()
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
            <Pagination page=page total_pages=total_pages />
        </div>
    }
}
