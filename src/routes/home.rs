use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind, PublicLayout, Spinner},
    features::{
        auth::state::use_api,
        requests::{client, types::latest_open},
    },
    routes::{paths, requests::RequestCard},
};
use leptos::prelude::*;
use leptos_router::components::A;

const LATEST_REQUESTS: usize = 3;

const STEPS: [(&str, &str, &str); 3] = [
    ("how_to_reg", "Register", "Create a donor account with your blood type."),
    ("quiz", "Check eligibility", "Answer a short questionnaire before you donate."),
    ("volunteer_activism", "Save a life", "Answer an open request at a donation point near you."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let requests = LocalResource::new(move || {
        let api = api.clone();
        async move { client::list_all_requests(&api).await }
    });

    view! {
        <PublicLayout>
            <section class="grid gap-8 py-8 md:grid-cols-2 md:items-center">
                <div class="space-y-5">
                    <h1 class="text-4xl font-extrabold tracking-tight text-gray-900 md:text-5xl dark:text-white">
                        "Every drop "
                        <span class=Theme::BRAND_TEXT>"counts"</span>
                    </h1>
                    <p class="text-lg text-gray-500 dark:text-gray-400">
                        "RedLink connects blood donors with the hospitals and patients who need them."
                    </p>
                    <div class="flex flex-wrap gap-3">
                        <A
                            href=paths::GIVE_BLOOD
                            {..}
                            class="inline-flex items-center px-5 py-3 text-sm font-medium text-white bg-red-700 rounded-lg hover:bg-red-800"
                        >
                            "Give blood"
                        </A>
                        <A href=paths::REQUESTS {..} class=Theme::SECONDARY_BUTTON>
                            "See requests"
                        </A>
                    </div>
                </div>
                <div class="hidden md:flex justify-center">
                    <span class="material-symbols-outlined text-[12rem] text-red-100 dark:text-red-900">"bloodtype"</span>
                </div>
            </section>

            <section class="grid gap-6 py-8 md:grid-cols-3">
                {STEPS
                    .into_iter()
                    .map(|(icon, title, body)| {
                        view! {
                            <div class=Theme::CARD>
                                <span class="material-symbols-outlined text-3xl text-red-700">{icon}</span>
                                <h2 class="mt-3 text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
                                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="space-y-4 py-8">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white">"Latest requests"</h2>
                    <A href=paths::REQUESTS {..} class=Theme::LINK>"View all"</A>
                </div>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match requests.get() {
                        Some(Ok(list)) => {
                            let open = latest_open(&list, LATEST_REQUESTS);
                            if open.is_empty() {
                                view! { <Alert kind=AlertKind::Info message="No open requests right now." /> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="grid gap-6 md:grid-cols-3">
                                        {open
                                            .into_iter()
                                            .map(|request| view! { <RequestCard request=request /> })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }.into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </section>
        </PublicLayout>
    }
}
