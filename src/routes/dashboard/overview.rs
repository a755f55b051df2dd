use super::PageHeader;
use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind, Spinner},
    features::{
        auth::state::{use_api, use_current_user},
        stats::{
            client,
            types::{AvailabilityBand, BloodStat, total_donors},
        },
    },
};
use leptos::prelude::*;

fn band_class(band: AvailabilityBand) -> &'static str {
    match band {
        AvailabilityBand::High => Theme::BADGE_SUCCESS,
        AvailabilityBand::Medium => Theme::BADGE_WARNING,
        AvailabilityBand::Low => Theme::BADGE_DANGER,
    }
}

#[component]
fn StatCard(label: &'static str, value: String, icon: &'static str) -> impl IntoView {
    view! {
        <div class=format!("flex items-center gap-4 {}", Theme::CARD)>
            <span class="material-symbols-outlined rounded-full bg-red-100 p-3 text-red-700">{icon}</span>
            <div>
                <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
                <p class="text-2xl font-bold text-gray-900 dark:text-white">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn BloodTypeCard(stat: BloodStat) -> impl IntoView {
    let band = stat.band();
    let percent = stat.availability_percent();

    view! {
        <div class=format!("space-y-3 {}", Theme::CARD)>
            <div class="flex items-center justify-between">
                <span class="text-xl font-bold text-red-700 dark:text-red-400">{stat.blood_type.clone()}</span>
                <span class=band_class(band)>{band.label()}</span>
            </div>
            <div class="h-2 w-full rounded-full bg-gray-200 dark:bg-gray-700">
                <div class="h-2 rounded-full bg-red-600" style=format!("width: {percent}%")></div>
            </div>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                {format!("{} of {} donors available", stat.available, stat.total)}
            </p>
        </div>
    }
}

/// Dashboard landing page with donor counts per blood type.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let api = use_api();
    let greeting = use_current_user()
        .map_or_else(|| "Welcome back".to_string(), |user| format!("Welcome back, {}", user.name));

    let stats_api = api.clone();
    let stats = LocalResource::new(move || {
        let api = stats_api.clone();
        async move { client::blood_type_stats(&api).await }
    });
    let available = LocalResource::new(move || {
        let api = api.clone();
        async move { client::available_donor_count(&api).await }
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Dashboard" subtitle="Blood availability across RedLink donors." />
            <p class="text-gray-700 dark:text-gray-300">{greeting}</p>
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match (stats.get(), available.get()) {
                    (Some(Ok(stats)), Some(available)) => {
                        let available = available
                            .map_or_else(|_| "-".to_string(), |count| count.to_string());
                        view! {
                            <div class="grid gap-6 md:grid-cols-3">
                                <StatCard label="Registered donors" value=total_donors(&stats).to_string() icon="groups" />
                                <StatCard label="Available now" value=available icon="volunteer_activism" />
                                <StatCard label="Blood types" value=stats.len().to_string() icon="bloodtype" />
                            </div>
                            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                                {stats
                                    .into_iter()
                                    .map(|stat| view! { <BloodTypeCard stat=stat /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    (Some(Err(err)), _) => {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }.into_any()
                    }
                    _ => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
