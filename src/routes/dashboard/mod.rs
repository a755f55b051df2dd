//! Pages nested under `/dashboard`. The layout's staff gate has already
//! resolved the user, so pages read it from context instead of asking again.

mod messages;
mod notifications;
mod overview;
mod requests;
mod users;

pub use messages::MessagesPage;
pub use notifications::{EditNotificationPage, NotificationsPage};
pub use overview::OverviewPage;
pub use requests::{DashboardAddRequestPage, DashboardRequestsPage, EditRequestPage};
pub use users::{AddUserPage, DonorsPage, EditUserPage, UserDetailPage, UsersListPage};

use leptos::prelude::*;

/// Title row shared by dashboard pages; `children` holds header actions.
#[component]
fn PageHeader(
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center justify-between gap-4">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">{title}</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">{subtitle}</p>
            </div>
            {children.map(|children| children())}
        </div>
    }
}
