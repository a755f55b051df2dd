//! Frame for every `/dashboard` route. The gate for the dashboard root runs
//! here, once, and the resolved user is shared with the top bar, the sidebar
//! and the nested page (admin-only pages reuse it instead of resolving again).

use super::{sidebar::Sidebar, topbar::Topbar};
use crate::{
    features::auth::{RequireRole, gate::RoleSet, state::use_current_user},
    routes::{paths, table::roles_for},
};
use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let allowed = roles_for(paths::DASHBOARD).unwrap_or(RoleSet::new(&[]));

    view! {
        <RequireRole allowed=allowed>
            <DashboardFrame />
        </RequireRole>
    }
}

#[component]
fn DashboardFrame() -> impl IntoView {
    let sidebar_open = RwSignal::new(true);
    let Some(user) = use_current_user() else {
        return ().into_any();
    };
    let role = Some(user.role);

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-950">
            <Topbar user=user sidebar_open=sidebar_open />
            <div class="flex flex-1">
                <Sidebar role=role open=sidebar_open />
                <main class="flex-1 p-6 overflow-x-auto">
                    <Outlet />
                </main>
            </div>
        </div>
    }
    .into_any()
}
