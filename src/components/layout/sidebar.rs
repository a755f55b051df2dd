//! Dashboard side navigation. Entries come from the static link table and are
//! filtered by the resolved role, so a hospital account never sees admin-only
//! sections. Hiding a link is cosmetic; the routes are gated separately.

use crate::features::auth::{
    nav::{DASHBOARD_LINKS, NavLink, visible_links},
    role::Role,
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar(role: Option<Role>, #[prop(into)] open: Signal<bool>) -> impl IntoView {
    let location = use_location();
    let links = visible_links(&DASHBOARD_LINKS, role);

    view! {
        <aside
            class="w-64 flex-shrink-0 flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto"
            class:hidden=move || !open.get()
            class:flex=move || open.get()
        >
            <nav class="flex-1 px-4 py-6 space-y-1">
                {links
                    .into_iter()
                    .map(|link| {
                        let pathname = location.pathname;
                        view! { <SidebarLink link=link active=move || pathname.get() == link.path /> }
                    })
                    .collect_view()}
            </nav>
            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    "RedLink Dashboard"
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink<F>(link: NavLink, active: F) -> impl IntoView
where
    F: Fn() -> bool + Copy + Send + Sync + 'static,
{
    view! {
        <A
            href=link.path
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:bg-red-50=move || active()
            class:text-red-700=move || active()
            class:dark:bg-gray-800=move || active()
            class:dark:text-red-400=move || active()
            class:text-gray-600=move || !active()
            class:hover:bg-gray-50=move || !active()
            class:dark:text-gray-300=move || !active()
            class:dark:hover:bg-gray-800=move || !active()
        >
            <span
                class="material-symbols-outlined mr-3 text-lg transition-colors"
                class:text-red-700=move || active()
                class:text-gray-400=move || !active()
            >
                {link.icon}
            </span>
            {link.label}
        </A>
    }
}
