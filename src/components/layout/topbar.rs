use crate::{
    features::auth::{
        state::{sign_out, use_auth},
        types::CurrentUser,
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};

/// Dashboard header: brand, sidebar toggle, user bubble and logout.
#[component]
pub fn Topbar(user: CurrentUser, sidebar_open: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let on_logout = move |_| {
        let navigate = navigate.clone();
        sign_out(auth.clone(), move || {
            navigate(
                paths::LOGIN,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    };

    view! {
        <header class="flex items-center justify-between border-b border-gray-200 bg-white px-4 py-3 dark:border-gray-800 dark:bg-gray-900">
            <div class="flex items-center gap-3">
                <button
                    type="button"
                    class="inline-flex h-9 w-9 items-center justify-center rounded-lg text-gray-500 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800"
                    aria-label="Toggle sidebar"
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                >
                    <span class="material-symbols-outlined">"menu"</span>
                </button>
                <A href=paths::HOME {..} class="text-lg font-bold text-red-700 dark:text-red-400">
                    "RedLink"
                </A>
            </div>
            <div class="flex items-center gap-3">
                <span class="hidden sm:block text-sm text-gray-600 dark:text-gray-300">
                    {user.name.clone()}
                    <span class="ml-2 text-xs text-gray-400">{user.role.label()}</span>
                </span>
                <span
                    class="inline-flex h-9 w-9 items-center justify-center rounded-full bg-red-100 text-sm font-semibold text-red-800"
                    title=user.name.clone()
                >
                    {user.initial()}
                </span>
                <button
                    type="button"
                    class="text-sm font-medium text-gray-600 hover:text-red-700 dark:text-gray-300"
                    on:click=on_logout
                >
                    "Logout"
                </button>
            </div>
        </header>
    }
}
