//! Public site frame with the top navigation bar and footer. When a token is
//! present the current user is resolved once here and shared with the page
//! through [`use_viewer`] and with nested role gates through
//! [`SessionLookup`]; signed-out visitors cost no request.

use crate::{
    features::auth::{
        gate::{Resolution, resolve_session},
        state::{SessionLookup, sign_out, use_auth},
        types::CurrentUser,
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};

const PUBLIC_LINKS: [(&str, &str); 4] = [
    ("Home", paths::HOME),
    ("Request Blood", paths::REQUESTS),
    ("Give Blood", paths::GIVE_BLOOD),
    ("Contact", paths::CONTACT),
];

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-red-700 md:p-0 dark:text-white md:dark:hover:text-red-400 dark:hover:bg-gray-700 md:dark:hover:bg-transparent";

/// Signed-in user as seen by public pages; `None` for guests, while loading,
/// or when the lookup failed.
#[derive(Clone, Copy)]
pub struct ViewerContext(pub Signal<Option<CurrentUser>>);

pub fn use_viewer() -> Signal<Option<CurrentUser>> {
    use_context::<ViewerContext>().map_or_else(|| Signal::derive(|| None), |context| context.0)
}

#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let signed_in = auth.signed_in;
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = signal(false);

    let lookup_auth = auth.clone();
    let resolution = LocalResource::new(move || {
        let auth = lookup_auth.clone();
        let signed_in = signed_in.get();
        async move {
            if !signed_in {
                return Resolution::NoToken;
            }
            let resolution = resolve_session(auth.session(), &auth.api).await;
            // A rejected token was just dropped.
            if !auth.session().has_token() {
                auth.refresh();
            }
            resolution
        }
    });
    let lookup = Signal::derive(move || resolution.get());
    provide_context(SessionLookup(lookup));
    let user = Signal::derive(move || lookup.get().and_then(|resolution| resolution.user().cloned()));
    provide_context(ViewerContext(user));

    let on_logout = move |_| {
        let navigate = navigate.clone();
        set_menu_open.set(false);
        sign_out(auth.clone(), move || navigate(paths::LOGIN, NavigateOptions::default()));
    };

    view! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-gray-900">
            <header class="border-b border-gray-200 dark:border-gray-800">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href=paths::HOME {..} class="flex items-center space-x-2">
                        <span class="material-symbols-outlined text-red-700">"bloodtype"</span>
                        <span class="text-xl font-bold text-red-700 dark:text-red-400">"RedLink"</span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700"
                        aria-controls="navbar-public"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-public"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col items-start md:items-center p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            {PUBLIC_LINKS
                                .into_iter()
                                .map(|(label, href)| {
                                    view! {
                                        <li>
                                            <A href=href {..} class=NAV_LINK on:click=move |_| set_menu_open.set(false)>
                                                {label}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                            <Show
                                when=move || signed_in.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <A href=paths::LOGIN {..} class=NAV_LINK>"Login"</A>
                                        </li>
                                        <li>
                                            <A
                                                href=paths::REGISTER
                                                {..}
                                                class="block py-2 px-4 text-white bg-red-700 rounded-lg hover:bg-red-800"
                                            >
                                                "Register"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <span
                                        class="inline-flex h-9 w-9 items-center justify-center rounded-full bg-red-100 text-sm font-semibold text-red-800"
                                        title=move || user.get().map(|user| user.name).unwrap_or_default()
                                    >
                                        {move || user.get().map_or_else(|| "U".to_string(), |user| user.initial())}
                                    </span>
                                </li>
                                <li>
                                    <button type="button" class=NAV_LINK on:click=on_logout.clone()>
                                        "Logout"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="max-w-screen-xl mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="border-t border-gray-200 dark:border-gray-800">
                <div class="max-w-screen-xl mx-auto p-6 text-center text-sm text-gray-500 dark:text-gray-400">
                    "RedLink connects donors, hospitals and patients."
                </div>
            </footer>
        </div>
    }
}
