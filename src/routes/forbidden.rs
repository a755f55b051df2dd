//! Access-denied view rendered by the role gate for signed-in users whose role
//! is not allowed. It does not redirect.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ForbiddenContent() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <div class="relative">
                <h1 class="text-9xl font-black text-red-50 dark:text-gray-800 select-none">"403"</h1>
                <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-red-700 dark:text-red-400 whitespace-nowrap">
                    "ACCESS DENIED"
                </p>
            </div>
            <p class="mt-4 text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                "Oops, you don't have permission to access this page."
            </p>
            <A
                href=paths::HOME
                {..}
                class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-red-700 rounded-lg hover:bg-red-800 focus:ring-4 focus:outline-none focus:ring-red-300"
            >
                <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                "Go Home"
            </A>
        </div>
    }
}
