use leptos::prelude::*;

/// Previous/next pager for server-paginated tables. Pages start at 1.
#[component]
pub fn Pagination(
    page: RwSignal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
) -> impl IntoView {
    let at_start = move || page.get() <= 1;
    let at_end = move || page.get() >= total_pages.get().max(1);
    let class = "px-3 py-1.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-100 disabled:opacity-50 disabled:cursor-not-allowed dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600";

    view! {
        <nav class="flex items-center justify-between pt-4" aria-label="Pagination">
            <span class="text-sm text-gray-500 dark:text-gray-400">
                {move || format!("Page {} of {}", page.get(), total_pages.get().max(1))}
            </span>
            <div class="flex gap-2">
                <button
                    type="button"
                    class=class
                    disabled=at_start
                    on:click=move |_| page.update(|page| *page = page.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <button
                    type="button"
                    class=class
                    disabled=at_end
                    on:click=move |_| page.update(|page| *page += 1)
                >
                    "Next"
                </button>
            </div>
        </nav>
    }
}
