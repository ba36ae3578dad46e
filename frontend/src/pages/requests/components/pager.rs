use leptos::*;

#[component]
pub fn Pager(
    page: Signal<usize>,
    total_pages: Signal<usize>,
    on_page: Callback<usize>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let button_class = "px-3 py-1 rounded-md border border-border text-sm disabled:opacity-50 disabled:cursor-not-allowed";
    view! {
        <nav class="flex items-center justify-center gap-1 py-4" aria-label="Pagination">
            <button
                type="button"
                class=button_class
                disabled=move || page.get() <= 1
                on:click=move |_| on_prev.call(())
            >
                {"Previous"}
            </button>
            {move || {
                let current = page.get();
                (1..=total_pages.get())
                    .map(|number| {
                        let class = if number == current {
                            "px-3 py-1 rounded-md text-sm bg-action-primary-bg text-action-primary-text"
                        } else {
                            "px-3 py-1 rounded-md text-sm border border-border hover:bg-surface-muted"
                        };
                        view! {
                            <button
                                type="button"
                                class=class
                                aria-current=move || (number == current).then_some("page")
                                on:click=move |_| on_page.call(number)
                            >
                                {number}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                type="button"
                class=button_class
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_next.call(())
            >
                {"Next"}
            </button>
        </nav>
    }
}
