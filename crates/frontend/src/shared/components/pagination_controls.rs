use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pager for 1-indexed pages
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Filtered row count
    #[prop(into)]
    total_count: Signal<usize>,

    /// 1-based first and last row index of the current page
    #[prop(into)]
    range: Signal<(usize, usize)>,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let (start, end) = range.get();
                    let count = total_count.get();
                    if count == 0 {
                        "No records".to_string()
                    } else {
                        format!(
                            "{}-{} of {} (page {} / {})",
                            start,
                            end,
                            count,
                            current_page.get(),
                            total_pages.get()
                        )
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get())
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
