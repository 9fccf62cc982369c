use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - first/prev, numbered window, next/last
/// and a page size select
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Page numbers to render as buttons
    #[prop(into)]
    visible_pages: Signal<Vec<u32>>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,

    /// Available page size options
    page_size_options: Vec<u32>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();
    let fallback_size = page_size_options.first().copied().unwrap_or(5);

    view! {
        <div class="pagination">
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(1)
                    disabled=is_first
                    title="First page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=is_first
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>

                <For
                    each=move || visible_pages.get()
                    key=|p| *p
                    children=move |p| {
                        view! {
                            <button
                                class="pagination-btn pagination-btn--number"
                                class:pagination-btn--active=move || current_page.get() == p
                                on:click=move |_| on_page_change.run(p)
                            >
                                {p.to_string()}
                            </button>
                        }
                    }
                />

                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=is_last
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let total = total_pages.get();
                        if total > 0 {
                            on_page_change.run(total);
                        }
                    }
                    disabled=is_last
                    title="Last page"
                >
                    {icon("chevrons-right")}
                </button>
            </div>

            <div class="pagination-size">
                <label for="rows" class="pagination-size__label">"Rows per page:"</label>
                <select
                    id="rows"
                    class="page-size-select"
                    on:change=move |ev| {
                        let val = event_target_value(&ev).parse().unwrap_or(fallback_size);
                        on_page_size_change.run(val);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
