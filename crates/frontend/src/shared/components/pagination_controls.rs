use crate::shared::icons::icon;
use contracts::domain::a002_order::showing_range;
use leptos::prelude::*;

/// Page buttons shown at most; the window slides around the current page
pub const MAX_PAGE_BUTTONS: usize = 7;

/// 1-based page numbers to render as buttons
pub fn visible_pages(current: usize, total: usize) -> Vec<usize> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    if total <= MAX_PAGE_BUTTONS {
        return (1..=total).collect();
    }
    let half = MAX_PAGE_BUTTONS / 2;
    let start = current.saturating_sub(half).max(1).min(total - MAX_PAGE_BUTTONS + 1);
    (start..start + MAX_PAGE_BUTTONS).collect()
}

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-indexed. Previous/Next are disabled on the first/last page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let fallback_size = page_size_options.first().copied().unwrap_or(10);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    let (from, to) =
                        showing_range(current_page.get(), page_size.get(), total_count.get());
                    format!("Showing {} to {} of {} results", from, to, total_count.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                visible_pages(current_page.get(), total_pages.get())
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=move || current_page.get() == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next"
            >
                {icon("chevron-right")}
            </button>
            <select
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
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_pages_small_total() {
        assert_eq!(visible_pages(1, 1), vec![1]);
        assert_eq!(visible_pages(2, 3), vec![1, 2, 3]);
        assert_eq!(visible_pages(1, 0), vec![1]);
    }

    #[test]
    fn test_visible_pages_window() {
        assert_eq!(visible_pages(1, 20), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(visible_pages(10, 20), vec![7, 8, 9, 10, 11, 12, 13]);
        assert_eq!(visible_pages(20, 20), vec![14, 15, 16, 17, 18, 19, 20]);
    }
}
