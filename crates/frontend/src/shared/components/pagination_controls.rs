use leptos::prelude::*;

/// Pagination controls shared by the record views.
///
/// Pages are 1-based. The pipeline itself does not defend against
/// out-of-range pages, so the clamping lives here: the buttons never
/// request a page outside `1..=total_pages`.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let button_style = "padding: 4px 10px; border: 1px solid #ccc; border-radius: 4px; background: white; cursor: pointer;";

    view! {
        <div style="display: flex; gap: 8px; align-items: center; margin-top: 12px;">
            <button
                style=button_style
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
            >
                "<"
            </button>
            <span style="font-size: 14px; color: #555;">
                {move || {
                    let total = total_pages.get().max(1);
                    format!("{} / {} ({})", current_page.get().min(total), total, total_count.get())
                }}
            </span>
            <button
                style=button_style
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
            >
                ">"
            </button>
        </div>
    }
}
