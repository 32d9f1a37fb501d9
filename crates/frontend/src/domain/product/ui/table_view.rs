use crate::domain::product::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::i18n::{translate, use_locale};
use crate::shared::list_utils::sort_indicator;
use contracts::domain::product::views::PAGE_SIZE;
use contracts::domain::product::{Product, ProductField};
use contracts::shared::listing::{self, ListQuery};
use leptos::prelude::*;

/// Generic sortable, filterable, paginated table over the product set.
///
/// Every record view is this component with a different column list; the
/// columns double as the view's searchable fields. Each instance owns an
/// independent copy of the record set fetched on mount and its own
/// query state, so switching tabs starts from a clean slate.
#[component]
pub fn ProductTableView(
    /// Columns shown and searched by this view.
    columns: &'static [ProductField],
    /// Shared search keyword owned by the shell.
    #[prop(into)]
    keyword: Signal<String>,
) -> impl IntoView {
    let locale = use_locale();

    let (all_items, set_all_items) = signal(Vec::<Product>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let query = RwSignal::new(ListQuery::new(PAGE_SIZE));

    // One fetch on mount; filter/sort/paginate run locally afterwards.
    leptos::task::spawn_local(async move {
        match api::fetch_products().await {
            Ok(data) => set_all_items.set(data),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let page = move || {
        let q = query.get().with_keyword(keyword.get());
        listing::run(&all_items.get(), columns, &q)
    };

    view! {
        <div>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <p style="color: #c00; margin-bottom: 8px;">
                                {translate(locale.get(), "message.loadFailed")} " (" {e} ")"
                            </p>
                        }
                    })
            }}
            <table style="width: 100%; border-collapse: collapse; text-align: left; font-size: 14px;">
                <thead style="background: #f5f5f5; color: #444;">
                    <tr>
                        {columns
                            .iter()
                            .map(|&field| {
                                view! {
                                    <th
                                        style="padding: 8px; border: 1px solid #ddd; cursor: pointer;"
                                        on:click=move |_| query.update(|q| *q = q.toggled(field))
                                    >
                                        {move || translate(locale.get(), field.key())}
                                        {move || sort_indicator(query.get().sort, field)}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        page()
                            .items
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <tr>
                                        {columns
                                            .iter()
                                            .map(|field| {
                                                view! {
                                                    <td style="padding: 8px; border: 1px solid #ddd;">
                                                        {field.text(&item)}
                                                    </td>
                                                }
                                            })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <PaginationControls
                current_page=Signal::derive(move || query.get().page)
                total_pages=Signal::derive(move || page().total_pages)
                total_count=Signal::derive(move || page().total_count)
                on_page_change=Callback::new(move |p| query.update(|q| *q = q.with_page(p)))
            />
        </div>
    }
}
