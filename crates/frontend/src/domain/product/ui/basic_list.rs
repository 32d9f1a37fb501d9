use crate::domain::product::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::i18n::{translate, use_locale};
use crate::shared::list_utils::sort_indicator;
use contracts::domain::product::views::{BASIC_COLUMNS, BASIC_SEARCH_FIELDS, PAGE_SIZE};
use contracts::domain::product::{Product, ProductField};
use contracts::shared::listing::{self, ListQuery};
use leptos::prelude::*;

/// Basic list: the only view with record actions. Searches the name
/// only; sorting is driven by the column buttons. Delete and the
/// visibility toggle re-fetch the set, which is how remote edits become
/// visible at all.
#[component]
pub fn BasicListView(#[prop(into)] keyword: Signal<String>) -> impl IntoView {
    let locale = use_locale();

    let (all_items, set_all_items) = signal(Vec::<Product>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let query = RwSignal::new(ListQuery::new(PAGE_SIZE));

    let load = move || {
        leptos::task::spawn_local(async move {
            match api::fetch_products().await {
                Ok(data) => set_all_items.set(data),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    load();

    let page = move || {
        let q = query.get().with_keyword(keyword.get());
        listing::run(&all_items.get(), BASIC_SEARCH_FIELDS, &q)
    };

    let delete_product = move |id: String| {
        leptos::task::spawn_local(async move {
            if let Err(e) = api::delete_product(&id).await {
                log::error!("delete failed: {}", e);
            }
            load();
        });
    };

    let toggle_hidden = move |id: String, current: bool| {
        leptos::task::spawn_local(async move {
            if let Err(e) = api::set_product_hidden(&id, !current).await {
                log::error!("visibility update failed: {}", e);
            }
            load();
        });
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

            // Sort buttons instead of table headers.
            <div style="display: flex; gap: 8px; margin-bottom: 12px; flex-wrap: wrap;">
                {BASIC_COLUMNS
                    .iter()
                    .map(|&field| {
                        let is_active = move || {
                            matches!(query.get().sort, Some((active, _)) if active == field)
                        };
                        view! {
                            <button
                                style=move || {
                                    format!(
                                        "padding: 4px 12px; border: 1px solid #ccc; border-radius: 4px; cursor: pointer; background: {}; color: {};",
                                        if is_active() { "#2563eb" } else { "#f3f4f6" },
                                        if is_active() { "white" } else { "#111" },
                                    )
                                }
                                on:click=move |_| query.update(|q| *q = q.toggled(field))
                            >
                                {move || translate(locale.get(), field.key())}
                                {move || sort_indicator(query.get().sort, field)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ul style="list-style: none; padding: 0; display: flex; flex-direction: column; gap: 12px;">
                {move || {
                    page()
                        .items
                        .into_iter()
                        .map(|product| {
                            let id = product.to_string_id();
                            let id_for_delete = id.clone();
                            let id_for_toggle = id;
                            let hidden = product.hidden;
                            view! {
                                <li style="border: 1px solid #ddd; border-radius: 6px; padding: 12px; display: flex; gap: 12px;">
                                    <div style="flex: 1;">
                                        <p style="font-weight: 600; margin: 0 0 4px 0;">
                                            {product.name.clone()}
                                            {if hidden { " 🚫" } else { "" }}
                                        </p>
                                        <p style="margin: 2px 0;">
                                            {move || translate(locale.get(), "price")} ": "
                                            {ProductField::Price.text(&product)}
                                        </p>
                                        <p style="margin: 2px 0;">
                                            {move || translate(locale.get(), "stock")} ": "
                                            {ProductField::Stock.text(&product)}
                                        </p>
                                        <p style="margin: 2px 0;">
                                            {move || translate(locale.get(), "minStock")} ": "
                                            {ProductField::MinStock.text(&product)}
                                        </p>
                                        <div style="margin-top: 8px; display: flex; gap: 8px;">
                                            <button
                                                style="background: #dc2626; color: white; border: none; padding: 4px 10px; border-radius: 4px; cursor: pointer;"
                                                on:click=move |_| delete_product(id_for_delete.clone())
                                            >
                                                {move || translate(locale.get(), "action.delete")}
                                            </button>
                                            <button
                                                style="background: #6b7280; color: white; border: none; padding: 4px 10px; border-radius: 4px; cursor: pointer;"
                                                on:click=move |_| toggle_hidden(id_for_toggle.clone(), hidden)
                                            >
                                                {move || {
                                                    if hidden {
                                                        translate(locale.get(), "action.show")
                                                    } else {
                                                        translate(locale.get(), "action.hide")
                                                    }
                                                }}
                                            </button>
                                        </div>
                                    </div>
                                    {(!product.image_urls.is_empty())
                                        .then(|| {
                                            view! {
                                                <div style="display: flex; gap: 8px; flex-wrap: wrap;">
                                                    {product
                                                        .image_urls
                                                        .iter()
                                                        .map(|url| {
                                                            view! {
                                                                <img
                                                                    src=url.clone()
                                                                    style="width: 96px; height: 96px; object-fit: cover; border-radius: 4px;"
                                                                />
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                        })}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            <PaginationControls
                current_page=Signal::derive(move || query.get().page)
                total_pages=Signal::derive(move || page().total_pages)
                total_count=Signal::derive(move || page().total_count)
                on_page_change=Callback::new(move |p| query.update(|q| *q = q.with_page(p)))
            />
        </div>
    }
}
