//! The five table views: one column/searchable-field list each, bound to
//! the shared table component. No per-view pipeline copies.

use super::table_view::ProductTableView;
use contracts::domain::product::views::{
    ADMIN_COLUMNS, LOGISTICS_COLUMNS, PRICING_COLUMNS, PRODUCTION_COLUMNS, SUPPLY_COLUMNS,
};
use leptos::prelude::*;

#[component]
pub fn PricingView(#[prop(into)] keyword: Signal<String>) -> impl IntoView {
    view! { <ProductTableView columns=PRICING_COLUMNS keyword=keyword /> }
}

#[component]
pub fn SupplyView(#[prop(into)] keyword: Signal<String>) -> impl IntoView {
    view! { <ProductTableView columns=SUPPLY_COLUMNS keyword=keyword /> }
}

#[component]
pub fn ProductionView(#[prop(into)] keyword: Signal<String>) -> impl IntoView {
    view! { <ProductTableView columns=PRODUCTION_COLUMNS keyword=keyword /> }
}

#[component]
pub fn LogisticsView(#[prop(into)] keyword: Signal<String>) -> impl IntoView {
    view! { <ProductTableView columns=LOGISTICS_COLUMNS keyword=keyword /> }
}

#[component]
pub fn AdminView(#[prop(into)] keyword: Signal<String>) -> impl IntoView {
    view! { <ProductTableView columns=ADMIN_COLUMNS keyword=keyword /> }
}
