use super::language_switcher::LanguageSwitcher;
use super::sidebar::Sidebar;
use crate::domain::product::ui::basic_list::BasicListView;
use crate::domain::product::ui::form::ProductForm;
use crate::domain::product::ui::views::{
    AdminView, LogisticsView, PricingView, ProductionView, SupplyView,
};
use crate::shared::i18n::{translate, use_locale};
use leptos::prelude::*;

/// The seven top-level tabs. Switching tabs remounts the view, which
/// drops its sort/page/keyword-derived state and re-fetches the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Create,
    Basic,
    Pricing,
    Supply,
    Production,
    Logistics,
    Admin,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Create,
        Tab::Basic,
        Tab::Pricing,
        Tab::Supply,
        Tab::Production,
        Tab::Logistics,
        Tab::Admin,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            Tab::Create => "tab.create",
            Tab::Basic => "tab.basic",
            Tab::Pricing => "tab.pricing",
            Tab::Supply => "tab.supply",
            Tab::Production => "tab.production",
            Tab::Logistics => "tab.logistics",
            Tab::Admin => "tab.admin",
        }
    }

    fn section_key(&self) -> &'static str {
        match self {
            Tab::Create => "tab.create",
            Tab::Basic => "section.basicInfo",
            Tab::Pricing => "section.pricingInfo",
            Tab::Supply => "section.supplyInfo",
            Tab::Production => "section.productionInfo",
            Tab::Logistics => "section.logisticsInfo",
            Tab::Admin => "section.adminInfo",
        }
    }
}

#[component]
fn Section(title_key: &'static str, children: Children) -> impl IntoView {
    let locale = use_locale();
    view! {
        <section style="background: white; padding: 24px; border-radius: 12px; border: 1px solid #e5e7eb; box-shadow: 0 1px 3px rgba(0,0,0,0.08); margin-bottom: 24px;">
            <h2 style="font-size: 20px; font-weight: 600; color: #374151; margin: 0 0 16px 0;">
                {move || translate(locale.get(), title_key)}
            </h2>
            {children()}
        </section>
    }
}

/// Top-level shell: sidebar tabs plus the header search input whose
/// keyword feeds whichever view is active.
#[component]
pub fn Shell() -> impl IntoView {
    let locale = use_locale();

    let (active_tab, set_active_tab) = signal(Tab::Create);
    let (search_keyword, set_search_keyword) = signal(String::new());

    view! {
        <div style="display: flex; min-height: 100vh; background: #f9fafb;">
            <Sidebar
                active_tab=active_tab
                on_select=Callback::new(move |tab| set_active_tab.set(tab))
            />

            <main style="flex: 1; padding: 32px; max-width: 1100px; margin: 0 auto;">
                <header style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 28px; gap: 16px;">
                    <h1 style="font-size: 28px; font-weight: 700; color: #1f2937; margin: 0;">
                        {move || translate(locale.get(), "dashboardTitle")}
                    </h1>
                    <div style="display: flex; align-items: center; gap: 16px;">
                        <input
                            type="text"
                            style="border: 1px solid #d1d5db; padding: 8px 14px; border-radius: 6px; width: 260px;"
                            placeholder=move || translate(locale.get(), "searchPlaceholder")
                            prop:value=move || search_keyword.get()
                            on:input=move |ev| set_search_keyword.set(event_target_value(&ev))
                        />
                        <LanguageSwitcher />
                    </div>
                </header>

                {move || {
                    let tab = active_tab.get();
                    let body = match tab {
                        Tab::Create => view! { <ProductForm /> }.into_any(),
                        Tab::Basic => {
                            view! { <BasicListView keyword=search_keyword /> }.into_any()
                        }
                        Tab::Pricing => {
                            view! { <PricingView keyword=search_keyword /> }.into_any()
                        }
                        Tab::Supply => {
                            view! { <SupplyView keyword=search_keyword /> }.into_any()
                        }
                        Tab::Production => {
                            view! { <ProductionView keyword=search_keyword /> }.into_any()
                        }
                        Tab::Logistics => {
                            view! { <LogisticsView keyword=search_keyword /> }.into_any()
                        }
                        Tab::Admin => view! { <AdminView keyword=search_keyword /> }.into_any(),
                    };
                    view! { <Section title_key=tab.section_key()>{body}</Section> }
                }}
            </main>
        </div>
    }
}
