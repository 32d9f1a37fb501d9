use super::shell::Tab;
use crate::shared::i18n::{translate, use_locale};
use leptos::prelude::*;

#[component]
pub fn Sidebar(
    #[prop(into)] active_tab: Signal<Tab>,
    on_select: Callback<Tab>,
) -> impl IntoView {
    let locale = use_locale();

    view! {
        <nav style="width: 220px; background: #f3f4f6; padding: 16px; display: flex; flex-direction: column; gap: 6px; min-height: 100vh;">
            {Tab::ALL
                .iter()
                .map(|&tab| {
                    view! {
                        <button
                            style=move || {
                                format!(
                                    "text-align: left; padding: 8px 14px; border: none; border-radius: 6px; cursor: pointer; background: {}; color: {};",
                                    if active_tab.get() == tab { "#2563eb" } else { "transparent" },
                                    if active_tab.get() == tab { "white" } else { "#111" },
                                )
                            }
                            on:click=move |_| on_select.run(tab)
                        >
                            {move || translate(locale.get(), tab.label_key())}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
