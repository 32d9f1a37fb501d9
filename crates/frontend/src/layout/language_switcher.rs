use crate::shared::i18n::{switch_locale, use_locale, Locale};
use leptos::prelude::*;

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let locale = use_locale();

    let button = move |target: Locale, label: &'static str| {
        view! {
            <button
                style=move || {
                    format!(
                        "padding: 4px 12px; border-radius: 4px; font-size: 13px; border: 1px solid #ccc; cursor: pointer; background: {}; color: {};",
                        if locale.get() == target { "#2563eb" } else { "white" },
                        if locale.get() == target { "white" } else { "#333" },
                    )
                }
                on:click=move |_| switch_locale(locale, target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div style="display: flex; gap: 8px;">
            {button(Locale::Ja, "日本語")}
            {button(Locale::En, "English")}
        </div>
    }
}
