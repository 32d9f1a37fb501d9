use crate::layout::Shell;
use crate::shared::i18n::provide_locale;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Locale context is shared by every label in the tree.
    provide_locale();

    view! {
        <Shell />
    }
}
