use crate::domain::product::api;
use crate::shared::export::export_products_csv;
use crate::shared::i18n::{translate, use_locale};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Fetch the full record set and hand it over as a CSV download.
#[component]
pub fn ExportCsvButton() -> impl IntoView {
    let locale = use_locale();

    let handle_export = move |_| {
        leptos::task::spawn_local(async move {
            match api::fetch_products().await {
                Ok(items) => {
                    if items.is_empty() {
                        alert(translate(locale.get_untracked(), "message.exportEmpty"));
                        return;
                    }
                    let filename =
                        format!("products_{}.csv", chrono::Utc::now().format("%Y%m%d_%H%M%S"));
                    if let Err(e) = export_products_csv(&items, &filename) {
                        alert(&format!(
                            "{}: {}",
                            translate(locale.get_untracked(), "message.loadFailed"),
                            e
                        ));
                    }
                }
                Err(e) => {
                    alert(&format!(
                        "{}: {}",
                        translate(locale.get_untracked(), "message.loadFailed"),
                        e
                    ));
                }
            }
        });
    };

    view! {
        <button
            style="background: #16a34a; color: white; border: none; padding: 8px 16px; border-radius: 4px; cursor: pointer; font-size: 14px;"
            on:click=handle_export
        >
            "📤 " {move || translate(locale.get(), "action.exportCsv")}
        </button>
    }
}

/// Upload a CSV file into the record store. The outcome is reported with
/// the failed row numbers instead of a bare "done".
#[component]
pub fn ImportCsvButton(
    /// Called after an import attempt so the owner can re-fetch.
    on_imported: Callback<()>,
) -> impl IntoView {
    let locale = use_locale();
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let handle_import = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let input: HtmlInputElement = input.unchecked_into();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow re-selecting the same file later.
        input.set_value("");

        leptos::task::spawn_local(async move {
            let text = match wasm_bindgen_futures::JsFuture::from(file.text()).await {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(e) => {
                    log::error!("failed to read CSV file: {:?}", e);
                    return;
                }
            };

            match api::import_products_csv(&text).await {
                Ok(outcome) => {
                    let mut message = format!(
                        "{}: {}",
                        translate(locale.get_untracked(), "message.importDone"),
                        outcome.created
                    );
                    if !outcome.failures.is_empty() {
                        let rows: Vec<String> = outcome
                            .failures
                            .iter()
                            .map(|f| f.row.to_string())
                            .collect();
                        message.push_str(&format!(
                            "\n{}: {}",
                            translate(locale.get_untracked(), "message.importFailedRows"),
                            rows.join(", ")
                        ));
                    }
                    alert(&message);
                }
                Err(e) => alert(&format!(
                    "{}: {}",
                    translate(locale.get_untracked(), "message.loadFailed"),
                    e
                )),
            }
            on_imported.run(());
        });
    };

    view! {
        <div>
            <button
                style="background: #2563eb; color: white; border: none; padding: 8px 16px; border-radius: 4px; cursor: pointer; font-size: 14px;"
                on:click=move |_| {
                    if let Some(input) = file_input.get_untracked() {
                        let input: HtmlInputElement = input.unchecked_into();
                        input.click();
                    }
                }
            >
                "📥 " {move || translate(locale.get(), "action.importCsv")}
            </button>
            <input
                node_ref=file_input
                type="file"
                accept=".csv"
                style="display: none;"
                on:change=handle_import
            />
        </div>
    }
}
