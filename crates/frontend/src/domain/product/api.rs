//! Record store and blob store access for the product views.
//!
//! Thin wrappers over `fetch`; every call is awaited sequentially by its
//! caller — no retries, no timeouts, a stalled request stays stalled.

use contracts::domain::product::{ImportOutcome, Product, ProductDto};
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::shared::api_utils::api_url;

async fn send_request(
    method: &str,
    path: &str,
    body: Option<(&str, &str)>, // (content type, payload)
) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    if let Some((_, payload)) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(payload));
    }

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if let Some((content_type, _)) = body {
        request
            .headers()
            .set("Content-Type", content_type)
            .map_err(|e| format!("{e:?}"))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        return Err(format!("HTTP {}: {}", resp.status(), text));
    }
    Ok(text)
}

/// Full record set, store order.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let text = send_request("GET", "/api/products", None).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// Create one record; returns the assigned identifier.
pub async fn create_product(dto: &ProductDto) -> Result<String, String> {
    let payload = serde_json::to_string(dto).map_err(|e| format!("{e}"))?;
    let text = send_request("POST", "/api/products", Some(("application/json", &payload))).await?;
    let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    value
        .get("id")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| "missing id in response".to_string())
}

/// Flip the visibility flag in place.
pub async fn set_product_hidden(id: &str, hidden: bool) -> Result<(), String> {
    let payload = serde_json::json!({ "hidden": hidden }).to_string();
    send_request(
        "POST",
        &format!("/api/products/{}/hidden", id),
        Some(("application/json", &payload)),
    )
    .await
    .map(|_| ())
}

pub async fn delete_product(id: &str) -> Result<(), String> {
    send_request("DELETE", &format!("/api/products/{}", id), None)
        .await
        .map(|_| ())
}

/// Ship the raw CSV text to the import endpoint and return the
/// structured outcome.
pub async fn import_products_csv(text: &str) -> Result<ImportOutcome, String> {
    let response = send_request(
        "POST",
        "/api/products/import-csv",
        Some(("text/csv", text)),
    )
    .await?;
    serde_json::from_str(&response).map_err(|e| format!("{e}"))
}

/// Upload one image to the blob store; returns its public URL.
pub async fn upload_image(file: &web_sys::File) -> Result<String, String> {
    let form_data = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(&api_url("/api/products/upload-image"), &opts)
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        return Err(format!("HTTP {}: {}", resp.status(), text));
    }

    let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    value
        .get("url")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| "missing url in response".to_string())
}
