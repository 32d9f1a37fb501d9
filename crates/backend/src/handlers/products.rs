use axum::{
    extract::{Multipart, Path},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::product;
use crate::shared::data::file_storage;
use contracts::domain::product::{ImportOutcome, Product, ProductDto};

/// GET /api/products
pub async fn list_all() -> Result<Json<Vec<Product>>, axum::http::StatusCode> {
    match product::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/products/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match product::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load product {}: {}", id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/products
pub async fn create(
    Json(dto): Json<ProductDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match product::service::create(dto).await {
        Ok(id) => Ok(Json(json!({ "id": id.to_string() }))),
        Err(e) => {
            tracing::error!("Failed to create product: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[derive(Deserialize)]
pub struct SetHiddenRequest {
    pub hidden: bool,
    #[serde(rename = "hiddenReason")]
    pub hidden_reason: Option<String>,
}

/// POST /api/products/:id/hidden — the narrow in-place update the list
/// view performs.
pub async fn set_hidden(
    Path(id): Path<String>,
    Json(request): Json<SetHiddenRequest>,
) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match product::service::set_hidden(uuid, request.hidden, request.hidden_reason).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update visibility for {}: {}", id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/products/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match product::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete product {}: {}", id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/products/import-csv — body is the raw CSV text.
pub async fn import_csv(body: String) -> Result<Json<ImportOutcome>, axum::http::StatusCode> {
    match product::csv_import::import_products_from_csv(&body).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) => {
            tracing::error!("CSV import error: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/products/upload-image — multipart with one file part;
/// returns the public URL the image is served under.
pub async fn upload_image(
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, axum::http::StatusCode> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Malformed multipart upload: {}", e);
        axum::http::StatusCode::BAD_REQUEST
    })? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("image").to_string();
        let bytes = field.bytes().await.map_err(|e| {
            tracing::error!("Failed to read upload body: {}", e);
            axum::http::StatusCode::BAD_REQUEST
        })?;
        return match file_storage::put(&bytes, &file_name).await {
            Ok(url) => Ok(Json(UploadResponse { url })),
            Err(e) => {
                tracing::error!("Failed to store upload {}: {}", file_name, e);
                Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
            }
        };
    }
    Err(axum::http::StatusCode::BAD_REQUEST)
}
