use super::repository;
use contracts::domain::product::{Product, ProductDto};
use uuid::Uuid;

/// Create one record from a validated form payload. The store assigns
/// the identifier and both timestamps; the client never chooses them.
pub async fn create(dto: ProductDto) -> anyhow::Result<Uuid> {
    let mut aggregate = Product::new_for_insert(dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Create one record from an imported CSV row. Mirrors the source
/// system's import path: rows are stored as parsed, without the form's
/// schema validation.
pub async fn create_imported(dto: ProductDto) -> anyhow::Result<Uuid> {
    let mut aggregate = Product::new_for_insert(dto);
    aggregate.before_write();
    repository::insert(&aggregate).await
}

pub async fn set_hidden(id: Uuid, hidden: bool, reason: Option<String>) -> anyhow::Result<bool> {
    repository::set_hidden(id, hidden, reason).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    repository::list_all().await
}
