use chrono::Utc;
use contracts::domain::common::EntityMetadata;
use contracts::domain::product::{Product, ProductId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub min_stock: i64,
    pub order_unit: i64,
    pub supplier_company: String,
    pub supplier: String,
    pub purchase_place: String,
    pub purchase_date: String,
    pub lot_number: String,
    pub manufacturer: String,
    pub manufacturer_name: String,
    pub origin: String,
    pub production_date: String,
    pub expiry_date: String,
    pub ingredients: String,
    pub storage_location: String,
    pub temperature_zone: String,
    pub shipping_base: String,
    pub package_size: String,
    pub weight: String,
    pub shipping_restriction: String,
    pub created_by: String,
    pub department: String,
    pub status: String,
    pub hidden_reason: Option<String>,
    pub hidden: bool,
    /// JSON array of public URLs.
    pub image_urls: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let image_urls: Vec<String> = serde_json::from_str(&m.image_urls).unwrap_or_default();

        Product {
            id: ProductId(uuid),
            metadata,
            name: m.name,
            price: m.price,
            stock: m.stock,
            min_stock: m.min_stock,
            order_unit: m.order_unit,
            supplier_company: m.supplier_company,
            supplier: m.supplier,
            purchase_place: m.purchase_place,
            purchase_date: m.purchase_date,
            lot_number: m.lot_number,
            manufacturer: m.manufacturer,
            manufacturer_name: m.manufacturer_name,
            origin: m.origin,
            production_date: m.production_date,
            expiry_date: m.expiry_date,
            ingredients: m.ingredients,
            storage_location: m.storage_location,
            temperature_zone: m.temperature_zone,
            shipping_base: m.shipping_base,
            package_size: m.package_size,
            weight: m.weight,
            shipping_restriction: m.shipping_restriction,
            created_by: m.created_by,
            department: m.department,
            status: m.status,
            hidden_reason: m.hidden_reason,
            hidden: m.hidden,
            image_urls,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn active_model(aggregate: &Product) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        name: Set(aggregate.name.clone()),
        price: Set(aggregate.price),
        stock: Set(aggregate.stock),
        min_stock: Set(aggregate.min_stock),
        order_unit: Set(aggregate.order_unit),
        supplier_company: Set(aggregate.supplier_company.clone()),
        supplier: Set(aggregate.supplier.clone()),
        purchase_place: Set(aggregate.purchase_place.clone()),
        purchase_date: Set(aggregate.purchase_date.clone()),
        lot_number: Set(aggregate.lot_number.clone()),
        manufacturer: Set(aggregate.manufacturer.clone()),
        manufacturer_name: Set(aggregate.manufacturer_name.clone()),
        origin: Set(aggregate.origin.clone()),
        production_date: Set(aggregate.production_date.clone()),
        expiry_date: Set(aggregate.expiry_date.clone()),
        ingredients: Set(aggregate.ingredients.clone()),
        storage_location: Set(aggregate.storage_location.clone()),
        temperature_zone: Set(aggregate.temperature_zone.clone()),
        shipping_base: Set(aggregate.shipping_base.clone()),
        package_size: Set(aggregate.package_size.clone()),
        weight: Set(aggregate.weight.clone()),
        shipping_restriction: Set(aggregate.shipping_restriction.clone()),
        created_by: Set(aggregate.created_by.clone()),
        department: Set(aggregate.department.clone()),
        status: Set(aggregate.status.clone()),
        hidden_reason: Set(aggregate.hidden_reason.clone()),
        hidden: Set(aggregate.hidden),
        image_urls: Set(serde_json::to_string(&aggregate.image_urls).unwrap_or_else(|_| "[]".into())),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
    }
}

/// Full record set in store order; no ordering guarantee across calls.
pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    let items: Vec<Product> = Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Product) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    active_model(aggregate).insert(conn()).await?;
    Ok(uuid)
}

/// The one in-place partial update: visibility flag plus its advisory
/// reason. Bumps updated_at.
pub async fn set_hidden(id: Uuid, hidden: bool, reason: Option<String>) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Hidden, Expr::value(hidden))
        .col_expr(Column::HiddenReason, Expr::value(reason))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

/// Hard delete — there is no tombstone for products.
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
