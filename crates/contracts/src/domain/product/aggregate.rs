use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// One product record — the system's sole entity type.
///
/// Calendar dates entered through the form (`purchase_date`,
/// `production_date`, `expiry_date`) are kept as `YYYY-MM-DD` strings,
/// exactly as the store holds them; only `created_at`/`updated_at` are
/// typed instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(flatten)]
    pub metadata: EntityMetadata,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(rename = "minStock", default)]
    pub min_stock: i64,
    #[serde(rename = "orderUnit", default)]
    pub order_unit: i64,

    #[serde(rename = "supplierCompany", default)]
    pub supplier_company: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(rename = "purchasePlace", default)]
    pub purchase_place: String,
    #[serde(rename = "purchaseDate", default)]
    pub purchase_date: String,
    #[serde(rename = "lotNumber", default)]
    pub lot_number: String,

    #[serde(default)]
    pub manufacturer: String,
    #[serde(rename = "manufacturerName", default)]
    pub manufacturer_name: String,
    #[serde(default)]
    pub origin: String,
    #[serde(rename = "productionDate", default)]
    pub production_date: String,
    #[serde(rename = "expiryDate", default)]
    pub expiry_date: String,
    #[serde(default)]
    pub ingredients: String,

    #[serde(rename = "storageLocation", default)]
    pub storage_location: String,
    #[serde(rename = "temperatureZone", default)]
    pub temperature_zone: String,
    #[serde(rename = "shippingBase", default)]
    pub shipping_base: String,
    #[serde(rename = "packageSize", default)]
    pub package_size: String,
    #[serde(default)]
    pub weight: String,
    #[serde(rename = "shippingRestriction", default)]
    pub shipping_restriction: String,

    #[serde(rename = "createdBy", default)]
    pub created_by: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "hiddenReason")]
    pub hidden_reason: Option<String>,

    #[serde(default)]
    pub hidden: bool,

    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
}

impl Product {
    /// Derived selling price; never stored, computed wherever pricing
    /// sorting or filtering needs it.
    pub fn sales_price(&self) -> f64 {
        self.price * self.order_unit as f64
    }

    pub fn new_for_insert(dto: ProductDto) -> Self {
        Self {
            id: ProductId::new_v4(),
            metadata: EntityMetadata::new(),
            name: dto.name,
            price: dto.price,
            stock: dto.stock,
            min_stock: dto.min_stock,
            order_unit: dto.order_unit,
            supplier_company: dto.supplier_company,
            supplier: dto.supplier,
            purchase_place: dto.purchase_place,
            purchase_date: dto.purchase_date,
            lot_number: dto.lot_number,
            manufacturer: dto.manufacturer,
            manufacturer_name: dto.manufacturer_name,
            origin: dto.origin,
            production_date: dto.production_date,
            expiry_date: dto.expiry_date,
            ingredients: dto.ingredients,
            storage_location: dto.storage_location,
            temperature_zone: dto.temperature_zone,
            shipping_base: dto.shipping_base,
            package_size: dto.package_size,
            weight: dto.weight,
            shipping_restriction: dto.shipping_restriction,
            created_by: dto.created_by,
            department: dto.department,
            status: dto.status,
            hidden_reason: dto.hidden_reason,
            hidden: false,
            image_urls: dto.image_urls,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.metadata.touch();
    }

    /// Form schema: every field is required except the hidden reason.
    pub fn validate(&self) -> Result<(), String> {
        match self.field_errors().into_iter().next() {
            Some((key, message)) => Err(format!("{}: {}", key, message)),
            None => Ok(()),
        }
    }

    /// Per-field validation, used by the form for inline error display.
    /// Returns `(field key, message)` pairs in declaration order.
    pub fn field_errors(&self) -> Vec<(&'static str, String)> {
        let mut errors = Vec::new();
        let required_text: &[(&'static str, &str)] = &[
            ("name", &self.name),
            ("supplierCompany", &self.supplier_company),
            ("supplier", &self.supplier),
            ("purchasePlace", &self.purchase_place),
            ("purchaseDate", &self.purchase_date),
            ("lotNumber", &self.lot_number),
            ("manufacturer", &self.manufacturer),
            ("manufacturerName", &self.manufacturer_name),
            ("origin", &self.origin),
            ("productionDate", &self.production_date),
            ("expiryDate", &self.expiry_date),
            ("ingredients", &self.ingredients),
            ("storageLocation", &self.storage_location),
            ("temperatureZone", &self.temperature_zone),
            ("shippingBase", &self.shipping_base),
            ("packageSize", &self.package_size),
            ("weight", &self.weight),
            ("shippingRestriction", &self.shipping_restriction),
            ("createdBy", &self.created_by),
            ("department", &self.department),
            ("status", &self.status),
        ];
        for (key, value) in required_text {
            if value.trim().is_empty() {
                errors.push((*key, "must not be empty".to_string()));
            }
        }
        if self.price < 1.0 {
            errors.push(("price", "must be at least 1".to_string()));
        }
        if self.stock < 0 {
            errors.push(("stock", "must not be negative".to_string()));
        }
        if self.min_stock < 0 {
            errors.push(("minStock", "must not be negative".to_string()));
        }
        if self.order_unit < 1 {
            errors.push(("orderUnit", "must be at least 1".to_string()));
        }
        errors
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

// ============================================================================
// DTO
// ============================================================================
/// Create/import payload: everything the client supplies. Identifier,
/// timestamps and the visibility flag are assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(rename = "minStock", default)]
    pub min_stock: i64,
    #[serde(rename = "orderUnit", default)]
    pub order_unit: i64,

    #[serde(rename = "supplierCompany", default)]
    pub supplier_company: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(rename = "purchasePlace", default)]
    pub purchase_place: String,
    #[serde(rename = "purchaseDate", default)]
    pub purchase_date: String,
    #[serde(rename = "lotNumber", default)]
    pub lot_number: String,

    #[serde(default)]
    pub manufacturer: String,
    #[serde(rename = "manufacturerName", default)]
    pub manufacturer_name: String,
    #[serde(default)]
    pub origin: String,
    #[serde(rename = "productionDate", default)]
    pub production_date: String,
    #[serde(rename = "expiryDate", default)]
    pub expiry_date: String,
    #[serde(default)]
    pub ingredients: String,

    #[serde(rename = "storageLocation", default)]
    pub storage_location: String,
    #[serde(rename = "temperatureZone", default)]
    pub temperature_zone: String,
    #[serde(rename = "shippingBase", default)]
    pub shipping_base: String,
    #[serde(rename = "packageSize", default)]
    pub package_size: String,
    #[serde(default)]
    pub weight: String,
    #[serde(rename = "shippingRestriction", default)]
    pub shipping_restriction: String,

    #[serde(rename = "createdBy", default)]
    pub created_by: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "hiddenReason")]
    pub hidden_reason: Option<String>,

    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> ProductDto {
        ProductDto {
            name: "Green tea".into(),
            price: 480.0,
            stock: 24,
            min_stock: 5,
            order_unit: 2,
            supplier_company: "Maruko Trading".into(),
            supplier: "Tanaka".into(),
            purchase_place: "Shizuoka".into(),
            purchase_date: "2025-04-01".into(),
            lot_number: "LOT-0412".into(),
            manufacturer: "Ito Foods".into(),
            manufacturer_name: "Ito".into(),
            origin: "Japan".into(),
            production_date: "2025-03-20".into(),
            expiry_date: "2026-03-20".into(),
            ingredients: "green tea leaves".into(),
            storage_location: "North Warehouse".into(),
            temperature_zone: "ambient".into(),
            shipping_base: "Tokyo".into(),
            package_size: "60size".into(),
            weight: "120".into(),
            shipping_restriction: "none".into(),
            created_by: "sato".into(),
            department: "purchasing".into(),
            status: "active".into(),
            hidden_reason: None,
            image_urls: vec![],
        }
    }

    #[test]
    fn valid_record_passes() {
        let product = Product::new_for_insert(valid_dto());
        assert!(product.validate().is_ok());
        assert!(product.field_errors().is_empty());
    }

    #[test]
    fn hidden_reason_is_optional() {
        let product = Product::new_for_insert(valid_dto());
        assert!(product.hidden_reason.is_none());
        assert!(product.validate().is_ok());
    }

    #[test]
    fn empty_name_and_zero_price_are_reported_per_field() {
        let mut dto = valid_dto();
        dto.name = "  ".into();
        dto.price = 0.0;
        let product = Product::new_for_insert(dto);
        let errors = product.field_errors();
        assert!(errors.iter().any(|(key, _)| *key == "name"));
        assert!(errors.iter().any(|(key, _)| *key == "price"));
        assert!(product.validate().is_err());
    }

    #[test]
    fn sales_price_is_price_times_order_unit() {
        let mut dto = valid_dto();
        dto.price = 10.0;
        dto.order_unit = 2;
        let product = Product::new_for_insert(dto);
        assert_eq!(product.sales_price(), 20.0);
    }

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let product = Product::new_for_insert(valid_dto());
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("minStock").is_some());
        assert!(json.get("imageUrls").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("min_stock").is_none());
    }
}
