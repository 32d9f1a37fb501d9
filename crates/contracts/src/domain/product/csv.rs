//! Flat-table representation of the product record set.
//!
//! The column order declared here is the single source of truth for both
//! the browser-side export and the server-side import, so the two ends of
//! the round trip cannot drift. Actual delimiting/quoting is done by the
//! caller (the frontend's CSV writer, the backend's `csv` reader); this
//! module only maps records to rows and rows back to create payloads.

use super::aggregate::{Product, ProductDto};
use super::fields::ProductField;
use serde::{Deserialize, Serialize};

/// Separator for the multi-valued image column inside one CSV cell.
pub const IMAGE_URL_SEPARATOR: char = '|';

/// Exported columns in declaration order. `id`, `createdAt` and
/// `updatedAt` are exported for reference but ignored on import — the
/// store assigns fresh ones.
pub const CSV_HEADER: &[&str] = &[
    "id",
    "name",
    "price",
    "stock",
    "minStock",
    "orderUnit",
    "supplierCompany",
    "supplier",
    "purchasePlace",
    "purchaseDate",
    "lotNumber",
    "manufacturer",
    "manufacturerName",
    "origin",
    "productionDate",
    "expiryDate",
    "ingredients",
    "storageLocation",
    "temperatureZone",
    "shippingBase",
    "packageSize",
    "weight",
    "shippingRestriction",
    "createdBy",
    "department",
    "status",
    "hiddenReason",
    "createdAt",
    "updatedAt",
    "imageUrls",
];

/// One record as one flat row, columns in [`CSV_HEADER`] order.
pub fn to_csv_row(p: &Product) -> Vec<String> {
    vec![
        p.to_string_id(),
        p.name.clone(),
        ProductField::Price.text(p),
        ProductField::Stock.text(p),
        ProductField::MinStock.text(p),
        ProductField::OrderUnit.text(p),
        p.supplier_company.clone(),
        p.supplier.clone(),
        p.purchase_place.clone(),
        p.purchase_date.clone(),
        p.lot_number.clone(),
        p.manufacturer.clone(),
        p.manufacturer_name.clone(),
        p.origin.clone(),
        p.production_date.clone(),
        p.expiry_date.clone(),
        p.ingredients.clone(),
        p.storage_location.clone(),
        p.temperature_zone.clone(),
        p.shipping_base.clone(),
        p.package_size.clone(),
        p.weight.clone(),
        p.shipping_restriction.clone(),
        p.created_by.clone(),
        p.department.clone(),
        p.status.clone(),
        p.hidden_reason.clone().unwrap_or_default(),
        p.metadata.created_at.to_rfc3339(),
        p.metadata.updated_at.to_rfc3339(),
        p.image_urls.join(&IMAGE_URL_SEPARATOR.to_string()),
    ]
}

fn cell<'a>(header: &[String], row: &'a [String], name: &str) -> &'a str {
    header
        .iter()
        .position(|h| h == name)
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

fn numeric_cell<T: std::str::FromStr>(
    header: &[String],
    row: &[String],
    name: &str,
) -> Result<T, String> {
    let raw = cell(header, row, name).trim();
    if raw.is_empty() {
        return Err(format!("{}: missing numeric value", name));
    }
    raw.parse()
        .map_err(|_| format!("{}: not a number: {:?}", name, raw))
}

/// Parse one data row (headers matched by name, unknown columns
/// ignored) into a create payload.
///
/// The source system stored imported numeric columns as raw text; the
/// typed schema here forces the coercion, and a cell that fails to parse
/// fails the row instead of silently storing garbage.
pub fn dto_from_csv_row(header: &[String], row: &[String]) -> Result<ProductDto, String> {
    let text = |name: &str| cell(header, row, name).to_string();

    let hidden_reason = {
        let raw = text("hiddenReason");
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    };

    let image_urls: Vec<String> = cell(header, row, "imageUrls")
        .split(IMAGE_URL_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Ok(ProductDto {
        name: text("name"),
        price: numeric_cell(header, row, "price")?,
        stock: numeric_cell(header, row, "stock")?,
        min_stock: numeric_cell(header, row, "minStock")?,
        order_unit: numeric_cell(header, row, "orderUnit")?,
        supplier_company: text("supplierCompany"),
        supplier: text("supplier"),
        purchase_place: text("purchasePlace"),
        purchase_date: text("purchaseDate"),
        lot_number: text("lotNumber"),
        manufacturer: text("manufacturer"),
        manufacturer_name: text("manufacturerName"),
        origin: text("origin"),
        production_date: text("productionDate"),
        expiry_date: text("expiryDate"),
        ingredients: text("ingredients"),
        storage_location: text("storageLocation"),
        temperature_zone: text("temperatureZone"),
        shipping_base: text("shippingBase"),
        package_size: text("packageSize"),
        weight: text("weight"),
        shipping_restriction: text("shippingRestriction"),
        created_by: text("createdBy"),
        department: text("department"),
        status: text("status"),
        hidden_reason,
        image_urls,
    })
}

// ============================================================================
// Import outcome
// ============================================================================
/// Structured result of a batch import: rows are processed sequentially
/// and one row's failure never aborts the rest, but every failure is
/// reported instead of a bare "completed" flag.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImportOutcome {
    pub created: usize,
    pub failures: Vec<ImportFailure>,
}

/// One rejected row: 1-based data-row index plus the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportFailure {
    pub row: usize,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn sample_product() -> Product {
        let dto = ProductDto {
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
            image_urls: vec!["https://cdn/img1.png".into(), "https://cdn/img2.png".into()],
        };
        Product::new_for_insert(dto)
    }

    #[test]
    fn header_and_row_have_matching_arity() {
        let product = sample_product();
        assert_eq!(to_csv_row(&product).len(), CSV_HEADER.len());
    }

    #[test]
    fn row_round_trip_reconstructs_scalar_fields() {
        let product = sample_product();
        let header: Vec<String> = CSV_HEADER.iter().map(|s| s.to_string()).collect();
        let row = to_csv_row(&product);

        let dto = dto_from_csv_row(&header, &row).unwrap();
        assert_eq!(dto.name, product.name);
        assert_eq!(dto.price, product.price);
        assert_eq!(dto.stock, product.stock);
        assert_eq!(dto.min_stock, product.min_stock);
        assert_eq!(dto.order_unit, product.order_unit);
        assert_eq!(dto.purchase_date, product.purchase_date);
        assert_eq!(dto.storage_location, product.storage_location);
        assert_eq!(dto.hidden_reason, product.hidden_reason);
        assert_eq!(dto.image_urls, product.image_urls);
    }

    #[test]
    fn non_numeric_price_fails_the_row() {
        let header = owned(&["name", "price", "stock", "minStock", "orderUnit"]);
        let row = owned(&["tea", "cheap", "3", "1", "1"]);
        let err = dto_from_csv_row(&header, &row).unwrap_err();
        assert!(err.contains("price"), "unexpected error: {}", err);
    }

    #[test]
    fn missing_numeric_cell_fails_the_row() {
        let header = owned(&["name", "price", "stock", "minStock", "orderUnit"]);
        let row = owned(&["tea", "", "3", "1", "1"]);
        assert!(dto_from_csv_row(&header, &row).is_err());
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let header = owned(&[
            "legacyColumn",
            "name",
            "price",
            "stock",
            "minStock",
            "orderUnit",
        ]);
        let row = owned(&["x", "tea", "100", "3", "1", "1"]);
        let dto = dto_from_csv_row(&header, &row).unwrap();
        assert_eq!(dto.name, "tea");
        assert_eq!(dto.price, 100.0);
    }

    #[test]
    fn empty_image_cell_yields_no_urls() {
        let header = owned(&["name", "price", "stock", "minStock", "orderUnit", "imageUrls"]);
        let row = owned(&["tea", "100", "3", "1", "1", ""]);
        let dto = dto_from_csv_row(&header, &row).unwrap();
        assert!(dto.image_urls.is_empty());
    }
}
