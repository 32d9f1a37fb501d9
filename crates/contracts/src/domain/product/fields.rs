use super::aggregate::Product;
use std::cmp::Ordering;

// ============================================================================
// Column descriptors
// ============================================================================
/// Closed set of sortable/searchable product columns, including the
/// derived sales price. Field access never goes through a runtime string
/// key: adding a column means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Price,
    SalesPrice,
    Stock,
    MinStock,
    OrderUnit,
    SupplierCompany,
    Supplier,
    PurchasePlace,
    PurchaseDate,
    LotNumber,
    Manufacturer,
    ManufacturerName,
    Origin,
    ProductionDate,
    ExpiryDate,
    Ingredients,
    StorageLocation,
    TemperatureZone,
    ShippingBase,
    PackageSize,
    Weight,
    ShippingRestriction,
    CreatedBy,
    Department,
    Status,
    HiddenReason,
    CreatedAt,
    UpdatedAt,
}

/// Typed projection of one column from one record. Absent values are
/// already defaulted: empty string for text, zero for numbers and
/// instants, so they sort first in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    /// Milliseconds since the Unix epoch.
    Instant(i64),
}

/// Calendar-date string (`YYYY-MM-DD`) to epoch millis; anything
/// unparseable collapses to the epoch, matching the absent-value rule.
fn date_string_millis(s: &str) -> i64 {
    chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Numbers render the way the UI shows them: integral values without a
/// trailing fraction, so substring search over "480" finds price 480.0.
fn number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl ProductField {
    /// Stable wire/UI key, matching the stored document field names.
    pub fn key(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Price => "price",
            ProductField::SalesPrice => "salesPrice",
            ProductField::Stock => "stock",
            ProductField::MinStock => "minStock",
            ProductField::OrderUnit => "orderUnit",
            ProductField::SupplierCompany => "supplierCompany",
            ProductField::Supplier => "supplier",
            ProductField::PurchasePlace => "purchasePlace",
            ProductField::PurchaseDate => "purchaseDate",
            ProductField::LotNumber => "lotNumber",
            ProductField::Manufacturer => "manufacturer",
            ProductField::ManufacturerName => "manufacturerName",
            ProductField::Origin => "origin",
            ProductField::ProductionDate => "productionDate",
            ProductField::ExpiryDate => "expiryDate",
            ProductField::Ingredients => "ingredients",
            ProductField::StorageLocation => "storageLocation",
            ProductField::TemperatureZone => "temperatureZone",
            ProductField::ShippingBase => "shippingBase",
            ProductField::PackageSize => "packageSize",
            ProductField::Weight => "weight",
            ProductField::ShippingRestriction => "shippingRestriction",
            ProductField::CreatedBy => "createdBy",
            ProductField::Department => "department",
            ProductField::Status => "status",
            ProductField::HiddenReason => "hiddenReason",
            ProductField::CreatedAt => "createdAt",
            ProductField::UpdatedAt => "updatedAt",
        }
    }

    /// Typed accessor. Numeric fields project as `Number`, the temporal
    /// fields as `Instant`, everything else as `Text`.
    pub fn value(&self, p: &Product) -> FieldValue {
        match self {
            ProductField::Price => FieldValue::Number(p.price),
            ProductField::SalesPrice => FieldValue::Number(p.sales_price()),
            ProductField::Stock => FieldValue::Number(p.stock as f64),
            ProductField::MinStock => FieldValue::Number(p.min_stock as f64),
            ProductField::OrderUnit => FieldValue::Number(p.order_unit as f64),

            ProductField::PurchaseDate => FieldValue::Instant(date_string_millis(&p.purchase_date)),
            ProductField::ProductionDate => {
                FieldValue::Instant(date_string_millis(&p.production_date))
            }
            ProductField::ExpiryDate => FieldValue::Instant(date_string_millis(&p.expiry_date)),
            ProductField::CreatedAt => {
                FieldValue::Instant(p.metadata.created_at.timestamp_millis())
            }
            ProductField::UpdatedAt => {
                FieldValue::Instant(p.metadata.updated_at.timestamp_millis())
            }

            ProductField::Name => FieldValue::Text(p.name.clone()),
            ProductField::SupplierCompany => FieldValue::Text(p.supplier_company.clone()),
            ProductField::Supplier => FieldValue::Text(p.supplier.clone()),
            ProductField::PurchasePlace => FieldValue::Text(p.purchase_place.clone()),
            ProductField::LotNumber => FieldValue::Text(p.lot_number.clone()),
            ProductField::Manufacturer => FieldValue::Text(p.manufacturer.clone()),
            ProductField::ManufacturerName => FieldValue::Text(p.manufacturer_name.clone()),
            ProductField::Origin => FieldValue::Text(p.origin.clone()),
            ProductField::Ingredients => FieldValue::Text(p.ingredients.clone()),
            ProductField::StorageLocation => FieldValue::Text(p.storage_location.clone()),
            ProductField::TemperatureZone => FieldValue::Text(p.temperature_zone.clone()),
            ProductField::ShippingBase => FieldValue::Text(p.shipping_base.clone()),
            ProductField::PackageSize => FieldValue::Text(p.package_size.clone()),
            ProductField::Weight => FieldValue::Text(p.weight.clone()),
            ProductField::ShippingRestriction => {
                FieldValue::Text(p.shipping_restriction.clone())
            }
            ProductField::CreatedBy => FieldValue::Text(p.created_by.clone()),
            ProductField::Department => FieldValue::Text(p.department.clone()),
            ProductField::Status => FieldValue::Text(p.status.clone()),
            ProductField::HiddenReason => {
                FieldValue::Text(p.hidden_reason.clone().unwrap_or_default())
            }
        }
    }

    /// Display/search text for one column of one record — the same string
    /// the table cell renders, so substring search matches what the user
    /// sees.
    pub fn text(&self, p: &Product) -> String {
        match self {
            ProductField::PurchaseDate => p.purchase_date.clone(),
            ProductField::ProductionDate => p.production_date.clone(),
            ProductField::ExpiryDate => p.expiry_date.clone(),
            ProductField::CreatedAt => {
                p.metadata.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
            }
            ProductField::UpdatedAt => {
                p.metadata.updated_at.format("%Y-%m-%d %H:%M:%S").to_string()
            }
            _ => match self.value(p) {
                FieldValue::Number(n) => number_text(n),
                FieldValue::Text(s) => s,
                FieldValue::Instant(_) => unreachable!("instant fields handled above"),
            },
        }
    }

    /// Ordering decision for one column over two record snapshots.
    ///
    /// Numbers compare numerically, temporal fields by instant, all other
    /// values as case-insensitive strings. Ties return `Equal`; callers
    /// must sort stably so input order survives.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match (self.value(a), self.value(b)) {
            (FieldValue::Number(x), FieldValue::Number(y)) => {
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Instant(x), FieldValue::Instant(y)) => x.cmp(&y),
            (x, y) => {
                let xs = match x {
                    FieldValue::Text(s) => s,
                    FieldValue::Number(n) => number_text(n),
                    FieldValue::Instant(i) => i.to_string(),
                };
                let ys = match y {
                    FieldValue::Text(s) => s,
                    FieldValue::Number(n) => number_text(n),
                    FieldValue::Instant(i) => i.to_string(),
                };
                xs.to_lowercase().cmp(&ys.to_lowercase())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::aggregate::ProductDto;

    fn product(f: impl FnOnce(&mut ProductDto)) -> Product {
        let mut dto = ProductDto {
            name: "item".into(),
            ..ProductDto::default()
        };
        f(&mut dto);
        Product::new_for_insert(dto)
    }

    #[test]
    fn numeric_fields_compare_by_value_not_text() {
        let a = product(|d| d.price = 9.0);
        let b = product(|d| d.price = 80.0);
        // Lexicographically "9" > "80"; numerically 9 < 80.
        assert_eq!(ProductField::Price.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn text_comparison_is_case_insensitive() {
        let a = product(|d| d.supplier = "alpha".into());
        let b = product(|d| d.supplier = "BRAVO".into());
        assert_eq!(ProductField::Supplier.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn date_strings_compare_as_instants() {
        let a = product(|d| d.expiry_date = "2025-02-01".into());
        let b = product(|d| d.expiry_date = "2025-10-01".into());
        assert_eq!(ProductField::ExpiryDate.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn absent_date_collapses_to_epoch_and_sorts_first() {
        let a = product(|d| d.expiry_date = String::new());
        let b = product(|d| d.expiry_date = "1971-01-01".into());
        assert_eq!(ProductField::ExpiryDate.compare(&a, &b), Ordering::Less);
        let garbage = product(|d| d.expiry_date = "soon".into());
        assert_eq!(ProductField::ExpiryDate.compare(&garbage, &b), Ordering::Less);
    }

    #[test]
    fn missing_hidden_reason_reads_as_empty_text() {
        let a = product(|d| d.hidden_reason = None);
        let b = product(|d| d.hidden_reason = Some("seasonal".into()));
        assert_eq!(ProductField::HiddenReason.compare(&a, &b), Ordering::Less);
        assert_eq!(ProductField::HiddenReason.text(&a), "");
    }

    #[test]
    fn sales_price_is_derived_for_comparison() {
        let a = product(|d| {
            d.price = 10.0;
            d.order_unit = 2;
        });
        let b = product(|d| {
            d.price = 5.0;
            d.order_unit = 4;
        });
        // 20 vs 20: tie.
        assert_eq!(ProductField::SalesPrice.compare(&a, &b), Ordering::Equal);
        // But raw price orders b first.
        assert_eq!(ProductField::Price.compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn integral_numbers_render_without_fraction() {
        let p = product(|d| d.price = 480.0);
        assert_eq!(ProductField::Price.text(&p), "480");
        let p = product(|d| d.price = 19.5);
        assert_eq!(ProductField::Price.text(&p), "19.5");
    }
}
