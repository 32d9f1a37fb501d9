use super::fields::ProductField;

// Per-view column sets. Each view searches exactly the fields it shows;
// a keyword that only matches a field outside the view's list does not
// match from that view.

/// Basic list: searches the name only.
pub const BASIC_SEARCH_FIELDS: &[ProductField] = &[ProductField::Name];

pub const BASIC_COLUMNS: &[ProductField] = &[
    ProductField::Name,
    ProductField::Price,
    ProductField::Stock,
    ProductField::MinStock,
];

pub const PRICING_COLUMNS: &[ProductField] = &[
    ProductField::Name,
    ProductField::Price,
    ProductField::SalesPrice,
    ProductField::Stock,
    ProductField::MinStock,
    ProductField::OrderUnit,
];

pub const SUPPLY_COLUMNS: &[ProductField] = &[
    ProductField::SupplierCompany,
    ProductField::Supplier,
    ProductField::PurchasePlace,
    ProductField::PurchaseDate,
    ProductField::LotNumber,
];

pub const PRODUCTION_COLUMNS: &[ProductField] = &[
    ProductField::Manufacturer,
    ProductField::ManufacturerName,
    ProductField::Origin,
    ProductField::ProductionDate,
    ProductField::ExpiryDate,
    ProductField::Ingredients,
];

pub const LOGISTICS_COLUMNS: &[ProductField] = &[
    ProductField::StorageLocation,
    ProductField::TemperatureZone,
    ProductField::ShippingBase,
    ProductField::PackageSize,
    ProductField::Weight,
    ProductField::ShippingRestriction,
];

pub const ADMIN_COLUMNS: &[ProductField] = &[
    ProductField::CreatedBy,
    ProductField::Department,
    ProductField::CreatedAt,
    ProductField::UpdatedAt,
    ProductField::Status,
    ProductField::HiddenReason,
];

/// Fixed page window used by every record view.
pub const PAGE_SIZE: usize = 5;
