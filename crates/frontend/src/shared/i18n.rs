//! Display labels for the two supported locales.
//!
//! One static lookup per locale, keyed by the same strings the column
//! descriptors use, with the key itself as the fallback. Labels are
//! presentation only — nothing in the record engine reads them. The
//! active locale is the single piece of client state that survives a
//! reload (localStorage).

use leptos::prelude::*;

const LOCALE_STORAGE_KEY: &str = "ui_locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Ja,
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "ja" => Some(Locale::Ja),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

/// Locale signal shared through context.
#[derive(Clone, Copy)]
pub struct LocaleContext(pub RwSignal<Locale>);

pub fn provide_locale() {
    let initial = stored_locale().unwrap_or(Locale::Ja);
    provide_context(LocaleContext(RwSignal::new(initial)));
}

pub fn use_locale() -> RwSignal<Locale> {
    use_context::<LocaleContext>()
        .expect("LocaleContext not provided")
        .0
}

pub fn switch_locale(signal: RwSignal<Locale>, locale: Locale) {
    signal.set(locale);
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.code());
    }
}

fn stored_locale() -> Option<Locale> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    let code = storage.get_item(LOCALE_STORAGE_KEY).ok().flatten()?;
    Locale::from_code(&code)
}

/// Resolve a display string. Unknown keys fall back to the key itself so
/// a missing entry shows up on screen instead of vanishing.
pub fn translate(locale: Locale, key: &'static str) -> &'static str {
    let resolved = match locale {
        Locale::Ja => translate_ja(key),
        Locale::En => translate_en(key),
    };
    if resolved.is_empty() {
        log::warn!("missing translation for key: {}", key);
        key
    } else {
        resolved
    }
}

fn translate_ja(key: &str) -> &'static str {
    match key {
        "dashboardTitle" => "在庫管理ダッシュボード",
        "searchPlaceholder" => "検索キーワード...",

        // Sidebar tabs
        "tab.create" => "商品追加",
        "tab.basic" => "基本情報",
        "tab.pricing" => "価格・在庫",
        "tab.supply" => "仕入れ情報",
        "tab.production" => "生産・製造情報",
        "tab.logistics" => "ロジスティクス",
        "tab.admin" => "管理・運用",

        // Form sections
        "section.basicInfo" => "基本情報",
        "section.pricingInfo" => "価格・在庫",
        "section.supplyInfo" => "仕入れ情報",
        "section.productionInfo" => "生産・製造情報",
        "section.logisticsInfo" => "ロジスティクス",
        "section.adminInfo" => "管理・運用",

        // Record fields
        "name" => "商品名",
        "price" => "単価（円）",
        "salesPrice" => "販売価格（円）",
        "stock" => "在庫数",
        "minStock" => "最低在庫数",
        "orderUnit" => "発注単位",
        "supplierCompany" => "仕入れ会社",
        "supplier" => "仕入れ先",
        "purchasePlace" => "仕入れ場所",
        "purchaseDate" => "仕入れ日",
        "lotNumber" => "ロット番号",
        "manufacturer" => "製造者",
        "manufacturerName" => "製造者名",
        "origin" => "原産地",
        "productionDate" => "製造日",
        "expiryDate" => "賞味期限",
        "ingredients" => "原材料",
        "storageLocation" => "保管場所",
        "temperatureZone" => "温度帯",
        "shippingBase" => "配送拠点",
        "packageSize" => "梱包サイズ",
        "weight" => "重量",
        "shippingRestriction" => "配送制限",
        "createdBy" => "作成者",
        "department" => "部署",
        "status" => "ステータス",
        "hiddenReason" => "非表示理由",
        "createdAt" => "作成日時",
        "updatedAt" => "更新日時",

        // Actions and messages
        "action.submit" => "登録",
        "action.submitting" => "登録中...",
        "action.delete" => "削除",
        "action.hide" => "非表示にする",
        "action.show" => "表示する",
        "action.importCsv" => "CSVインポート",
        "action.exportCsv" => "CSVエクスポート",
        "image.label" => "商品画像",
        "message.saveFailed" => "登録に失敗しました",
        "message.loadFailed" => "読み込みに失敗しました",
        "message.exportEmpty" => "エクスポートするデータがありません",
        "message.importDone" => "CSVインポート完了",
        "message.importFailedRows" => "失敗した行",
        "message.validationError" => "入力内容を確認してください",
        "message.required" => "必須項目です",
        "message.invalidNumber" => "数値を入力してください",
        "message.minOne" => "1以上の数値を入力してください",
        "message.minZero" => "0以上の数値を入力してください",
        _ => "",
    }
}

fn translate_en(key: &str) -> &'static str {
    match key {
        "dashboardTitle" => "Inventory Dashboard",
        "searchPlaceholder" => "Search keyword...",

        // Sidebar tabs
        "tab.create" => "Add Product",
        "tab.basic" => "Basic Info",
        "tab.pricing" => "Pricing & Stock",
        "tab.supply" => "Supply Info",
        "tab.production" => "Production Info",
        "tab.logistics" => "Logistics",
        "tab.admin" => "Administration",

        // Form sections
        "section.basicInfo" => "Basic Info",
        "section.pricingInfo" => "Pricing & Stock",
        "section.supplyInfo" => "Supply Info",
        "section.productionInfo" => "Production Info",
        "section.logisticsInfo" => "Logistics",
        "section.adminInfo" => "Administration",

        // Record fields
        "name" => "Name",
        "price" => "Unit Price",
        "salesPrice" => "Sales Price",
        "stock" => "Stock",
        "minStock" => "Min Stock",
        "orderUnit" => "Order Unit",
        "supplierCompany" => "Supplier Company",
        "supplier" => "Supplier",
        "purchasePlace" => "Purchase Place",
        "purchaseDate" => "Purchase Date",
        "lotNumber" => "Lot Number",
        "manufacturer" => "Manufacturer",
        "manufacturerName" => "Manufacturer Name",
        "origin" => "Origin",
        "productionDate" => "Production Date",
        "expiryDate" => "Expiry Date",
        "ingredients" => "Ingredients",
        "storageLocation" => "Storage Location",
        "temperatureZone" => "Temperature Zone",
        "shippingBase" => "Shipping Base",
        "packageSize" => "Package Size",
        "weight" => "Weight",
        "shippingRestriction" => "Shipping Restriction",
        "createdBy" => "Created By",
        "department" => "Department",
        "status" => "Status",
        "hiddenReason" => "Hidden Reason",
        "createdAt" => "Created At",
        "updatedAt" => "Updated At",

        // Actions and messages
        "action.submit" => "Submit",
        "action.submitting" => "Submitting...",
        "action.delete" => "Delete",
        "action.hide" => "Hide",
        "action.show" => "Show",
        "action.importCsv" => "Import CSV",
        "action.exportCsv" => "Export CSV",
        "image.label" => "Product Images",
        "message.saveFailed" => "Failed to save the product",
        "message.loadFailed" => "Failed to load products",
        "message.exportEmpty" => "No data to export",
        "message.importDone" => "CSV import finished",
        "message.importFailedRows" => "failed rows",
        "message.validationError" => "Please check the highlighted fields",
        "message.required" => "This field is required",
        "message.invalidNumber" => "Please enter a number",
        "message.minOne" => "Must be 1 or more",
        "message.minZero" => "Must be 0 or more",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::ProductField;

    #[test]
    fn every_column_key_has_labels_in_both_locales() {
        let fields = [
            ProductField::Name,
            ProductField::Price,
            ProductField::SalesPrice,
            ProductField::Stock,
            ProductField::MinStock,
            ProductField::OrderUnit,
            ProductField::SupplierCompany,
            ProductField::Supplier,
            ProductField::PurchasePlace,
            ProductField::PurchaseDate,
            ProductField::LotNumber,
            ProductField::Manufacturer,
            ProductField::ManufacturerName,
            ProductField::Origin,
            ProductField::ProductionDate,
            ProductField::ExpiryDate,
            ProductField::Ingredients,
            ProductField::StorageLocation,
            ProductField::TemperatureZone,
            ProductField::ShippingBase,
            ProductField::PackageSize,
            ProductField::Weight,
            ProductField::ShippingRestriction,
            ProductField::CreatedBy,
            ProductField::Department,
            ProductField::Status,
            ProductField::HiddenReason,
            ProductField::CreatedAt,
            ProductField::UpdatedAt,
        ];
        for field in fields {
            assert!(!translate_ja(field.key()).is_empty(), "ja: {}", field.key());
            assert!(!translate_en(field.key()).is_empty(), "en: {}", field.key());
        }
    }

    #[test]
    fn unknown_key_falls_back_to_the_key_itself() {
        assert_eq!(translate(Locale::Ja, "no.such.key"), "no.such.key");
        assert_eq!(translate(Locale::En, "no.such.key"), "no.such.key");
    }
}
