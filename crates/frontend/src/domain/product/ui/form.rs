use super::csv_buttons::{ExportCsvButton, ImportCsvButton};
use crate::domain::product::api;
use crate::shared::i18n::{translate, use_locale};
use contracts::domain::product::ProductDto;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Url};

// ============================================================================
// Draft state
// ============================================================================
/// Raw input values, one string per field. Conversion to the typed
/// payload happens on submit so a half-typed number never poisons state.
#[derive(Debug, Clone, Default, PartialEq)]
struct ProductDraft {
    name: String,
    price: String,
    stock: String,
    min_stock: String,
    order_unit: String,
    supplier_company: String,
    supplier: String,
    purchase_place: String,
    purchase_date: String,
    lot_number: String,
    manufacturer: String,
    manufacturer_name: String,
    origin: String,
    production_date: String,
    expiry_date: String,
    ingredients: String,
    storage_location: String,
    temperature_zone: String,
    shipping_base: String,
    package_size: String,
    weight: String,
    shipping_restriction: String,
    created_by: String,
    department: String,
    status: String,
    hidden_reason: String,
}

/// Field error map: field key → message key for the active locale.
type FieldErrors = Vec<(&'static str, &'static str)>;

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: &str,
    errors: &mut FieldErrors,
) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push((key, "message.required"));
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push((key, "message.invalidNumber"));
            None
        }
    }
}

/// Validate the draft against the form schema and build the create
/// payload. Everything is required except the hidden reason; timestamps
/// and the identifier are server-assigned and have no inputs at all.
fn build_dto(draft: &ProductDraft) -> Result<ProductDto, FieldErrors> {
    let mut errors: FieldErrors = Vec::new();

    let price: Option<f64> = parse_number("price", &draft.price, &mut errors);
    let stock: Option<i64> = parse_number("stock", &draft.stock, &mut errors);
    let min_stock: Option<i64> = parse_number("minStock", &draft.min_stock, &mut errors);
    let order_unit: Option<i64> = parse_number("orderUnit", &draft.order_unit, &mut errors);

    if let Some(price) = price {
        if price < 1.0 {
            errors.push(("price", "message.minOne"));
        }
    }
    if let Some(stock) = stock {
        if stock < 0 {
            errors.push(("stock", "message.minZero"));
        }
    }
    if let Some(min_stock) = min_stock {
        if min_stock < 0 {
            errors.push(("minStock", "message.minZero"));
        }
    }
    if let Some(order_unit) = order_unit {
        if order_unit < 1 {
            errors.push(("orderUnit", "message.minOne"));
        }
    }

    let required_text: &[(&'static str, &String)] = &[
        ("name", &draft.name),
        ("supplierCompany", &draft.supplier_company),
        ("supplier", &draft.supplier),
        ("purchasePlace", &draft.purchase_place),
        ("purchaseDate", &draft.purchase_date),
        ("lotNumber", &draft.lot_number),
        ("manufacturer", &draft.manufacturer),
        ("manufacturerName", &draft.manufacturer_name),
        ("origin", &draft.origin),
        ("productionDate", &draft.production_date),
        ("expiryDate", &draft.expiry_date),
        ("ingredients", &draft.ingredients),
        ("storageLocation", &draft.storage_location),
        ("temperatureZone", &draft.temperature_zone),
        ("shippingBase", &draft.shipping_base),
        ("packageSize", &draft.package_size),
        ("weight", &draft.weight),
        ("shippingRestriction", &draft.shipping_restriction),
        ("createdBy", &draft.created_by),
        ("department", &draft.department),
        ("status", &draft.status),
    ];
    for &(key, value) in required_text {
        if value.trim().is_empty() {
            errors.push((key, "message.required"));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let hidden_reason = {
        let trimmed = draft.hidden_reason.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    Ok(ProductDto {
        name: draft.name.trim().to_string(),
        price: price.unwrap_or_default(),
        stock: stock.unwrap_or_default(),
        min_stock: min_stock.unwrap_or_default(),
        order_unit: order_unit.unwrap_or_default(),
        supplier_company: draft.supplier_company.trim().to_string(),
        supplier: draft.supplier.trim().to_string(),
        purchase_place: draft.purchase_place.trim().to_string(),
        purchase_date: draft.purchase_date.trim().to_string(),
        lot_number: draft.lot_number.trim().to_string(),
        manufacturer: draft.manufacturer.trim().to_string(),
        manufacturer_name: draft.manufacturer_name.trim().to_string(),
        origin: draft.origin.trim().to_string(),
        production_date: draft.production_date.trim().to_string(),
        expiry_date: draft.expiry_date.trim().to_string(),
        ingredients: draft.ingredients.trim().to_string(),
        storage_location: draft.storage_location.trim().to_string(),
        temperature_zone: draft.temperature_zone.trim().to_string(),
        shipping_base: draft.shipping_base.trim().to_string(),
        package_size: draft.package_size.trim().to_string(),
        weight: draft.weight.trim().to_string(),
        shipping_restriction: draft.shipping_restriction.trim().to_string(),
        created_by: draft.created_by.trim().to_string(),
        department: draft.department.trim().to_string(),
        status: draft.status.trim().to_string(),
        hidden_reason,
        image_urls: Vec::new(),
    })
}

// ============================================================================
// Field layout
// ============================================================================
#[derive(Clone, Copy)]
struct FieldSpec {
    key: &'static str,
    input_type: &'static str,
    get: fn(&ProductDraft) -> String,
    set: fn(&mut ProductDraft, String),
}

fn sections() -> Vec<(&'static str, Vec<FieldSpec>)> {
    vec![
        (
            "section.basicInfo",
            vec![
                FieldSpec { key: "name", input_type: "text", get: |d| d.name.clone(), set: |d, v| d.name = v },
                FieldSpec { key: "price", input_type: "number", get: |d| d.price.clone(), set: |d, v| d.price = v },
                FieldSpec { key: "stock", input_type: "number", get: |d| d.stock.clone(), set: |d, v| d.stock = v },
            ],
        ),
        (
            "section.pricingInfo",
            vec![
                FieldSpec { key: "minStock", input_type: "number", get: |d| d.min_stock.clone(), set: |d, v| d.min_stock = v },
                FieldSpec { key: "orderUnit", input_type: "number", get: |d| d.order_unit.clone(), set: |d, v| d.order_unit = v },
            ],
        ),
        (
            "section.supplyInfo",
            vec![
                FieldSpec { key: "supplierCompany", input_type: "text", get: |d| d.supplier_company.clone(), set: |d, v| d.supplier_company = v },
                FieldSpec { key: "supplier", input_type: "text", get: |d| d.supplier.clone(), set: |d, v| d.supplier = v },
                FieldSpec { key: "purchasePlace", input_type: "text", get: |d| d.purchase_place.clone(), set: |d, v| d.purchase_place = v },
                FieldSpec { key: "purchaseDate", input_type: "date", get: |d| d.purchase_date.clone(), set: |d, v| d.purchase_date = v },
                FieldSpec { key: "lotNumber", input_type: "text", get: |d| d.lot_number.clone(), set: |d, v| d.lot_number = v },
            ],
        ),
        (
            "section.productionInfo",
            vec![
                FieldSpec { key: "manufacturer", input_type: "text", get: |d| d.manufacturer.clone(), set: |d, v| d.manufacturer = v },
                FieldSpec { key: "manufacturerName", input_type: "text", get: |d| d.manufacturer_name.clone(), set: |d, v| d.manufacturer_name = v },
                FieldSpec { key: "origin", input_type: "text", get: |d| d.origin.clone(), set: |d, v| d.origin = v },
                FieldSpec { key: "productionDate", input_type: "date", get: |d| d.production_date.clone(), set: |d, v| d.production_date = v },
                FieldSpec { key: "expiryDate", input_type: "date", get: |d| d.expiry_date.clone(), set: |d, v| d.expiry_date = v },
                FieldSpec { key: "ingredients", input_type: "text", get: |d| d.ingredients.clone(), set: |d, v| d.ingredients = v },
            ],
        ),
        (
            "section.logisticsInfo",
            vec![
                FieldSpec { key: "storageLocation", input_type: "text", get: |d| d.storage_location.clone(), set: |d, v| d.storage_location = v },
                FieldSpec { key: "temperatureZone", input_type: "text", get: |d| d.temperature_zone.clone(), set: |d, v| d.temperature_zone = v },
                FieldSpec { key: "shippingBase", input_type: "text", get: |d| d.shipping_base.clone(), set: |d, v| d.shipping_base = v },
                FieldSpec { key: "packageSize", input_type: "text", get: |d| d.package_size.clone(), set: |d, v| d.package_size = v },
                FieldSpec { key: "weight", input_type: "text", get: |d| d.weight.clone(), set: |d, v| d.weight = v },
                FieldSpec { key: "shippingRestriction", input_type: "text", get: |d| d.shipping_restriction.clone(), set: |d, v| d.shipping_restriction = v },
            ],
        ),
        (
            "section.adminInfo",
            vec![
                FieldSpec { key: "createdBy", input_type: "text", get: |d| d.created_by.clone(), set: |d, v| d.created_by = v },
                FieldSpec { key: "department", input_type: "text", get: |d| d.department.clone(), set: |d, v| d.department = v },
                FieldSpec { key: "status", input_type: "text", get: |d| d.status.clone(), set: |d, v| d.status = v },
                FieldSpec { key: "hiddenReason", input_type: "text", get: |d| d.hidden_reason.clone(), set: |d, v| d.hidden_reason = v },
            ],
        ),
    ]
}

// ============================================================================
// Component
// ============================================================================
/// Product entry form. Images upload strictly one at a time in selection
/// order; the first failure aborts the submit and already-uploaded
/// images are not rolled back.
#[component]
pub fn ProductForm() -> impl IntoView {
    let locale = use_locale();

    let draft = RwSignal::new(ProductDraft::default());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (is_submitting, set_is_submitting) = signal(false);
    // Object URLs for thumbnails of the files picked in the input.
    let (previews, set_previews) = signal(Vec::<String>::new());

    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let handle_files_changed = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let input: HtmlInputElement = input.unchecked_into();
        let mut urls = Vec::new();
        if let Some(files) = input.files() {
            for i in 0..files.length() {
                if let Some(file) = files.get(i) {
                    if let Ok(url) = Url::create_object_url_with_blob(&file) {
                        urls.push(url);
                    }
                }
            }
        }
        set_previews.set(urls);
    };

    let handle_submit = move |_| {
        let current = draft.get_untracked();
        let dto = match build_dto(&current) {
            Ok(dto) => dto,
            Err(field_errors) => {
                set_errors.set(field_errors);
                return;
            }
        };
        set_errors.set(FieldErrors::new());
        set_is_submitting.set(true);

        // Snapshot the selected files before going async.
        let mut files = Vec::new();
        if let Some(input) = file_input.get_untracked() {
            let input: HtmlInputElement = input.unchecked_into();
            if let Some(list) = input.files() {
                for i in 0..list.length() {
                    if let Some(file) = list.get(i) {
                        files.push(file);
                    }
                }
            }
        }

        leptos::task::spawn_local(async move {
            let mut dto = dto;
            let mut image_urls = Vec::new();
            for file in &files {
                match api::upload_image(file).await {
                    Ok(url) => image_urls.push(url),
                    Err(e) => {
                        log::error!("image upload failed: {}", e);
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(translate(
                                locale.get_untracked(),
                                "message.saveFailed",
                            ));
                        }
                        set_is_submitting.set(false);
                        return;
                    }
                }
            }
            dto.image_urls = image_urls;

            match api::create_product(&dto).await {
                Ok(_) => {
                    draft.set(ProductDraft::default());
                    set_previews.set(Vec::new());
                    if let Some(input) = file_input.get_untracked() {
                        let input: HtmlInputElement = input.unchecked_into();
                        input.set_value("");
                    }
                }
                Err(e) => {
                    log::error!("create failed: {}", e);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(translate(
                            locale.get_untracked(),
                            "message.saveFailed",
                        ));
                    }
                }
            }
            set_is_submitting.set(false);
        });
    };

    let error_for = move |key: &'static str| -> Option<&'static str> {
        errors
            .get()
            .iter()
            .find(|(field, _)| *field == key)
            .map(|(_, message)| *message)
    };

    view! {
        <div style="max-width: 720px;">
            <div style="display: flex; gap: 12px; margin-bottom: 20px;">
                <ImportCsvButton on_imported=Callback::new(move |_| ()) />
                <ExportCsvButton />
            </div>

            {move || {
                let has_errors = !errors.get().is_empty();
                has_errors
                    .then(|| {
                        view! {
                            <p style="color: #c00; margin-bottom: 12px;">
                                {translate(locale.get(), "message.validationError")}
                            </p>
                        }
                    })
            }}

            {sections()
                .into_iter()
                .map(|(section_key, fields)| {
                    view! {
                        <div style="margin-bottom: 20px;">
                            <h2 style="font-size: 18px; font-weight: 600; margin-bottom: 8px;">
                                {move || translate(locale.get(), section_key)}
                            </h2>
                            {fields
                                .into_iter()
                                .map(|spec| {
                                    view! {
                                        <div style="margin-bottom: 10px;">
                                            <label style="display: block; font-weight: 600; margin-bottom: 2px;">
                                                {move || translate(locale.get(), spec.key)}
                                            </label>
                                            <input
                                                type=spec.input_type
                                                style="border: 1px solid #ccc; padding: 6px 8px; border-radius: 4px; width: 100%;"
                                                prop:value=move || (spec.get)(&draft.get())
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    draft.update(|d| (spec.set)(d, value));
                                                }
                                            />
                                            {move || {
                                                error_for(spec.key)
                                                    .map(|message_key| {
                                                        view! {
                                                            <p style="color: #c00; font-size: 13px; margin: 2px 0 0 0;">
                                                                {translate(locale.get(), message_key)}
                                                            </p>
                                                        }
                                                    })
                                            }}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}

            <div style="margin-bottom: 16px;">
                <label style="display: block; font-weight: 600; margin-bottom: 4px;">
                    {move || translate(locale.get(), "image.label")}
                </label>
                <input
                    node_ref=file_input
                    type="file"
                    accept="image/*"
                    multiple
                    on:change=handle_files_changed
                />
                {move || {
                    let urls = previews.get();
                    (!urls.is_empty())
                        .then(|| {
                            view! {
                                <div style="display: flex; gap: 8px; flex-wrap: wrap; margin-top: 8px;">
                                    {urls
                                        .into_iter()
                                        .map(|url| {
                                            view! {
                                                <img
                                                    src=url
                                                    style="width: 128px; height: auto; border: 1px solid #ddd; border-radius: 4px;"
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>

            <button
                style="background: #2563eb; color: white; border: none; padding: 10px 24px; border-radius: 4px; cursor: pointer; font-size: 15px;"
                disabled=move || is_submitting.get()
                on:click=handle_submit
            >
                {move || {
                    if is_submitting.get() {
                        translate(locale.get(), "action.submitting")
                    } else {
                        translate(locale.get(), "action.submit")
                    }
                }}
            </button>
        </div>
    }
}
