use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_path).is_absolute() {
        std::path::PathBuf::from(db_path)
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    // Minimal schema bootstrap; timestamps are RFC 3339 text.
    let create_products = r#"
        CREATE TABLE IF NOT EXISTS products (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL DEFAULT '',
            price REAL NOT NULL DEFAULT 0,
            stock INTEGER NOT NULL DEFAULT 0,
            min_stock INTEGER NOT NULL DEFAULT 0,
            order_unit INTEGER NOT NULL DEFAULT 0,
            supplier_company TEXT NOT NULL DEFAULT '',
            supplier TEXT NOT NULL DEFAULT '',
            purchase_place TEXT NOT NULL DEFAULT '',
            purchase_date TEXT NOT NULL DEFAULT '',
            lot_number TEXT NOT NULL DEFAULT '',
            manufacturer TEXT NOT NULL DEFAULT '',
            manufacturer_name TEXT NOT NULL DEFAULT '',
            origin TEXT NOT NULL DEFAULT '',
            production_date TEXT NOT NULL DEFAULT '',
            expiry_date TEXT NOT NULL DEFAULT '',
            ingredients TEXT NOT NULL DEFAULT '',
            storage_location TEXT NOT NULL DEFAULT '',
            temperature_zone TEXT NOT NULL DEFAULT '',
            shipping_base TEXT NOT NULL DEFAULT '',
            package_size TEXT NOT NULL DEFAULT '',
            weight TEXT NOT NULL DEFAULT '',
            shipping_restriction TEXT NOT NULL DEFAULT '',
            created_by TEXT NOT NULL DEFAULT '',
            department TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT '',
            hidden_reason TEXT,
            hidden INTEGER NOT NULL DEFAULT 0,
            image_urls TEXT NOT NULL DEFAULT '[]',
            created_at TEXT,
            updated_at TEXT
        );
    "#;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        create_products.to_string(),
    ))
    .await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database already initialized"))?;

    tracing::info!("Database initialized at {}", normalized);
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN.get().expect("database not initialized")
}
