use std::env;

use persistence::storage::{StorageConfig, prepare_data_dir};

/// Resolve where the collection files live
///
/// Environment variables:
/// - DATA_DIR: Directory holding the collection files (default: "data")
/// - PRODUCTS_FILE: Product collection file name (default: "products.json")
/// - CARTS_FILE: Cart collection file name (default: "carts.json")
pub fn from_env() -> StorageConfig {
    storage_config_from(|key| env::var(key).ok())
}

/// Create the data directory before the first request writes to it
pub async fn init_storage(config: &StorageConfig) -> anyhow::Result<()> {
    prepare_data_dir(config).await?;
    tracing::info!(
        products = %config.products_path().display(),
        carts = %config.carts_path().display(),
        "storage ready"
    );
    Ok(())
}

fn storage_config_from(lookup: impl Fn(&str) -> Option<String>) -> StorageConfig {
    let mut config = StorageConfig::new(lookup("DATA_DIR").unwrap_or_else(|| "data".to_string()));
    if let Some(products_file) = lookup("PRODUCTS_FILE") {
        config.products_file = products_file;
    }
    if let Some(carts_file) = lookup("CARTS_FILE") {
        config.carts_file = carts_file;
    }
    config
}
