//! # Catalog Files
//!
//! Loads an inventory from a JSON array of product records with stock:
//!
//! ```json
//! [
//!   { "id": 3, "name": "Web Development with Clojure", "price": 2400, "vat_category_id": 2, "stock": 1 },
//!   { "id": 6, "name": "Pragmatic T-Shirt", "price": 900, "vat_category_id": 1, "stock": 2 }
//! ]
//! ```
//!
//! `stock` defaults to 0 when omitted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shop_core::{Catalog, Inventory, Product, ProductRecord};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Stock given to every bookshop product when no catalog file is configured.
pub const DEFAULT_BOOKSHOP_STOCK: u32 = 10;

/// One line of a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub product: ProductRecord,
    #[serde(default)]
    pub stock: u32,
}

/// Builds an inventory from parsed catalog entries.
pub fn inventory_from_entries(entries: Vec<CatalogEntry>) -> AppResult<Inventory> {
    let mut products = Vec::with_capacity(entries.len());
    let mut stock = Vec::with_capacity(entries.len());

    for entry in entries {
        let product = Product::try_from(entry.product)?;
        stock.push((product.id(), entry.stock));
        products.push(product);
    }

    let catalog = Catalog::new(products)?;
    Ok(Inventory::new(catalog, stock)?)
}

/// Parses catalog JSON text.
pub fn parse_inventory(json: &str) -> AppResult<Inventory> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    inventory_from_entries(entries)
}

/// Reads and parses a catalog file.
pub fn load_inventory(path: &Path) -> AppResult<Inventory> {
    let json = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let inventory = parse_inventory(&json)?;
    info!(path = %path.display(), products = inventory.catalog().len(), "catalog loaded");
    Ok(inventory)
}

/// The built-in bookshop with [`DEFAULT_BOOKSHOP_STOCK`] units of each product.
pub fn bookshop_inventory() -> AppResult<Inventory> {
    let catalog = Catalog::bookshop();
    let stock: Vec<_> = catalog
        .products()
        .map(|p| (p.id(), DEFAULT_BOOKSHOP_STOCK))
        .collect();

    Ok(Inventory::new(catalog, stock)?)
}
