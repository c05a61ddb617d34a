//! # Inventory
//!
//! Remaining stock for every catalog product, and the handle carts share it
//! through.
//!
//! ## Stock Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Cart::add ─────► take(id)       stock 2 ──► 1    (true)              │
//! │   Cart::add ─────► take(id)       stock 1 ──► 0    (true)              │
//! │   Cart::add ─────► take(id)       stock 0 ──► 0    (false, sold out)   │
//! │   Cart::remove ──► give_back(id)  stock 0 ──► 1                        │
//! │                                                                         │
//! │   Invariant: stock is only ever tracked for ids in the catalog         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sharing
//! Carts in one deployment reserve from the same stock. [`SharedInventory`]
//! wraps the inventory in `Arc<Mutex<_>>`; a cart holds the lock for its whole
//! check-take-record sequence so two carts cannot oversell a product.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::product::{Product, ProductId};

// =============================================================================
// Inventory
// =============================================================================

/// A catalog plus the number of units of each product still available.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    catalog: Catalog,
    stock: HashMap<ProductId, u32>,
}

impl Inventory {
    /// Wraps a catalog with initial stock counts.
    ///
    /// Catalog products missing from `stock` start at 0. A stock entry for an
    /// id outside the catalog fails with [`CoreError::UnknownProduct`].
    pub fn new(
        catalog: Catalog,
        stock: impl IntoIterator<Item = (ProductId, u32)>,
    ) -> CoreResult<Self> {
        let mut counts = HashMap::new();

        for (id, units) in stock {
            if !catalog.has(id) {
                error!(product_id = %id, "stock given for product outside the catalog");
                return Err(CoreError::UnknownProduct(id));
            }
            counts.insert(id, units);
        }

        Ok(Inventory {
            catalog,
            stock: counts,
        })
    }

    /// Wraps a catalog with every product out of stock.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Inventory {
            catalog,
            stock: HashMap::new(),
        }
    }

    /// True iff the id exists in the catalog.
    pub fn has(&self, id: ProductId) -> bool {
        self.catalog.has(id)
    }

    /// True iff the product is in the catalog and at least one unit remains.
    pub fn available(&self, id: ProductId) -> bool {
        self.has(id) && self.stock(id) > 0
    }

    /// Reserves one unit.
    ///
    /// Returns `false` and leaves stock untouched when nothing is available;
    /// running out is a capacity answer, not an error.
    pub fn take(&mut self, id: ProductId) -> bool {
        if !self.available(id) {
            debug!(product_id = %id, "no stock to take");
            return false;
        }

        let units = self.stock.entry(id).or_insert(0);
        *units -= 1;
        debug!(product_id = %id, remaining = *units, "took one unit");
        true
    }

    /// Returns one unit to stock.
    pub fn give_back(&mut self, id: ProductId) -> CoreResult<()> {
        self.restock(id, 1)
    }

    /// Adds `units` to the stock of a catalog product.
    pub fn restock(&mut self, id: ProductId, units: u32) -> CoreResult<()> {
        if !self.has(id) {
            error!(product_id = %id, "cannot restock product outside the catalog");
            return Err(CoreError::UnknownProduct(id));
        }

        let current = self.stock.entry(id).or_insert(0);
        *current = current.saturating_add(units);
        debug!(product_id = %id, remaining = *current, "restocked");
        Ok(())
    }

    /// Remaining units; 0 for products without stock or outside the catalog.
    pub fn stock(&self, id: ProductId) -> u32 {
        self.stock.get(&id).copied().unwrap_or(0)
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.catalog.find(id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

// =============================================================================
// Shared Inventory
// =============================================================================

/// Cloneable handle to one inventory shared by many carts.
///
/// ## Usage
/// ```rust
/// use shop_core::{Catalog, Inventory, ProductId, SharedInventory};
///
/// let inventory = Inventory::new(Catalog::bookshop(), [(ProductId::new(6), 2)]).unwrap();
/// let shared = SharedInventory::new(inventory);
///
/// let taken = shared.with_inventory_mut(|inv| inv.take(ProductId::new(6)));
/// assert!(taken);
/// assert_eq!(shared.with_inventory(|inv| inv.stock(ProductId::new(6))), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<Mutex<Inventory>>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        SharedInventory {
            inner: Arc::new(Mutex::new(inventory)),
        }
    }

    /// Runs `f` with read access to the inventory.
    pub fn with_inventory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Inventory) -> R,
    {
        let inventory = self.lock();
        f(&inventory)
    }

    /// Runs `f` with exclusive write access; the lock is held for all of `f`.
    pub fn with_inventory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Inventory) -> R,
    {
        let mut inventory = self.lock();
        f(&mut inventory)
    }

    // Every mutation completes before the guard drops, so a poisoned lock
    // still holds a consistent inventory.
    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Inventory> for SharedInventory {
    fn from(inventory: Inventory) -> Self {
        SharedInventory::new(inventory)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
