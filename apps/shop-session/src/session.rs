//! # Session Replay
//!
//! Applies a list of cart operations to a fresh cart.
//!
//! ```text
//! add:3 add:6 add:6 remove:6
//!   │
//!   ▼
//! look up id in the inventory's catalog ── not found ──► NotInCatalog (add)
//!   │                                                    NotInCart (remove)
//!   ▼
//! Cart::add / Cart::remove
//!   │
//!   ▼
//! CartSummary
//! ```

use std::fmt;
use std::str::FromStr;

use shop_core::{ArgumentError, Cart, CartSummary, CoreError, Product, ProductId, SharedInventory};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// One step of a scripted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(ProductId),
    Remove(ProductId),
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidOperation(s.to_string());

        let (verb, id) = s.trim().split_once(':').ok_or_else(invalid)?;
        let id: u32 = id.trim().parse().map_err(|_| invalid())?;

        match verb.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Operation::Add(ProductId::new(id))),
            "remove" | "rm" => Ok(Operation::Remove(ProductId::new(id))),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add(id) => write!(f, "add:{}", id),
            Operation::Remove(id) => write!(f, "remove:{}", id),
        }
    }
}

/// Runs `operations` against a new cart and returns its final summary.
///
/// Stops at the first rejected operation.
pub fn replay(inventory: SharedInventory, operations: &[Operation]) -> AppResult<CartSummary> {
    let mut cart = Cart::new(inventory.clone());
    info!(cart_id = %cart.id(), operations = operations.len(), "session started");

    for &operation in operations {
        match operation {
            Operation::Add(id) => {
                let product = lookup(&inventory, id, ArgumentError::NotInCatalog(id))?;
                match cart.add(&product)? {
                    Some(quantity) => info!(%operation, quantity, "added"),
                    None => info!(%operation, "sold out"),
                }
            }
            Operation::Remove(id) => {
                let product = lookup(&inventory, id, ArgumentError::NotInCart(id))?;
                let quantity = cart.remove(&product)?;
                info!(%operation, quantity, "removed");
            }
        }
    }

    let summary = cart.summary();
    info!(
        total = %summary.total,
        total_with_vat = %summary.total_with_vat,
        "session finished"
    );
    Ok(summary)
}

/// Resolves an operation's id to the catalog product, or fails with `missing`.
fn lookup(inventory: &SharedInventory, id: ProductId, missing: ArgumentError) -> AppResult<Product> {
    inventory
        .with_inventory(|inv| inv.find(id).cloned())
        .ok_or_else(|| {
            warn!(product_id = %id, reason = %missing, "operation names an unknown product");
            CoreError::from(missing).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operations() {
        assert_eq!("add:3".parse::<Operation>().unwrap(), Operation::Add(ProductId::new(3)));
        assert_eq!(
            " REMOVE : 6 ".parse::<Operation>().unwrap(),
            Operation::Remove(ProductId::new(6))
        );
        assert_eq!("rm:6".parse::<Operation>().unwrap(), Operation::Remove(ProductId::new(6)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["add", "add:", "add:x", "buy:3", ":3", "add:-1"] {
            assert!(
                matches!(input.parse::<Operation>(), Err(AppError::InvalidOperation(_))),
                "{input} should not parse"
            );
        }
    }

    fn bookshop() -> SharedInventory {
        let catalog = shop_core::Catalog::bookshop();
        SharedInventory::new(shop_core::Inventory::new(catalog, [(ProductId::new(6), 2)]).unwrap())
    }

    #[test]
    fn test_unknown_id_reports_not_in_catalog() {
        let err = replay(bookshop(), &[Operation::Add(ProductId::new(1234))]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(CoreError::InvalidArgument(ArgumentError::NotInCatalog(id)))
                if id == ProductId::new(1234)
        ));
    }

    #[test]
    fn test_unknown_id_remove_reports_not_in_cart() {
        let err = replay(bookshop(), &[Operation::Remove(ProductId::new(1234))]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(CoreError::InvalidArgument(ArgumentError::NotInCart(id)))
                if id == ProductId::new(1234)
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let op = Operation::Remove(ProductId::new(4));
        assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
    }
}
