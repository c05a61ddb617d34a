//! # Cart
//!
//! A shopping session's reserved products. Every unit in a cart is a unit
//! taken out of the shared inventory.
//!
//! ## Entry Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │              add (stock > 0)          add (stock > 0)                   │
//! │   absent ───────────────────► (1) ───────────────────► (n+1)           │
//! │      ▲                         │                         │              │
//! │      └──────── remove ─────────┘ ◄──────── remove ───────┘              │
//! │                                                                         │
//! │   add on a sold-out product  → Ok(None), nothing changes               │
//! │   remove on an absent entry  → InvalidArgument                          │
//! │   quantity never sits at 0: the entry is dropped instead               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals
//! - `total`: Σ price × quantity
//! - `total_with_vat`: Σ round(price × (1 + rate)) × quantity, rounding each
//!   unit price before multiplying

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::error::{ArgumentError, CoreError, CoreResult};
use crate::inventory::SharedInventory;
use crate::money::Money;
use crate::product::{Product, ProductId};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// One product in the cart and how many units of it are reserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    product: Product,
    quantity: u32,
}

impl CartItem {
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price() * self.quantity
    }

    /// VAT-inclusive unit price × quantity.
    pub fn line_total_with_vat(&self) -> Money {
        self.product.price_with_vat() * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one session.
///
/// ## Invariants
/// - Items are unique by product id, in the order first added
/// - Every stored quantity is ≥ 1
/// - Each reserved unit was taken from the inventory and is given back on
///   `remove` or `clear`
#[derive(Debug)]
pub struct Cart {
    id: String,
    created_at: DateTime<Utc>,
    items: Vec<CartItem>,
    inventory: SharedInventory,
}

impl Cart {
    /// Starts an empty session cart reserving from `inventory`.
    pub fn new(inventory: impl Into<SharedInventory>) -> Self {
        let cart = Cart {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            items: Vec::new(),
            inventory: inventory.into(),
        };
        debug!(cart_id = %cart.id, "cart created");
        cart
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Adds one unit of `product`.
    ///
    /// ## Returns
    /// - `Ok(Some(n))`: the new quantity; one unit was taken from stock
    /// - `Ok(None)`: the product is sold out; nothing changed
    /// - `Err(InvalidArgument)`: no product given, or not in the catalog
    /// - `Err(QuantityTooLarge)`: the line already holds
    ///   [`MAX_ITEM_QUANTITY`] units
    /// - `Err(CartTooLarge)`: a new line would exceed [`MAX_CART_ITEMS`]
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Cart, Catalog, Inventory, ProductId};
    ///
    /// let catalog = Catalog::bookshop();
    /// let shirt = catalog.find(ProductId::new(6)).cloned().unwrap();
    /// let mut cart = Cart::new(Inventory::new(catalog, [(shirt.id(), 1)]).unwrap());
    ///
    /// assert_eq!(cart.add(&shirt).unwrap(), Some(1));
    /// assert_eq!(cart.add(&shirt).unwrap(), None);
    /// ```
    pub fn add<'p>(&mut self, product: impl Into<Option<&'p Product>>) -> CoreResult<Option<u32>> {
        let product = product.into().ok_or_else(|| reject(ArgumentError::Missing))?;
        let id = product.id();
        let items = &mut self.items;

        // check, take and record under one lock so concurrent carts can't
        // both take the last unit
        self.inventory.with_inventory_mut(|inventory| -> CoreResult<Option<u32>> {
            let stored = inventory
                .find(id)
                .cloned()
                .ok_or_else(|| reject(ArgumentError::NotInCatalog(id)))?;

            let existing = items.iter().position(|item| item.product.id() == id);
            check_limits(items, existing, id)?;

            if !inventory.take(id) {
                debug!(product_id = %id, "product sold out, cart unchanged");
                return Ok(None);
            }

            let quantity = match existing {
                Some(index) => {
                    let item = &mut items[index];
                    item.quantity += 1;
                    item.quantity
                }
                None => {
                    items.push(CartItem {
                        product: stored,
                        quantity: 1,
                    });
                    1
                }
            };

            debug!(product_id = %id, quantity, "added to cart");
            Ok(Some(quantity))
        })
    }

    /// Removes one unit of `product` and returns it to stock.
    ///
    /// Returns the quantity left in the cart; 0 means the product is gone
    /// from [`items`](Cart::items).
    pub fn remove<'p>(&mut self, product: impl Into<Option<&'p Product>>) -> CoreResult<u32> {
        let product = product.into().ok_or_else(|| reject(ArgumentError::Missing))?;
        let id = product.id();

        let Some(index) = self.position(id) else {
            return Err(reject(ArgumentError::NotInCart(id)));
        };
        let items = &mut self.items;

        // the unit goes back to stock and leaves the cart under one lock
        let quantity = self.inventory.with_inventory_mut(|inventory| -> CoreResult<u32> {
            inventory.give_back(id).map_err(|err| {
                error!(product_id = %id, error = %err, "inventory refused returned unit");
                err
            })?;

            let item = &mut items[index];
            item.quantity -= 1;
            let quantity = item.quantity;

            if quantity == 0 {
                items.remove(index);
            }
            Ok(quantity)
        })?;

        debug!(product_id = %id, quantity, "removed from cart");
        Ok(quantity)
    }

    /// Empties the cart, returning every reserved unit to stock.
    pub fn clear(&mut self) -> CoreResult<()> {
        let items = &mut self.items;

        self.inventory.with_inventory_mut(|inventory| -> CoreResult<()> {
            while let Some(item) = items.last() {
                inventory
                    .restock(item.product.id(), item.quantity)
                    .map_err(|err| {
                        error!(product_id = %item.product.id(), error = %err, "inventory refused returned units");
                        err
                    })?;
                items.pop();
            }
            Ok(())
        })?;

        debug!(cart_id = %self.id, "cart cleared");
        Ok(())
    }

    /// Distinct products in the cart, each once regardless of quantity.
    pub fn items(&self) -> Vec<&Product> {
        self.items.iter().map(|item| &item.product).collect()
    }

    /// Cart lines with their quantities.
    pub fn lines(&self) -> &[CartItem] {
        &self.items
    }

    /// Units of `product` in the cart; 0 when absent.
    pub fn quantity_of(&self, product: &Product) -> u32 {
        self.position(product.id())
            .map(|index| self.items[index].quantity)
            .unwrap_or(0)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Pre-tax total.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total with each line's VAT applied.
    pub fn total_with_vat(&self) -> Money {
        self.items.iter().map(CartItem::line_total_with_vat).sum()
    }

    /// Snapshot of the cart for display or serialization.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product.id() == id)
    }
}

/// Rejects an add that would break the per-line or per-cart caps.
fn check_limits(items: &[CartItem], existing: Option<usize>, id: ProductId) -> CoreResult<()> {
    let err = match existing {
        Some(index) if items[index].quantity >= MAX_ITEM_QUANTITY => CoreError::QuantityTooLarge {
            product_id: id,
            max: MAX_ITEM_QUANTITY,
        },
        None if items.len() >= MAX_CART_ITEMS => CoreError::CartTooLarge { max: MAX_CART_ITEMS },
        _ => return Ok(()),
    };
    warn!(product_id = %id, error = %err, "cart limit reached");
    Err(err)
}

fn reject(reason: ArgumentError) -> CoreError {
    warn!(%reason, "cart rejected argument");
    reason.into()
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Serializable view of a cart.
///
/// ```json
/// { "items": [ ... ], "total": 4200, "total_with_vat": 4806 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    pub total: Money,
    pub total_with_vat: Money,
}

/// One line of a [`CartSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub unit_price_with_vat: Money,
    pub line_total: Money,
    pub line_total_with_vat: Money,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        CartLine {
            id: item.product.id(),
            name: item.product.name().to_string(),
            quantity: item.quantity,
            unit_price: item.product.price(),
            unit_price_with_vat: item.product.price_with_vat(),
            line_total: item.line_total(),
            line_total_with_vat: item.line_total_with_vat(),
        }
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            items: cart.items.iter().map(CartLine::from).collect(),
            total: cart.total(),
            total_with_vat: cart.total_with_vat(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
