//! # shop-core: Pure Business Logic for the Shop Cart
//!
//! Product catalog, stock reservation and cart totals, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shop-session (CLI, config, logging)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │  catalog  │  │ inventory │  │   cart    │  │   │
//! │  │   │  Product  │─►│  Catalog  │─►│ Inventory │─►│   Cart    │  │   │
//! │  │   │ VatCateg. │  │           │  │ Shared... │  │  Summary  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Product, ProductId, VatCategory
//! - [`catalog`] - The set of sellable products
//! - [`inventory`] - Stock counts and the shared inventory handle
//! - [`cart`] - Cart, add/remove, totals and summaries
//! - [`money`] - Integer money and tax rates (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Product data validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Cart, Catalog, Inventory, ProductId};
//!
//! let catalog = Catalog::bookshop();
//! let book = catalog.find(ProductId::new(3)).cloned().unwrap();
//! let shirt = catalog.find(ProductId::new(6)).cloned().unwrap();
//!
//! let inventory = Inventory::new(catalog, [(book.id(), 1), (shirt.id(), 2)]).unwrap();
//! let mut cart = Cart::new(inventory);
//!
//! cart.add(&book).unwrap();
//! cart.add(&shirt).unwrap();
//! cart.add(&shirt).unwrap();
//!
//! assert_eq!(cart.total().cents(), 4200);
//! assert_eq!(cart.total_with_vat().cents(), 4806);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod inventory;
pub mod money;
pub mod product;
pub mod validation;

// These allow users to do `use shop_core::Cart` instead of
// `use shop_core::cart::Cart`
pub use cart::{Cart, CartItem, CartLine, CartSummary};
pub use catalog::Catalog;
pub use error::{ArgumentError, CoreError, CoreResult, ValidationError};
pub use inventory::{Inventory, SharedInventory};
pub use money::{Money, TaxRate};
pub use product::{Product, ProductId, ProductRecord, VatCategory};

// =============================================================================
// Business Constants
// =============================================================================

/// Highest unit price a product may carry, in minor units (100 million major
/// units).
///
/// ## Business Reason
/// Keeps every cart total inside `i64`: the largest possible cart is
/// `MAX_CART_ITEMS * MAX_ITEM_QUANTITY * MAX_PRICE_CENTS * 1.23`, roughly
/// `1.2e15`, far below `i64::MAX` (about `9.2e18`).
pub const MAX_PRICE_CENTS: i64 = 10_000_000_000;

/// Maximum quantity of a single product in a cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Maximum number of distinct products in a cart.
pub const MAX_CART_ITEMS: usize = 100;
