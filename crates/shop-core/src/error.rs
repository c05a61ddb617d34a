//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  │   └── ArgumentError  - Caller passed something the cart rejects     │
//! │  └── ValidationError  - Bad product / catalog data                     │
//! │                                                                         │
//! │  shop-session errors (app)                                             │
//! │  └── AppError         - I/O, JSON, CLI arguments                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → exit status            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sold Out Is Not An Error
//! `Cart::add` on a product with no remaining stock returns `Ok(None)`.
//! Only usage mistakes and inconsistent inventory state produce a `CoreError`.

use thiserror::Error;

use crate::product::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The caller passed an argument the cart cannot act on.
    ///
    /// ## When This Occurs
    /// - No product was given (e.g. a failed catalog lookup)
    /// - The product is not part of the catalog
    /// - Removing a product that is not in the cart
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// Inventory was asked to track stock for an id outside its catalog.
    ///
    /// Unreachable while a cart validates against the same inventory it
    /// reserves from; seeing it means the inventory state is inconsistent.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// One more unit would push a line past the per-product quantity cap.
    #[error("Quantity of product {product_id} cannot exceed {max}")]
    QuantityTooLarge { product_id: ProductId, max: u32 },

    /// Cart already holds the maximum number of distinct products.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },
}

/// Reasons a cart operation rejected its argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("product is required")]
    Missing,

    #[error("product {0} is not in the catalog")]
    NotInCatalog(ProductId),

    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product and catalog data validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., two catalog entries with one id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// True for the usage-error class (`InvalidArgument`).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
