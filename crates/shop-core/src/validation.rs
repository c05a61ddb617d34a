//! # Validation Module
//!
//! Checks applied to product data before it enters a catalog.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog file / seed data                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Product::new / Product deserialization ← THIS MODULE                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Catalog::new (duplicate id check)                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Inventory::new (stock only for catalog ids)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::product::VatCategory;
use crate::MAX_PRICE_CENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use shop_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Pragmatic T-Shirt").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price in minor units. Zero is allowed (free items).
///
/// ## Rules
/// - Must not be negative
/// - At most [`MAX_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use shop_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(2800).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-1).is_err());
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Resolves a numeric VAT category id as found in catalog data.
pub fn validate_vat_category_id(id: u8) -> ValidationResult<VatCategory> {
    VatCategory::from_id(id).ok_or_else(|| ValidationError::NotAllowed {
        field: "vat_category_id".to_string(),
        allowed: VatCategory::ALL.iter().map(|c| c.id().to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Deploying with JRuby 9k").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(MAX_PRODUCT_NAME_LEN)).is_ok());
        assert!(validate_product_name(&"A".repeat(MAX_PRODUCT_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1900).is_ok());
        assert!(matches!(
            validate_price_cents(-100),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_price_cents_upper_bound() {
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert_eq!(
            validate_price_cents(MAX_PRICE_CENTS + 1),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE_CENTS,
            })
        );
        assert!(validate_price_cents(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_vat_category_id() {
        assert_eq!(validate_vat_category_id(1), Ok(VatCategory::Standard));
        assert_eq!(validate_vat_category_id(2), Ok(VatCategory::Reduced));

        let err = validate_vat_category_id(7).unwrap_err();
        assert_eq!(err.to_string(), "vat_category_id must be one of: [\"1\", \"2\"]");
    }
}
