//! # Products
//!
//! The immutable value objects a catalog is built from.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   VatCategory   │   │    ProductId    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Standard (1)   │   │  u32            │       │
//! │  │  name           │   │    23%          │   │                 │       │
//! │  │  price (Money)  │   │  Reduced (2)    │   │                 │       │
//! │  │  vat_category   │   │    8%           │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Two products are the same product iff their ids are equal. Name and price
//! do not take part in `PartialEq` or `Hash`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValidationError;
use crate::money::{Money, TaxRate};
use crate::validation::{
    validate_price_cents, validate_product_name, validate_vat_category_id, ValidationResult,
};

// =============================================================================
// Product Id
// =============================================================================

/// Stable catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// VAT Category
// =============================================================================

/// Which VAT rate applies to a product.
///
/// Catalog data refers to categories by numeric id; `1` is the standard rate
/// and `2` the reduced rate used for books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatCategory {
    /// 23%.
    Standard,
    /// 8%.
    Reduced,
}

impl VatCategory {
    pub const ALL: [VatCategory; 2] = [VatCategory::Standard, VatCategory::Reduced];

    /// Looks up a category by its catalog id.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(VatCategory::Standard),
            2 => Some(VatCategory::Reduced),
            _ => None,
        }
    }

    /// The catalog id of this category.
    pub const fn id(&self) -> u8 {
        match self {
            VatCategory::Standard => 1,
            VatCategory::Reduced => 2,
        }
    }

    /// The VAT rate for this category.
    pub const fn rate(&self) -> TaxRate {
        match self {
            VatCategory::Standard => TaxRate::from_bps(2300),
            VatCategory::Reduced => TaxRate::from_bps(800),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that can be sold.
///
/// Fields are private: a product never changes after construction. Use
/// [`Product::new`] or deserialize a [`ProductRecord`], both of which validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    vat_category: VatCategory,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    /// use shop_core::product::{Product, ProductId, VatCategory};
    ///
    /// let shirt = Product::new(
    ///     ProductId::new(6),
    ///     "Pragmatic T-Shirt",
    ///     Money::from_cents(900),
    ///     VatCategory::Standard,
    /// )
    /// .unwrap();
    /// assert_eq!(shirt.price_with_vat().cents(), 1107);
    /// ```
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        vat_category: VatCategory,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price_cents(price.cents())?;

        Ok(Product {
            id,
            name,
            price,
            vat_category,
        })
    }

    /// Builds a product from crate-owned seed data without re-validating it.
    pub(crate) fn from_seed(id: u32, name: &str, price: i64, vat_category: VatCategory) -> Self {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            price: Money::from_cents(price),
            vat_category,
        }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pre-tax unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn vat_category(&self) -> VatCategory {
        self.vat_category
    }

    /// Unit price including VAT, rounded to a whole minor unit.
    pub fn price_with_vat(&self) -> Money {
        self.price.with_tax(self.vat_category.rate())
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// =============================================================================
// Product Record
// =============================================================================

/// Flat wire/catalog shape of a product.
///
/// ```json
/// { "id": 3, "name": "Web Development with Clojure", "price": 2400, "vat_category_id": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub vat_category_id: u8,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ValidationError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let vat_category = validate_vat_category_id(record.vat_category_id)?;
        Product::new(
            record.id,
            record.name,
            Money::from_cents(record.price),
            vat_category,
        )
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        ProductRecord {
            id: product.id,
            name: product.name,
            price: product.price.cents(),
            vat_category_id: product.vat_category.id(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn book(id: u32, price: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Book {}", id),
            Money::from_cents(price),
            VatCategory::Reduced,
        )
        .unwrap()
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = book(3, 2400);
        let renamed = Product::new(
            ProductId::new(3),
            "Another title",
            Money::from_cents(1),
            VatCategory::Standard,
        )
        .unwrap();

        assert_eq!(a, renamed);
        assert_ne!(a, book(4, 2400));

        let set: HashSet<Product> = [a, renamed, book(4, 2400)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_new_rejects_invalid_data() {
        let err = Product::new(ProductId::new(1), "", Money::zero(), VatCategory::Reduced);
        assert!(matches!(err, Err(ValidationError::Required { .. })));

        let err = Product::new(
            ProductId::new(1),
            "Negative",
            Money::from_cents(-1),
            VatCategory::Reduced,
        );
        assert!(matches!(err, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_price_above_cap_is_rejected() {
        let at_cap = Product::new(
            ProductId::new(1),
            "Collector's edition",
            Money::from_cents(crate::MAX_PRICE_CENTS),
            VatCategory::Standard,
        )
        .unwrap();
        assert!(at_cap.price_with_vat() > at_cap.price());

        let err = Product::new(
            ProductId::new(1),
            "Overflow",
            Money::from_cents(i64::MAX),
            VatCategory::Standard,
        );
        assert!(matches!(err, Err(ValidationError::OutOfRange { .. })));

        let json = format!(
            r#"{{"id":1,"name":"Overflow","price":{},"vat_category_id":1}}"#,
            i64::MAX
        );
        assert!(serde_json::from_str::<Product>(&json).is_err());
    }

    #[test]
    fn test_vat_category_ids_and_rates() {
        for category in VatCategory::ALL {
            assert_eq!(VatCategory::from_id(category.id()), Some(category));
        }
        assert_eq!(VatCategory::from_id(0), None);
        assert_eq!(VatCategory::Standard.rate().bps(), 2300);
        assert_eq!(VatCategory::Reduced.rate().bps(), 800);
    }

    #[test]
    fn test_price_with_vat() {
        assert_eq!(book(3, 2400).price_with_vat().cents(), 2592);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"id":6,"name":"Pragmatic T-Shirt","price":900,"vat_category_id":1}"#;
        let shirt: Product = serde_json::from_str(json).unwrap();
        assert_eq!(shirt.id(), ProductId::new(6));
        assert_eq!(shirt.vat_category(), VatCategory::Standard);

        let bad_vat = r#"{"id":6,"name":"Shirt","price":900,"vat_category_id":9}"#;
        assert!(serde_json::from_str::<Product>(bad_vat).is_err());

        let bad_price = r#"{"id":6,"name":"Shirt","price":-900,"vat_category_id":1}"#;
        assert!(serde_json::from_str::<Product>(bad_price).is_err());
    }

    #[test]
    fn test_serialize_as_record() {
        let value = serde_json::to_value(book(2, 1900)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 2, "name": "Book 2", "price": 1900, "vat_category_id": 2})
        );
    }
}
