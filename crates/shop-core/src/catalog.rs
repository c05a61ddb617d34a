//! # Catalog
//!
//! The set of products a shop sells, keyed by id.
//!
//! A catalog is an explicit value: build one from any list of products (a
//! test fixture, a catalog file) or use [`Catalog::bookshop`] for the built-in
//! data set, then hand it to an [`Inventory`](crate::inventory::Inventory).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::product::{Product, ProductId, VatCategory};
use crate::validation::ValidationResult;

/// Built-in product data: (id, name, price, VAT category).
const BOOKSHOP: &[(u32, &str, i64, VatCategory)] = &[
    (1, "Agile Web Development with Rails 5", 2800, VatCategory::Reduced),
    (2, "Data Science Essentials in Python", 1900, VatCategory::Reduced),
    (3, "Web Development with Clojure, Second Edition", 2400, VatCategory::Reduced),
    (4, "Serverless Single Page Apps", 3000, VatCategory::Reduced),
    (5, "Deploying with JRuby 9k", 1600, VatCategory::Reduced),
    (6, "Pragmatic T-Shirt", 900, VatCategory::Standard),
];

/// Products indexed by id. Iteration is in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting two products that share an id.
    pub fn new(products: impl IntoIterator<Item = Product>) -> ValidationResult<Self> {
        let mut map = BTreeMap::new();

        for product in products {
            let id = product.id();
            if map.insert(id, product).is_some() {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: id.to_string(),
                });
            }
        }

        Ok(Catalog { products: map })
    }

    /// The built-in six-product bookshop: five books at the reduced rate and
    /// a t-shirt at the standard rate.
    pub fn bookshop() -> Self {
        let products = BOOKSHOP
            .iter()
            .map(|&(id, name, price, vat)| (ProductId::new(id), Product::from_seed(id, name, price, vat)))
            .collect();

        Catalog { products }
    }

    pub fn has(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = ValidationError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Catalog::new(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products.into_values().collect()
    }
}
