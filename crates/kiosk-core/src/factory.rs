//! # Product Factory
//!
//! Turns a [`ProductRequest`] into a [`Product`], or explains why it cannot.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductRequest { name, size?, stuffing? }                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  resolve_family(name) ──── unknown ──► ValidationError::UnknownProduct │
//! │       │                                                                 │
//! │       ├── Burger ──► validate_size / validate_stuffing ──► burger      │
//! │       │                                                                 │
//! │       └── Snack / Beverage ──► catalog row (size, stuffing ignored)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The factory is pure: it never logs and never touches an order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::product::Product;
use crate::validation::{resolve_family, validate_size, validate_stuffing, Family, ValidationResult};

/// What a caller asks to add to an order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stuffing: Option<String>,
}

impl ProductRequest {
    pub fn new(name: impl Into<String>) -> Self {
        ProductRequest {
            name: name.into(),
            size: None,
            stuffing: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_stuffing(mut self, stuffing: impl Into<String>) -> Self {
        self.stuffing = Some(stuffing.into());
        self
    }
}

/// Validates requests against a catalog and builds products.
#[derive(Debug, Clone, Copy)]
pub struct ProductFactory<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProductFactory<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        ProductFactory { catalog }
    }

    /// Builds the product described by `request`.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::catalog::Catalog;
    /// use kiosk_core::factory::{ProductFactory, ProductRequest};
    ///
    /// let catalog = Catalog::standard();
    /// let factory = ProductFactory::new(&catalog);
    ///
    /// let burger = factory
    ///     .create(&ProductRequest::new("hamburger").with_stuffing("salad"))
    ///     .unwrap();
    /// assert_eq!(burger.name(), "small hamburger with salad");
    /// assert_eq!(burger.price(), 120);
    ///
    /// assert!(factory
    ///     .create(&ProductRequest::new("hamburger").with_size("medium"))
    ///     .is_err());
    /// ```
    pub fn create(&self, request: &ProductRequest) -> ValidationResult<Product> {
        match resolve_family(&request.name)? {
            Family::Burger => {
                let size = validate_size(request.size.as_deref())?;
                let stuffing = validate_stuffing(request.stuffing.as_deref())?;
                Ok(Product::burger(self.catalog, size, stuffing))
            }
            Family::Beverage(item) | Family::Snack(item) => {
                Ok(Product::simple(self.catalog, item))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
