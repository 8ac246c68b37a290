//! # Products
//!
//! A [`Product`] is one purchasable item attached to an order.
//!
//! ## Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product                                         │
//! │   category · name · price · calories     (shared, read-only)           │
//! │                                                                         │
//! │   ProductKind::Snack      olivier, caesar        (catalog lookup)      │
//! │   ProductKind::Beverage   cola, coffee           (catalog lookup)      │
//! │   ProductKind::Burger     size + stuffing        (derived fields)      │
//! │                                                                         │
//! │   Burger price    = size.price    + stuffing.price                     │
//! │   Burger calories = size.calories + stuffing.calories                  │
//! │   Burger name     = "<size> hamburger with <stuffing>"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are only built through [`crate::factory::ProductFactory`]; all
//! fields are computed once at construction and never change afterwards.

use serde::Serialize;

use crate::catalog::{Catalog, Category, CategoryKind, MenuItemKind, Size, Stuffing};

/// The chosen options of a burger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BurgerSpec {
    pub size: Size,
    pub stuffing: Stuffing,
    /// Copied from the stuffing table, used as a display sort key.
    pub stuffing_priority: u8,
}

/// Variant tag of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    Snack,
    Beverage,
    Burger(BurgerSpec),
}

/// A product attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    category: Category,
    name: String,
    price: u32,
    calories: u32,
    kind: ProductKind,
}

impl Product {
    /// Builds a snack or beverage from its catalog row.
    pub(crate) fn simple(catalog: &Catalog, item: MenuItemKind) -> Self {
        let row = catalog.item(item);
        let kind = match row.category {
            CategoryKind::Beverages => ProductKind::Beverage,
            _ => ProductKind::Snack,
        };

        Product {
            category: catalog.category(row.category),
            name: item.as_str().to_string(),
            price: row.price,
            calories: row.calories,
            kind,
        }
    }

    /// Builds a burger, deriving name, price and calories from its options.
    pub(crate) fn burger(catalog: &Catalog, size: Size, stuffing: Stuffing) -> Self {
        let size_row = catalog.size(size);
        let stuffing_row = catalog.stuffing(stuffing);

        Product {
            category: catalog.category(CategoryKind::BasicMenu),
            name: format!("{} hamburger with {}", size, stuffing),
            price: size_row.price + stuffing_row.price,
            calories: size_row.calories + stuffing_row.calories,
            kind: ProductKind::Burger(BurgerSpec {
                size,
                stuffing,
                stuffing_priority: stuffing_row.sort_priority,
            }),
        }
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> u32 {
        self.price
    }

    #[inline]
    pub fn calories(&self) -> u32 {
        self.calories
    }

    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Returns the burger options, or `None` for snacks and beverages.
    pub fn burger_spec(&self) -> Option<BurgerSpec> {
        match self.kind {
            ProductKind::Burger(spec) => Some(spec),
            ProductKind::Snack | ProductKind::Beverage => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
