//! # Catalog
//!
//! Static reference data for the menu: categories, simple items, burger
//! sizes and burger stuffings.
//!
//! ## Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Tables                                  │
//! │                                                                         │
//! │  Categories            Items                    Sizes                  │
//! │  ───────────────────   ──────────────────────   ─────────────────────  │
//! │  1 basic-menu          olivier  snack    100/80  small  100/40         │
//! │  2 beverages           caesar   snack    100/20  large   50/20         │
//! │  3 snacks              cola     beverage  50/40                        │
//! │  4 stuffings           coffee   beverage  80/20  Stuffings             │
//! │                                                  ─────────────────────  │
//! │                                                  1 cheese  10/20       │
//! │                                                  2 salad   20/5        │
//! │                                                  3 potato  15/10       │
//! │                                                                         │
//! │  price/calories pairs, leading number = sort priority                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is built once with [`Catalog::standard`] and passed by
//! reference wherever products are built. Lookups are keyed by enums, so
//! they cannot miss; only the factory deals with free-form names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Categories
// =============================================================================

/// The fixed set of menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind {
    BasicMenu,
    Beverages,
    Snacks,
    /// Defined for completeness, never assigned to a product.
    Stuffings,
}

impl CategoryKind {
    /// All categories in table order.
    pub const ALL: [CategoryKind; 4] = [
        CategoryKind::BasicMenu,
        CategoryKind::Beverages,
        CategoryKind::Snacks,
        CategoryKind::Stuffings,
    ];

    /// Returns the display name of the category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::BasicMenu => "basic-menu",
            CategoryKind::Beverages => "beverages",
            CategoryKind::Snacks => "snacks",
            CategoryKind::Stuffings => "stuffings",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category together with its display sort priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub kind: CategoryKind,
    /// Lower sorts first.
    pub sort_priority: u8,
}

// =============================================================================
// Simple Items
// =============================================================================

/// Products sold as-is, without options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    Olivier,
    Caesar,
    Cola,
    Coffee,
}

impl MenuItemKind {
    pub const ALL: [MenuItemKind; 4] = [
        MenuItemKind::Olivier,
        MenuItemKind::Caesar,
        MenuItemKind::Cola,
        MenuItemKind::Coffee,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            MenuItemKind::Olivier => "olivier",
            MenuItemKind::Caesar => "caesar",
            MenuItemKind::Cola => "cola",
            MenuItemKind::Coffee => "coffee",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for MenuItemKind {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuItemKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// A simple item's row in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub kind: MenuItemKind,
    pub category: CategoryKind,
    pub price: u32,
    pub calories: u32,
}

// =============================================================================
// Burger Options
// =============================================================================

/// Burger size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Small,
    Large,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Small, Size::Large];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Large => "large",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Size {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Burger stuffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stuffing {
    #[default]
    Cheese,
    Salad,
    Potato,
}

impl Stuffing {
    pub const ALL: [Stuffing; 3] = [Stuffing::Cheese, Stuffing::Salad, Stuffing::Potato];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Stuffing::Cheese => "cheese",
            Stuffing::Salad => "salad",
            Stuffing::Potato => "potato",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Stuffing {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stuffing::ALL
            .into_iter()
            .find(|stuffing| stuffing.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

impl fmt::Display for Stuffing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price and calories contributed by a burger size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeOption {
    pub size: Size,
    pub price: u32,
    pub calories: u32,
}

/// Price, calories and sort priority contributed by a burger stuffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StuffingOption {
    pub stuffing: Stuffing,
    pub sort_priority: u8,
    pub price: u32,
    pub calories: u32,
}

/// A string that names no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown catalog key '{}'", self.0)
    }
}

impl std::error::Error for UnknownKey {}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only menu tables.
///
/// Each table is indexed by its key enum, which makes every lookup total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: [Category; 4],
    items: [MenuItem; 4],
    sizes: [SizeOption; 2],
    stuffings: [StuffingOption; 3],
}

impl Catalog {
    /// Builds the vendor's standard menu.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::catalog::{Catalog, Size, Stuffing};
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.size(Size::Small).price, 100);
    /// assert_eq!(catalog.stuffing(Stuffing::Potato).sort_priority, 3);
    /// ```
    pub fn standard() -> Self {
        let categories = CategoryKind::ALL.map(|kind| Category {
            kind,
            sort_priority: kind.index() as u8 + 1,
        });

        Catalog {
            categories,
            items: [
                MenuItem {
                    kind: MenuItemKind::Olivier,
                    category: CategoryKind::Snacks,
                    price: 100,
                    calories: 80,
                },
                MenuItem {
                    kind: MenuItemKind::Caesar,
                    category: CategoryKind::Snacks,
                    price: 100,
                    calories: 20,
                },
                MenuItem {
                    kind: MenuItemKind::Cola,
                    category: CategoryKind::Beverages,
                    price: 50,
                    calories: 40,
                },
                MenuItem {
                    kind: MenuItemKind::Coffee,
                    category: CategoryKind::Beverages,
                    price: 80,
                    calories: 20,
                },
            ],
            sizes: [
                SizeOption {
                    size: Size::Small,
                    price: 100,
                    calories: 40,
                },
                SizeOption {
                    size: Size::Large,
                    price: 50,
                    calories: 20,
                },
            ],
            stuffings: [
                StuffingOption {
                    stuffing: Stuffing::Cheese,
                    sort_priority: 1,
                    price: 10,
                    calories: 20,
                },
                StuffingOption {
                    stuffing: Stuffing::Salad,
                    sort_priority: 2,
                    price: 20,
                    calories: 5,
                },
                StuffingOption {
                    stuffing: Stuffing::Potato,
                    sort_priority: 3,
                    price: 15,
                    calories: 10,
                },
            ],
        }
    }

    #[inline]
    pub fn category(&self, kind: CategoryKind) -> Category {
        self.categories[kind.index()]
    }

    #[inline]
    pub fn item(&self, kind: MenuItemKind) -> &MenuItem {
        &self.items[kind.index()]
    }

    #[inline]
    pub fn size(&self, size: Size) -> &SizeOption {
        &self.sizes[size.index()]
    }

    #[inline]
    pub fn stuffing(&self, stuffing: Stuffing) -> &StuffingOption {
        &self.stuffings[stuffing.index()]
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn sizes(&self) -> &[SizeOption] {
        &self.sizes
    }

    pub fn stuffings(&self) -> &[StuffingOption] {
        &self.stuffings
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
