//! # kiosk-core: Pure Ordering Logic for Kiosk POS
//!
//! This crate is the **heart** of Kiosk POS. It contains the menu, product
//! construction, order rules and display ordering as plain data and pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kiosk POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                kiosk-console (presentation)                     │   │
//! │  │    parse command ──► call OrderBook ──► render text / JSON      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   order_book ──► order ──► factory ──► product / catalog        │   │
//! │  │                    │                                            │   │
//! │  │                    └──► sorter, nutrition                       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBALS                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Categories, menu items, burger sizes and stuffings
//! - [`product`] - The `Product` value type
//! - [`validation`] - Product request field checks
//! - [`factory`] - Builds products from requests
//! - [`nutrition`] - Price and calorie totals
//! - [`sorter`] - Display ordering of an order's products
//! - [`order`] - Orders, order views and summaries
//! - [`order_book`] - All orders plus the active order
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::{OrderBook, OrderView, ProductRequest};
//!
//! let mut book = OrderBook::default();
//! book.new_order(Some(&ProductRequest::new("hamburger").with_size("large")));
//! book.add_product(&ProductRequest::new("coffee")).unwrap();
//!
//! match book.view_active_order().unwrap() {
//!     OrderView::Items { lines, totals, .. } => {
//!         assert_eq!(lines[0].name, "large hamburger with cheese");
//!         assert_eq!(totals.price, 140);
//!     }
//!     OrderView::Empty { .. } => unreachable!(),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod factory;
pub mod nutrition;
pub mod order;
pub mod order_book;
pub mod product;
pub mod sorter;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kiosk_core::OrderBook` instead of
// `use kiosk_core::order_book::OrderBook`

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use factory::{ProductFactory, ProductRequest};
pub use nutrition::Totals;
pub use order::{Order, OrderId, OrderLine, OrderSummary, OrderView};
pub use order_book::{ActiveOrderChange, NewOrder, OrderBook};
pub use product::{Product, ProductKind};
