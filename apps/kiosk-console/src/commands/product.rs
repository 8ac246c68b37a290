//! # Product Commands
//!
//! Commands that edit the active order's products, plus the menu listing.
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add Product Flow                                     │
//! │                                                                         │
//! │  add hamburger size=large stuffing=potato                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderBook::add_product                                                 │
//! │       │                                                                 │
//! │       ├── no active order ───────────► INVALID_STATE                    │
//! │       ├── active order paid ─────────► INVALID_STATE                    │
//! │       ├── bad name / size / stuffing ► VALIDATION_ERROR                 │
//! │       ▼                                                                 │
//! │  ProductAdded { order_id, name }                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `remove` positions are 1-based and refer to the last displayed view of
//! the active order.

use kiosk_core::catalog::{MenuItem, SizeOption, StuffingOption};
use kiosk_core::ProductRequest;
use serde::Serialize;
use tracing::{debug, info};

use super::Response;
use crate::error::ApiError;
use crate::state::OrderBookState;

/// Everything that can be ordered, with prices and calories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuListing {
    pub items: Vec<MenuItem>,
    pub burger_sizes: Vec<SizeOption>,
    pub burger_stuffings: Vec<StuffingOption>,
}

/// Adds a product to the active order.
pub fn add_product(book: &OrderBookState, request: ProductRequest) -> Result<Response, ApiError> {
    debug!(
        name = %request.name,
        size = ?request.size,
        stuffing = ?request.stuffing,
        "add_product command"
    );

    book.with_book_mut(|book| -> Result<Response, ApiError> {
        let name = book.add_product(&request)?.name().to_string();
        let order_id = book
            .active_order_id()
            .ok_or_else(|| ApiError::internal("active order vanished after add"))?;

        info!(order_id = %order_id, product = %name, "Product added");
        Ok(Response::ProductAdded { order_id, name })
    })
}

/// Removes the product at a 1-based position of the active order.
pub fn remove_product(book: &OrderBookState, position: usize) -> Result<Response, ApiError> {
    debug!(position = %position, "remove_product command");

    book.with_book_mut(|book| -> Result<Response, ApiError> {
        let removed = book.remove_product(position)?;
        let order_id = book
            .active_order_id()
            .ok_or_else(|| ApiError::internal("active order vanished after remove"))?;

        info!(order_id = %order_id, product = %removed.name(), "Product removed");
        Ok(Response::ProductRemoved {
            order_id,
            name: removed.name().to_string(),
        })
    })
}

/// Lists the catalog.
pub fn get_menu(book: &OrderBookState) -> Response {
    debug!("get_menu command");

    let menu = book.with_book(|book| {
        let catalog = book.catalog();
        MenuListing {
            items: catalog.items().to_vec(),
            burger_sizes: catalog.sizes().to_vec(),
            burger_stuffings: catalog.stuffings().to_vec(),
        }
    });

    Response::Menu { menu }
}
