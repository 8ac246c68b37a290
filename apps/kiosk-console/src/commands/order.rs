//! # Order Commands
//!
//! Commands for creating, selecting, viewing, paying and listing orders.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │   new ──► ┌──────────┐  add/remove  ┌──────────┐   pay   ┌──────────┐  │
//! │           │  EMPTY   │ ───────────► │  OPEN    │ ──────► │  PAID    │  │
//! │           └──────────┘ ◄─────────── └──────────┘         └──────────┘  │
//! │                          remove last                      (read only)   │
//! │                                                                         │
//! │   select <id> moves the "active" marker; view/list never change state   │
//! │   beyond re-sorting the viewed order's products.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kiosk_core::{ActiveOrderChange, OrderId, ProductRequest};
use tracing::{debug, info, warn};

use super::Response;
use crate::error::ApiError;
use crate::state::OrderBookState;

/// Creates an order and makes it active.
///
/// A rejected first product is reported in the response; the order is kept.
pub fn new_order(book: &OrderBookState, request: Option<ProductRequest>) -> Response {
    debug!(product = ?request.as_ref().map(|r| &r.name), "new_order command");

    let created = book.with_book_mut(|book| book.new_order(request.as_ref()));
    info!(order_id = %created.order_id, "Order created");

    let (product, product_error) = match created.first_product {
        None => (None, None),
        Some(Ok(name)) => (Some(name), None),
        Some(Err(err)) => {
            warn!(order_id = %created.order_id, error = %err, "First product rejected");
            (None, Some(ApiError::from(err)))
        }
    };

    Response::OrderCreated {
        order_id: created.order_id,
        product,
        product_error,
    }
}

/// Makes another order the active one.
pub fn select_order(book: &OrderBookState, order_id: OrderId) -> Result<Response, ApiError> {
    debug!(order_id = %order_id, "select_order command");

    let change = book.with_book_mut(|book| book.set_active_order(order_id))?;
    Ok(match change {
        ActiveOrderChange::Switched(order_id) => {
            info!(order_id = %order_id, "Active order changed");
            Response::ActiveOrderChanged { order_id }
        }
        ActiveOrderChange::AlreadyActive(order_id) => Response::AlreadyActive { order_id },
    })
}

/// Pays the given order, or the active one.
pub fn pay_order(book: &OrderBookState, order_id: Option<OrderId>) -> Result<Response, ApiError> {
    debug!(order_id = ?order_id, "pay_order command");

    let order_id = book.with_book_mut(|book| book.pay_order(order_id))?;
    info!(order_id = %order_id, "Order paid");

    Ok(Response::OrderPaid { order_id })
}

/// Shows the given order, or the active one.
pub fn view_order(book: &OrderBookState, order_id: Option<OrderId>) -> Result<Response, ApiError> {
    debug!(order_id = ?order_id, "view_order command");

    let view = book.with_book_mut(|book| match order_id {
        Some(order_id) => book.view_order(order_id),
        None => book.view_active_order(),
    })?;

    Ok(Response::Order { view })
}

/// Lists a summary row per order.
pub fn list_orders(book: &OrderBookState) -> Result<Response, ApiError> {
    debug!("list_orders command");

    let orders = book.with_book(|book| book.list_orders())?;
    Ok(Response::Orders { orders })
}
