//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kiosk-core errors (this file)                                         │
//! │  ├── CoreError        - Order and order book rule violations           │
//! │  └── ValidationError  - Bad product name / size / stuffing             │
//! │                                                                         │
//! │  kiosk-console errors (app)                                            │
//! │  └── ApiError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Renderer               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (order id, position, input value)
//! 3. Errors are enum variants, never String
//! 4. Every error aborts exactly one operation and leaves state untouched

use thiserror::Error;

use crate::order::OrderId;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by order and order book operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The product request did not pass validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An edit or a default-target payment was requested with no active order.
    #[error("No active order: create an order first")]
    NoActiveOrder,

    /// Products cannot be added to or removed from a paid order.
    #[error("Order {order_id} is paid, cannot edit")]
    OrderPaid { order_id: OrderId },

    /// An order without products cannot be paid.
    #[error("Order {order_id} is empty, cannot pay empty order")]
    EmptyOrder { order_id: OrderId },

    /// The order was already paid.
    #[error("Order {order_id} is already paid")]
    AlreadyPaid { order_id: OrderId },

    /// No order carries the requested id.
    #[error("Invalid order id: {order_id}")]
    OrderNotFound { order_id: OrderId },

    /// The position does not address a product of the order.
    ///
    /// ## When This Occurs
    /// - Position is 0 (positions are 1-based)
    /// - Position is past the end of the product list
    #[error("No item at position {position}")]
    InvalidPosition { position: usize },

    /// An operation needs at least one order to exist.
    #[error("No orders yet")]
    NoOrders,
}

/// Broad classes of [`CoreError`], used by front ends to pick a response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad product name, size or stuffing.
    Validation,
    /// Operation not allowed in the current order state.
    State,
    /// Unknown order id or product position.
    Lookup,
    /// No orders exist yet.
    EmptyCollection,
}

impl CoreError {
    /// Returns the class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(_) => ErrorKind::Validation,
            CoreError::NoActiveOrder
            | CoreError::OrderPaid { .. }
            | CoreError::EmptyOrder { .. }
            | CoreError::AlreadyPaid { .. } => ErrorKind::State,
            CoreError::OrderNotFound { .. } | CoreError::InvalidPosition { .. } => {
                ErrorKind::Lookup
            }
            CoreError::NoOrders => ErrorKind::EmptyCollection,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product request validation errors.
///
/// Produced by the product factory before anything is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name does not belong to any product family.
    #[error("Unknown product: '{name}'")]
    UnknownProduct { name: String },

    /// The burger size is not one of the catalog sizes.
    #[error("Invalid size '{value}': must be one of small, large")]
    InvalidSize { value: String },

    /// The burger stuffing is not one of the catalog stuffings.
    #[error("Invalid stuffing '{value}': must be one of cheese, salad, potato")]
    InvalidStuffing { value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
