//! # Validation Module
//!
//! Field checks applied to a product request before anything is built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Request Validation                                 │
//! │                                                                         │
//! │  name ──► resolve_family()                                             │
//! │           ├── hamburger        → Family::Burger                        │
//! │           ├── coffee, cola     → Family::Beverage                      │
//! │           ├── caesar, olivier  → Family::Snack                         │
//! │           └── anything else    → UnknownProduct                        │
//! │                                                                         │
//! │  Burger only:                                                          │
//! │  size     ──► validate_size()      absent → small                      │
//! │  stuffing ──► validate_stuffing()  absent → cheese                     │
//! │                                                                         │
//! │  Snacks and beverages never look at size or stuffing.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosk_core::catalog::{MenuItemKind, Size};
//! use kiosk_core::validation::{resolve_family, validate_size, Family};
//!
//! assert_eq!(
//!     resolve_family("cola").unwrap(),
//!     Family::Beverage(MenuItemKind::Cola)
//! );
//! assert_eq!(validate_size(None).unwrap(), Size::Small);
//! assert!(validate_size(Some("medium")).is_err());
//! ```

use crate::catalog::{MenuItemKind, Size, Stuffing};
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Name of the only customizable product.
pub const BURGER_NAME: &str = "hamburger";

/// Product family a requested name dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Burger,
    Beverage(MenuItemKind),
    Snack(MenuItemKind),
}

// =============================================================================
// Name Validators
// =============================================================================

/// Maps a product name to its family.
///
/// Matching is exact: `"Cola"` and `" cola"` are unknown.
pub fn resolve_family(name: &str) -> ValidationResult<Family> {
    match name {
        BURGER_NAME => Ok(Family::Burger),
        "coffee" => Ok(Family::Beverage(MenuItemKind::Coffee)),
        "cola" => Ok(Family::Beverage(MenuItemKind::Cola)),
        "caesar" => Ok(Family::Snack(MenuItemKind::Caesar)),
        "olivier" => Ok(Family::Snack(MenuItemKind::Olivier)),
        _ => Err(ValidationError::UnknownProduct {
            name: name.to_string(),
        }),
    }
}

// =============================================================================
// Option Validators
// =============================================================================

/// Validates an optional burger size.
///
/// ## Rules
/// - Missing or empty → [`Size::Small`]
/// - Must otherwise be exactly `small` or `large`
pub fn validate_size(size: Option<&str>) -> ValidationResult<Size> {
    match size {
        None | Some("") => Ok(Size::default()),
        Some(value) => value.parse().map_err(|_| ValidationError::InvalidSize {
            value: value.to_string(),
        }),
    }
}

/// Validates an optional burger stuffing.
///
/// ## Rules
/// - Missing or empty → [`Stuffing::Cheese`]
/// - Must otherwise be exactly `cheese`, `salad` or `potato`
pub fn validate_stuffing(stuffing: Option<&str>) -> ValidationResult<Stuffing> {
    match stuffing {
        None | Some("") => Ok(Stuffing::default()),
        Some(value) => value
            .parse()
            .map_err(|_| ValidationError::InvalidStuffing {
                value: value.to_string(),
            }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
