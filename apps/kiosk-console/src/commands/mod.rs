//! # Console Commands Module
//!
//! All commands a cashier can type.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing, dispatch, responses)
//! ├── order.rs    ◄─── new, select, pay, view, list
//! └── product.rs  ◄─── add, remove, menu
//! ```
//!
//! ## Grammar
//! ```text
//! new [<product> [size=<size>] [stuffing=<stuffing>]]
//! select <order-id>
//! add <product> [size=<size>] [stuffing=<stuffing>]
//! remove <position>
//! pay [<order-id>]
//! view [<order-id>]
//! list
//! menu
//! help
//! quit | exit
//! ```
//!
//! Burger options may also be given bare: `add hamburger large potato`.
//! A bare word that names a stuffing is the stuffing, anything else is the
//! size (and is validated as one).
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "add hamburger size=large"                                             │
//! │         │                                                               │
//! │         │ Command::from_str                                             │
//! │         ▼                                                               │
//! │  Command::Add(ProductRequest { name, size, stuffing })                  │
//! │         │                                                               │
//! │         │ dispatch(&OrderBookState, command)                            │
//! │         ▼                                                               │
//! │  product::add_product(book, request) -> Result<Response, ApiError>      │
//! │         │                                                               │
//! │         │ render (text or JSON)                                         │
//! │         ▼                                                               │
//! │  "large hamburger with cheese successfully added to order #1"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod order;
pub mod product;

use std::str::FromStr;

use kiosk_core::catalog::Stuffing;
use kiosk_core::{OrderId, OrderSummary, OrderView, ProductRequest};
use serde::Serialize;

use crate::error::{ApiError, ErrorCode};
use crate::state::OrderBookState;

pub use product::MenuListing;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New(Option<ProductRequest>),
    Select(OrderId),
    Add(ProductRequest),
    Remove(usize),
    Pay(Option<OrderId>),
    View(Option<OrderId>),
    List,
    Menu,
    Help,
    Quit,
}

/// Successful outcome of a command, handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    OrderCreated {
        order_id: OrderId,
        #[serde(skip_serializing_if = "Option::is_none")]
        product: Option<String>,
        /// Set when the first product was rejected; the order still exists.
        #[serde(skip_serializing_if = "Option::is_none")]
        product_error: Option<ApiError>,
    },
    ActiveOrderChanged {
        order_id: OrderId,
    },
    AlreadyActive {
        order_id: OrderId,
    },
    ProductAdded {
        order_id: OrderId,
        name: String,
    },
    ProductRemoved {
        order_id: OrderId,
        name: String,
    },
    OrderPaid {
        order_id: OrderId,
    },
    Order {
        view: OrderView,
    },
    Orders {
        orders: Vec<OrderSummary>,
    },
    Menu {
        menu: MenuListing,
    },
    Help,
    Goodbye,
}

/// Runs a parsed command against the order book.
pub fn dispatch(book: &OrderBookState, command: Command) -> Result<Response, ApiError> {
    match command {
        Command::New(request) => Ok(order::new_order(book, request)),
        Command::Select(id) => order::select_order(book, id),
        Command::Add(request) => product::add_product(book, request),
        Command::Remove(position) => product::remove_product(book, position),
        Command::Pay(id) => order::pay_order(book, id),
        Command::View(id) => order::view_order(book, id),
        Command::List => order::list_orders(book),
        Command::Menu => Ok(product::get_menu(book)),
        Command::Help => Ok(Response::Help),
        Command::Quit => Ok(Response::Goodbye),
    }
}

// =============================================================================
// Parsing
// =============================================================================

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words
            .next()
            .ok_or_else(|| ApiError::parse("empty command"))?
            .to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        match keyword.as_str() {
            "new" => {
                if args.is_empty() {
                    Ok(Command::New(None))
                } else {
                    parse_product(&args).map(|request| Command::New(Some(request)))
                }
            }
            "select" => parse_order_id(single_arg(&args, "select <order-id>")?).map(Command::Select),
            "add" => {
                if args.is_empty() {
                    return Err(ApiError::parse(
                        "usage: add <product> [size=<size>] [stuffing=<stuffing>]",
                    ));
                }
                parse_product(&args).map(Command::Add)
            }
            "remove" => parse_position(single_arg(&args, "remove <position>")?).map(Command::Remove),
            "pay" => optional_order_id(&args, "pay [<order-id>]").map(Command::Pay),
            "view" => optional_order_id(&args, "view [<order-id>]").map(Command::View),
            "list" => no_args(&args, "list").map(|_| Command::List),
            "menu" => no_args(&args, "menu").map(|_| Command::Menu),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ApiError::parse(format!(
                "unknown command '{}', type 'help' for a list",
                other
            ))),
        }
    }
}

fn parse_product(args: &[&str]) -> Result<ProductRequest, ApiError> {
    let (name, options) = args
        .split_first()
        .ok_or_else(|| ApiError::parse("missing product name"))?;
    let mut request = ProductRequest::new(*name);

    for option in options {
        let (field, value) = match option.split_once('=') {
            Some((field, value)) => (field, value),
            None if option.parse::<Stuffing>().is_ok() => ("stuffing", *option),
            None => ("size", *option),
        };

        let slot = match field {
            "size" => &mut request.size,
            "stuffing" => &mut request.stuffing,
            other => {
                return Err(ApiError::parse(format!(
                    "unknown option '{}', expected size or stuffing",
                    other
                )))
            }
        };
        if slot.is_some() {
            return Err(ApiError::parse(format!("{} given more than once", field)));
        }
        *slot = Some(value.to_string());
    }

    Ok(request)
}

/// Non-numeric positions address no item, same as out-of-range ones.
fn parse_position(arg: &str) -> Result<usize, ApiError> {
    arg.parse::<usize>().map_err(|_| {
        ApiError::new(
            ErrorCode::NotFound,
            format!("No item at position '{}'", arg),
        )
    })
}

fn parse_order_id(arg: &str) -> Result<OrderId, ApiError> {
    arg.trim_start_matches('#')
        .parse::<u32>()
        .map(OrderId::new)
        .map_err(|_| ApiError::new(ErrorCode::NotFound, format!("Invalid order id: '{}'", arg)))
}

fn optional_order_id(args: &[&str], usage: &str) -> Result<Option<OrderId>, ApiError> {
    match args {
        [] => Ok(None),
        [arg] => parse_order_id(arg).map(Some),
        _ => Err(ApiError::parse(format!("usage: {}", usage))),
    }
}

fn single_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, ApiError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(ApiError::parse(format!("usage: {}", usage))),
    }
}

fn no_args(args: &[&str], usage: &str) -> Result<(), ApiError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ApiError::parse(format!("usage: {}", usage)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("list".parse::<Command>(), Ok(Command::List));
        assert_eq!("  MENU ".parse::<Command>(), Ok(Command::Menu));
        assert_eq!("new".parse::<Command>(), Ok(Command::New(None)));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("pay".parse::<Command>(), Ok(Command::Pay(None)));
        assert_eq!(
            "view 3".parse::<Command>(),
            Ok(Command::View(Some(OrderId::new(3))))
        );
        assert_eq!(
            "select #2".parse::<Command>(),
            Ok(Command::Select(OrderId::new(2)))
        );
        assert_eq!("remove 1".parse::<Command>(), Ok(Command::Remove(1)));
    }

    #[test]
    fn test_parse_product_options() {
        assert_eq!(
            "add hamburger size=large stuffing=potato".parse::<Command>(),
            Ok(Command::Add(
                ProductRequest::new("hamburger")
                    .with_size("large")
                    .with_stuffing("potato")
            ))
        );
        assert_eq!(
            "new hamburger potato large".parse::<Command>(),
            Ok(Command::New(Some(
                ProductRequest::new("hamburger")
                    .with_size("large")
                    .with_stuffing("potato")
            )))
        );

        // Bare unknown words become the size, validated later by the factory
        assert_eq!(
            "add hamburger medium".parse::<Command>(),
            Ok(Command::Add(ProductRequest::new("hamburger").with_size("medium")))
        );
    }

    #[test]
    fn test_parse_errors() {
        let err = "dance".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);

        assert!("add".parse::<Command>().is_err());
        assert!("add hamburger color=red".parse::<Command>().is_err());
        assert!("add hamburger large small".parse::<Command>().is_err());
        assert!("select".parse::<Command>().is_err());
        assert!("list everything".parse::<Command>().is_err());
    }

    #[test]
    fn test_non_numeric_ids_are_lookup_failures() {
        let err = "remove first".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "No item at position 'first'");

        let err = "select abc".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = "remove -1".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
