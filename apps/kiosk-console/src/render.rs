//! # Response Rendering
//!
//! Turns command results into the text written to stdout.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Result<Response, ApiError>                                             │
//! │         │                                                               │
//! │         ├── OutputFormat::Text ──► tables and one-line messages         │
//! │         │                                                               │
//! │         └── OutputFormat::Json ──► one JSON document per command        │
//! │                                    success: the tagged Response         │
//! │                                    failure: {"error": ApiError}         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;

use kiosk_core::{OrderSummary, OrderView};
use serde_json::json;

use crate::commands::{MenuListing, Response};
use crate::error::ApiError;
use crate::state::{ConfigState, OutputFormat};

pub const HELP: &str = "\
Commands:
  new [<product> [size=<size>] [stuffing=<stuffing>]]  create an order and make it active
  select <order-id>                                     make another order active
  add <product> [size=<size>] [stuffing=<stuffing>]     add a product to the active order
  remove <position>                                     remove a product shown by the last view
  pay [<order-id>]                                      pay the active or the given order
  view [<order-id>]                                     show the active or the given order
  list                                                  list all orders
  menu                                                  show products and prices
  help                                                  show this help
  quit | exit                                           leave";

const POSITION_WIDTH: usize = 5;
const NAME_WIDTH: usize = 30;
const PRICE_WIDTH: usize = 7;

/// Renders a command result in the configured format.
pub fn render(result: &Result<Response, ApiError>, config: &ConfigState) -> String {
    match config.output {
        OutputFormat::Text => match result {
            Ok(response) => render_text(response, config),
            Err(err) => render_error_text(err),
        },
        OutputFormat::Json => render_json(result),
    }
}

/// Renders a command result as a single JSON document.
pub fn render_json(result: &Result<Response, ApiError>) -> String {
    let value = match result {
        Ok(response) => serde_json::to_value(response),
        Err(err) => serde_json::to_value(err).map(|err| json!({ "error": err })),
    };

    match value {
        Ok(value) => value.to_string(),
        Err(err) => json!({ "error": ApiError::internal(err.to_string()) }).to_string(),
    }
}

pub fn render_error_text(err: &ApiError) -> String {
    format!("Error: {}", err.message)
}

/// Renders a successful response for people.
pub fn render_text(response: &Response, config: &ConfigState) -> String {
    match response {
        Response::OrderCreated {
            order_id,
            product,
            product_error,
        } => {
            let mut out = format!("Order {} created", order_id);
            if let Some(name) = product {
                let _ = write!(out, "\n{} successfully added", name);
            }
            if let Some(err) = product_error {
                let _ = write!(out, "\n{}", render_error_text(err));
            }
            out
        }
        Response::ActiveOrderChanged { order_id } => format!("Order {} is now active", order_id),
        Response::AlreadyActive { order_id } => format!("Order {} is already active", order_id),
        Response::ProductAdded { order_id, name } => {
            format!("{} successfully added to order {}", name, order_id)
        }
        Response::ProductRemoved { order_id, name } => {
            format!("{} successfully removed from order {}", name, order_id)
        }
        Response::OrderPaid { order_id } => format!("Order {} successfully paid", order_id),
        Response::Order { view } => render_order(view, &config.store_name),
        Response::Orders { orders } => render_orders(orders),
        Response::Menu { menu } => render_menu(menu),
        Response::Help => HELP.to_string(),
        Response::Goodbye => "Goodbye".to_string(),
    }
}

// =============================================================================
// Tables
// =============================================================================

/// Order table with a TOTAL row and a status footer.
///
/// ```text
/// POS  NAME                          PRICE  CALORIES
/// 1    olivier                       60     40
/// 2    cola                          80     20
/// TOTAL                              140    60
/// ORDER ID #1, PAID: NO
/// Kiosk POS
/// ```
pub fn render_order(view: &OrderView, store_name: &str) -> String {
    let footer = format!(
        "ORDER ID {}, PAID: {}\n{}",
        view.order_id(),
        yes_no(view.is_paid()),
        store_name
    );

    let (lines, totals) = match view {
        OrderView::Empty { .. } => return format!("No products added yet\n{}", footer),
        OrderView::Items { lines, totals, .. } => (lines, totals),
    };

    let mut out = format!(
        "{:<pw$}{:<nw$}{:<cw$}{}\n",
        "POS",
        "NAME",
        "PRICE",
        "CALORIES",
        pw = POSITION_WIDTH,
        nw = NAME_WIDTH,
        cw = PRICE_WIDTH
    );
    for line in lines {
        let _ = writeln!(
            out,
            "{:<pw$}{:<nw$}{:<cw$}{}",
            line.position,
            line.name,
            line.price,
            line.calories,
            pw = POSITION_WIDTH,
            nw = NAME_WIDTH,
            cw = PRICE_WIDTH
        );
    }
    let _ = writeln!(
        out,
        "{:<w$}{:<cw$}{}",
        "TOTAL",
        totals.price,
        totals.calories,
        w = POSITION_WIDTH + NAME_WIDTH,
        cw = PRICE_WIDTH
    );
    out.push_str(&footer);
    out
}

pub fn render_orders(orders: &[OrderSummary]) -> String {
    let mut out = String::from("ID\tITEMS\tPRICE\tCALORIES\tPAID");
    for summary in orders {
        let _ = write!(out, "\n{}", summary);
    }
    out
}

pub fn render_menu(menu: &MenuListing) -> String {
    let mut out = format!(
        "{:<nw$}{:<cw$}{}\n",
        "PRODUCT",
        "PRICE",
        "CALORIES",
        nw = NAME_WIDTH,
        cw = PRICE_WIDTH
    );
    for item in &menu.items {
        let _ = writeln!(
            out,
            "{:<nw$}{:<cw$}{}",
            item.kind.as_str(),
            item.price,
            item.calories,
            nw = NAME_WIDTH,
            cw = PRICE_WIDTH
        );
    }

    out.push_str("hamburger = size + stuffing\n");
    for option in &menu.burger_sizes {
        let _ = writeln!(
            out,
            "{:<nw$}{:<cw$}{}",
            format!("  size={}", option.size),
            option.price,
            option.calories,
            nw = NAME_WIDTH,
            cw = PRICE_WIDTH
        );
    }
    for option in &menu.burger_stuffings {
        let _ = writeln!(
            out,
            "{:<nw$}{:<cw$}{}",
            format!("  stuffing={}", option.stuffing),
            option.price,
            option.calories,
            nw = NAME_WIDTH,
            cw = PRICE_WIDTH
        );
    }
    out.truncate(out.trim_end().len());
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}
