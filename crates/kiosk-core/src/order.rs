//! # Orders
//!
//! An [`Order`] is a list of products plus payment state.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐  add_product   ┌──────────┐     pay()      ┌──────────┐  │
//! │  │  Empty   │──────────────► │  Open    │──────────────► │   Paid   │  │
//! │  │          │ ◄──────────────│          │                │ (locked) │  │
//! │  └──────────┘ remove_product └──────────┘                └──────────┘  │
//! │       │                                                       │         │
//! │       └── pay() ──► EmptyOrder              add/remove ──► OrderPaid   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions
//! [`Order::view`] sorts the stored product list in place before numbering
//! it, so the 1-based positions it shows are exactly the indices that
//! [`Order::remove_product`] accepts afterwards. Products added after the
//! last view are appended behind the rendered ones until the next view.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::factory::{ProductFactory, ProductRequest};
use crate::nutrition::Totals;
use crate::product::Product;
use crate::sorter::sort_products;

// =============================================================================
// Order Id
// =============================================================================

/// Identifier of an order, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct OrderId(u32);

impl OrderId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        OrderId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Views
// =============================================================================

/// One numbered row of an order view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// 1-based, valid as a removal position until the list changes.
    pub position: usize,
    pub name: String,
    pub price: u32,
    pub calories: u32,
}

/// What an order looks like to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum OrderView {
    /// The order holds no products.
    Empty { order_id: OrderId, is_paid: bool },
    /// Sorted product rows and their totals.
    Items {
        order_id: OrderId,
        is_paid: bool,
        lines: Vec<OrderLine>,
        totals: Totals,
    },
}

impl OrderView {
    pub fn order_id(&self) -> OrderId {
        match self {
            OrderView::Empty { order_id, .. } | OrderView::Items { order_id, .. } => *order_id,
        }
    }

    pub fn is_paid(&self) -> bool {
        match self {
            OrderView::Empty { is_paid, .. } | OrderView::Items { is_paid, .. } => *is_paid,
        }
    }

    /// Rows of the view, empty for [`OrderView::Empty`].
    pub fn lines(&self) -> &[OrderLine] {
        match self {
            OrderView::Empty { .. } => &[],
            OrderView::Items { lines, .. } => lines.as_slice(),
        }
    }
}

/// One row of the order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub item_count: usize,
    pub totals: Totals,
    pub is_paid: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Fixed-width row: `id\titems\tprice\tcalories\tYES|NO`.
impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:<5}\t{:<5}\t{:<8}\t{}",
            self.order_id.get(),
            self.item_count,
            self.totals.price,
            self.totals.calories,
            if self.is_paid { "YES" } else { "NO" }
        )
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
///
/// ## Invariants
/// - Once paid, the product list never changes
/// - An empty order is never paid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    products: Vec<Product>,
    is_paid: bool,
    created_at: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn new(id: OrderId) -> Self {
        Order {
            id,
            products: Vec::new(),
            is_paid: false,
            created_at: Utc::now(),
            paid_at: None,
        }
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[inline]
    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    /// Products in current storage order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }

    /// Builds the requested product and appends it.
    ///
    /// Nothing changes when the order is paid or the request is invalid.
    pub fn add_product(
        &mut self,
        factory: &ProductFactory<'_>,
        request: &ProductRequest,
    ) -> CoreResult<&Product> {
        self.ensure_editable()?;

        let product = factory.create(request)?;
        self.products.push(product);
        Ok(&self.products[self.products.len() - 1])
    }

    /// Removes the product shown at `position` (1-based) by the last view.
    pub fn remove_product(&mut self, position: usize) -> CoreResult<Product> {
        self.ensure_editable()?;

        if position == 0 || position > self.products.len() {
            return Err(CoreError::InvalidPosition { position });
        }
        Ok(self.products.remove(position - 1))
    }

    /// Marks the order as paid.
    ///
    /// ## Errors
    /// - `EmptyOrder` when there is nothing to pay for
    /// - `AlreadyPaid` when the order was paid before
    pub fn pay(&mut self) -> CoreResult<()> {
        if self.is_paid {
            return Err(CoreError::AlreadyPaid { order_id: self.id });
        }
        if self.products.is_empty() {
            return Err(CoreError::EmptyOrder { order_id: self.id });
        }

        self.is_paid = true;
        self.paid_at = Some(Utc::now());
        Ok(())
    }

    /// Sums price and calories over all products.
    pub fn totals(&self) -> Totals {
        self.products.iter().sum()
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.id,
            item_count: self.products.len(),
            totals: self.totals(),
            is_paid: self.is_paid,
            created_at: self.created_at,
        }
    }

    /// The summary as a fixed-width text row.
    pub fn summary_line(&self) -> String {
        self.summary().to_string()
    }

    /// Sorts the products for display and returns the numbered view.
    pub fn view(&mut self) -> OrderView {
        if self.products.is_empty() {
            return OrderView::Empty {
                order_id: self.id,
                is_paid: self.is_paid,
            };
        }

        sort_products(&mut self.products);

        let lines = self
            .products
            .iter()
            .enumerate()
            .map(|(index, product)| OrderLine {
                position: index + 1,
                name: product.name().to_string(),
                price: product.price(),
                calories: product.calories(),
            })
            .collect();

        OrderView::Items {
            order_id: self.id,
            is_paid: self.is_paid,
            lines,
            totals: self.totals(),
        }
    }

    fn ensure_editable(&self) -> CoreResult<()> {
        if self.is_paid {
            return Err(CoreError::OrderPaid { order_id: self.id });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::ValidationError;

    fn request(name: &str) -> ProductRequest {
        ProductRequest::new(name)
    }

    #[test]
    fn test_empty_order() {
        let mut order = Order::new(OrderId::new(1));

        assert_eq!(order.totals(), Totals::zero());
        assert_eq!(
            order.view(),
            OrderView::Empty {
                order_id: OrderId::new(1),
                is_paid: false
            }
        );
    }

    #[test]
    fn test_add_product() {
        let catalog = Catalog::standard();
        let factory = ProductFactory::new(&catalog);
        let mut order = Order::new(OrderId::new(1));

        let added = order.add_product(&factory, &request("coffee")).unwrap();
        assert_eq!(added.name(), "coffee");
        assert_eq!(order.products().len(), 1);
        assert_eq!(order.totals(), Totals::new(80, 20));
    }

    #[test]
    fn test_invalid_request_leaves_order_unchanged() {
        let catalog = Catalog::standard();
        let factory = ProductFactory::new(&catalog);
        let mut order = Order::new(OrderId::new(1));

        let err = order
            .add_product(&factory, &request("hamburger").with_size("medium"))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::InvalidSize {
                value: "medium".to_string()
            })
        );
        assert!(order.products().is_empty());
    }

    #[test]
    fn test_pay_empty_order_fails() {
        let mut order = Order::new(OrderId::new(4));

        assert_eq!(
            order.pay(),
            Err(CoreError::EmptyOrder {
                order_id: OrderId::new(4)
            })
        );
        assert!(!order.is_paid());
        assert!(order.paid_at().is_none());
    }

    #[test]
    fn test_paid_order_is_locked() {
        let catalog = Catalog::standard();
        let factory = ProductFactory::new(&catalog);
        let mut order = Order::new(OrderId::new(2));

        order.add_product(&factory, &request("cola")).unwrap();
        order.pay().unwrap();
        assert!(order.is_paid());
        assert!(order.paid_at().unwrap() >= order.created_at());

        let locked = CoreError::OrderPaid {
            order_id: OrderId::new(2),
        };
        assert_eq!(
            order.add_product(&factory, &request("coffee")).unwrap_err(),
            locked
        );
        assert_eq!(order.remove_product(1).unwrap_err(), locked);
        assert_eq!(order.products().len(), 1);
    }

    #[test]
    fn test_pay_twice_fails() {
        let catalog = Catalog::standard();
        let factory = ProductFactory::new(&catalog);
        let mut order = Order::new(OrderId::new(3));

        order.add_product(&factory, &request("olivier")).unwrap();
        order.pay().unwrap();
        let first_paid_at = order.paid_at();

        assert_eq!(
            order.pay(),
            Err(CoreError::AlreadyPaid {
                order_id: OrderId::new(3)
            })
        );
        assert_eq!(order.paid_at(), first_paid_at);
    }

    #[test]
    fn test_remove_invalid_position() {
        let catalog = Catalog::standard();
        let factory = ProductFactory::new(&catalog);
        let mut order = Order::new(OrderId::new(1));
        order.add_product(&factory, &request("cola")).unwrap();

        assert_eq!(
            order.remove_product(0).unwrap_err(),
            CoreError::InvalidPosition { position: 0 }
        );
        assert_eq!(
            order.remove_product(2).unwrap_err(),
            CoreError::InvalidPosition { position: 2 }
        );
        assert_eq!(order.products().len(), 1);
    }

    #[test]
    fn test_remove_uses_last_view_positions() {
        let catalog = Catalog::standard();
        let factory = ProductFactory::new(&catalog);
        let mut order = Order::new(OrderId::new(1));

        order.add_product(&factory, &request("olivier")).unwrap();
        order.add_product(&factory, &request("cola")).unwrap();
        order.add_product(&factory, &request("hamburger")).unwrap();

        let view = order.view();
        let shown: Vec<&str> = view.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(shown, vec!["small hamburger with cheese", "cola", "olivier"]);

        // Position 2 as rendered is the cola, not the second product added
        let removed = order.remove_product(2).unwrap();
        assert_eq!(removed.name(), "cola");

        // Items added after a view follow the rendered ones
        order.add_product(&factory, &request("caesar")).unwrap();
        let removed = order.remove_product(3).unwrap();
        assert_eq!(removed.name(), "caesar");
    }

    #[test]
    fn test_view_lines_and_totals() {
        let catalog = Catalog::standard();
        let factory = ProductFactory::new(&catalog);
        let mut order = Order::new(OrderId::new(1));

        order.add_product(&factory, &request("caesar")).unwrap();
        order
            .add_product(&factory, &request("hamburger").with_size("large"))
            .unwrap();

        match order.view() {
            OrderView::Items { lines, totals, .. } => {
                assert_eq!(
                    lines[0],
                    OrderLine {
                        position: 1,
                        name: "large hamburger with cheese".to_string(),
                        price: 60,
                        calories: 40,
                    }
                );
                assert_eq!(lines[1].position, 2);
                assert_eq!(lines[1].name, "caesar");
                assert_eq!(totals, Totals::new(160, 60));
            }
            other => panic!("expected items, got {other:?}"),
        }
    }

    #[test]
    fn test_summary_line() {
        let catalog = Catalog::standard();
        let factory = ProductFactory::new(&catalog);
        let mut order = Order::new(OrderId::new(12));

        order.add_product(&factory, &request("coffee")).unwrap();
        order.add_product(&factory, &request("olivier")).unwrap();

        assert_eq!(order.summary_line(), "12\t2    \t180  \t100     \tNO");

        order.pay().unwrap();
        assert!(order.summary_line().ends_with("\tYES"));
    }

    #[test]
    fn test_view_serializes_with_status_tag() {
        let mut order = Order::new(OrderId::new(5));
        let json = serde_json::to_value(order.view()).unwrap();

        assert_eq!(json["status"], "empty");
        assert_eq!(json["order_id"], 5);
        assert_eq!(json["is_paid"], false);
    }
}
