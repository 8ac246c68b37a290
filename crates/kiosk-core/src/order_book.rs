//! # Order Book
//!
//! Owns every order of the session and tracks which one is active.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Book States                                    │
//! │                                                                         │
//! │  ┌──────────────┐   new_order    ┌──────────────┐   pay_order  ┌───────┐│
//! │  │  No active   │──────────────► │ Active order │────────────► │Active ││
//! │  │    order     │                │   (unpaid)   │              │ paid  ││
//! │  └──────────────┘                └──────────────┘              └───────┘│
//! │                                    ▲        │                     │     │
//! │                     new_order /    │        │ add / remove        │     │
//! │                set_active_order ───┘        ▼                     │     │
//! │                                   (stays unpaid)     add/remove ──┘     │
//! │                                                      → OrderPaid        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//! ```rust
//! use kiosk_core::factory::ProductRequest;
//! use kiosk_core::order_book::OrderBook;
//!
//! let mut book = OrderBook::default();
//! let created = book.new_order(Some(&ProductRequest::new("hamburger").with_size("large")));
//! book.add_product(&ProductRequest::new("coffee")).unwrap();
//!
//! let paid = book.pay_order(None).unwrap();
//! assert_eq!(paid, created.order_id);
//! assert!(book.add_product(&ProductRequest::new("cola")).is_err());
//! ```

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::factory::{ProductFactory, ProductRequest};
use crate::order::{Order, OrderId, OrderSummary, OrderView};
use crate::product::Product;

/// Outcome of [`OrderBook::new_order`].
///
/// The order is created even when its first product is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub order_id: OrderId,
    /// Display name of the first product, or why it was rejected.
    pub first_product: Option<CoreResult<String>>,
}

/// Outcome of [`OrderBook::set_active_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveOrderChange {
    Switched(OrderId),
    /// The order was already active, nothing changed.
    AlreadyActive(OrderId),
}

/// All orders of the session.
#[derive(Debug, Clone)]
pub struct OrderBook {
    catalog: Catalog,
    orders: Vec<Order>,
    /// Index into `orders`; orders are never removed.
    active: Option<usize>,
    last_order_id: u32,
}

impl OrderBook {
    pub fn new(catalog: Catalog) -> Self {
        OrderBook {
            catalog,
            orders: Vec::new(),
            active: None,
            last_order_id: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Orders in creation order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == id)
    }

    pub fn active_order(&self) -> Option<&Order> {
        self.active.map(|index| &self.orders[index])
    }

    pub fn active_order_id(&self) -> Option<OrderId> {
        self.active_order().map(Order::id)
    }

    /// Creates an order, makes it active and optionally adds a first product.
    pub fn new_order(&mut self, request: Option<&ProductRequest>) -> NewOrder {
        self.last_order_id += 1;
        let order_id = OrderId::new(self.last_order_id);

        self.orders.push(Order::new(order_id));
        let index = self.orders.len() - 1;
        self.active = Some(index);

        let first_product = request.map(|request| {
            let factory = ProductFactory::new(&self.catalog);
            self.orders[index]
                .add_product(&factory, request)
                .map(|product| product.name().to_string())
        });

        NewOrder {
            order_id,
            first_product,
        }
    }

    /// Makes the order with `id` the active one.
    pub fn set_active_order(&mut self, id: OrderId) -> CoreResult<ActiveOrderChange> {
        if self.orders.is_empty() {
            return Err(CoreError::NoOrders);
        }
        if self.active_order_id() == Some(id) {
            return Ok(ActiveOrderChange::AlreadyActive(id));
        }

        let index = self.index_of(id)?;
        self.active = Some(index);
        Ok(ActiveOrderChange::Switched(id))
    }

    /// Adds a product to the active order.
    pub fn add_product(&mut self, request: &ProductRequest) -> CoreResult<&Product> {
        let index = self.editable_active()?;
        let factory = ProductFactory::new(&self.catalog);
        self.orders[index].add_product(&factory, request)
    }

    /// Removes the product at `position` of the active order's last view.
    pub fn remove_product(&mut self, position: usize) -> CoreResult<Product> {
        let index = self.editable_active()?;
        self.orders[index].remove_product(position)
    }

    /// Views the active order, paid or not.
    pub fn view_active_order(&mut self) -> CoreResult<OrderView> {
        let index = self.active.ok_or(CoreError::NoActiveOrder)?;
        Ok(self.orders[index].view())
    }

    /// Views any order by id.
    pub fn view_order(&mut self, id: OrderId) -> CoreResult<OrderView> {
        let index = self.index_of(id)?;
        Ok(self.orders[index].view())
    }

    /// Pays the order with `id`, or the active order when no id is given.
    pub fn pay_order(&mut self, id: Option<OrderId>) -> CoreResult<OrderId> {
        let id = match id {
            Some(id) => id,
            None => self.active_order_id().ok_or(CoreError::NoActiveOrder)?,
        };

        let index = self.index_of(id)?;
        self.orders[index].pay()?;
        Ok(id)
    }

    /// Summaries of all orders in creation order.
    pub fn list_orders(&self) -> CoreResult<Vec<OrderSummary>> {
        if self.orders.is_empty() {
            return Err(CoreError::NoOrders);
        }
        Ok(self.orders.iter().map(Order::summary).collect())
    }

    fn index_of(&self, id: OrderId) -> CoreResult<usize> {
        self.orders
            .iter()
            .position(|order| order.id() == id)
            .ok_or(CoreError::OrderNotFound { order_id: id })
    }

    fn editable_active(&self) -> CoreResult<usize> {
        let index = self.active.ok_or(CoreError::NoActiveOrder)?;
        let order = &self.orders[index];
        if order.is_paid() {
            return Err(CoreError::OrderPaid {
                order_id: order.id(),
            });
        }
        Ok(index)
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        OrderBook::new(Catalog::standard())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};
    use crate::nutrition::Totals;

    fn request(name: &str) -> ProductRequest {
        ProductRequest::new(name)
    }

    #[test]
    fn test_new_order_ids_increase() {
        let mut book = OrderBook::default();

        let first = book.new_order(None);
        let second = book.new_order(None);

        assert_eq!(first.order_id, OrderId::new(1));
        assert_eq!(second.order_id, OrderId::new(2));
        assert!(second.first_product.is_none());
        assert_eq!(book.active_order_id(), Some(OrderId::new(2)));
        assert_eq!(book.orders().len(), 2);
    }

    #[test]
    fn test_new_order_with_rejected_product_still_creates_order() {
        let mut book = OrderBook::default();

        let created = book.new_order(Some(&request("pizza")));

        assert_eq!(created.order_id, OrderId::new(1));
        assert_eq!(
            created.first_product,
            Some(Err(CoreError::Validation(ValidationError::UnknownProduct {
                name: "pizza".to_string()
            })))
        );
        assert_eq!(book.active_order_id(), Some(OrderId::new(1)));
        assert!(book.active_order().unwrap().products().is_empty());
    }

    #[test]
    fn test_operations_without_active_order() {
        let mut book = OrderBook::default();

        assert_eq!(
            book.add_product(&request("cola")).unwrap_err(),
            CoreError::NoActiveOrder
        );
        assert_eq!(book.remove_product(1).unwrap_err(), CoreError::NoActiveOrder);
        assert_eq!(book.view_active_order().unwrap_err(), CoreError::NoActiveOrder);
        assert_eq!(book.pay_order(None).unwrap_err(), CoreError::NoActiveOrder);
        assert_eq!(book.list_orders().unwrap_err(), CoreError::NoOrders);
        assert_eq!(
            book.set_active_order(OrderId::new(1)).unwrap_err(),
            CoreError::NoOrders
        );
    }

    #[test]
    fn test_set_active_order() {
        let mut book = OrderBook::default();
        book.new_order(None);
        book.new_order(None);

        assert_eq!(
            book.set_active_order(OrderId::new(1)),
            Ok(ActiveOrderChange::Switched(OrderId::new(1)))
        );
        assert_eq!(
            book.set_active_order(OrderId::new(1)),
            Ok(ActiveOrderChange::AlreadyActive(OrderId::new(1)))
        );
        assert_eq!(book.active_order_id(), Some(OrderId::new(1)));
    }

    #[test]
    fn test_set_unknown_active_order_keeps_current() {
        let mut book = OrderBook::default();
        book.new_order(None);

        let err = book.set_active_order(OrderId::new(42)).unwrap_err();

        assert_eq!(
            err,
            CoreError::OrderNotFound {
                order_id: OrderId::new(42)
            }
        );
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(book.active_order_id(), Some(OrderId::new(1)));
    }

    #[test]
    fn test_edits_go_to_active_order() {
        let mut book = OrderBook::default();
        book.new_order(Some(&request("cola")));
        book.new_order(None);
        book.set_active_order(OrderId::new(1)).unwrap();

        book.add_product(&request("coffee")).unwrap();

        assert_eq!(book.order(OrderId::new(1)).unwrap().products().len(), 2);
        assert!(book.order(OrderId::new(2)).unwrap().products().is_empty());
    }

    #[test]
    fn test_scenario_sorted_view() {
        let mut book = OrderBook::default();
        let created = book.new_order(Some(&request("hamburger").with_size("large")));
        assert_eq!(
            created.first_product,
            Some(Ok("large hamburger with cheese".to_string()))
        );

        book.add_product(&request("caesar")).unwrap();
        book.add_product(&request("coffee")).unwrap();
        book.add_product(&request("hamburger").with_stuffing("potato"))
            .unwrap();

        let view = book.view_active_order().unwrap();
        let names: Vec<&str> = view.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "large hamburger with cheese",
                "small hamburger with potato",
                "coffee",
                "caesar",
            ]
        );

        match view {
            OrderView::Items { totals, .. } => {
                assert_eq!(totals, Totals::new(60 + 115 + 80 + 100, 40 + 50 + 20 + 20));
            }
            other => panic!("expected items, got {other:?}"),
        }
    }

    #[test]
    fn test_scenario_large_burgers() {
        let mut book = OrderBook::default();
        book.new_order(Some(&request("hamburger").with_size("large")));
        book.add_product(&request("caesar")).unwrap();
        book.add_product(&request("coffee")).unwrap();
        book.add_product(
            &request("hamburger")
                .with_size("large")
                .with_stuffing("potato"),
        )
        .unwrap();

        match book.view_active_order().unwrap() {
            OrderView::Items { lines, totals, .. } => {
                let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
                assert_eq!(
                    names,
                    vec![
                        "large hamburger with cheese",
                        "large hamburger with potato",
                        "coffee",
                        "caesar",
                    ]
                );
                assert_eq!(totals, Totals::new(305, 110));
            }
            other => panic!("expected items, got {other:?}"),
        }
    }

    #[test]
    fn test_pay_lifecycle() {
        let mut book = OrderBook::default();
        let order_id = book.new_order(None).order_id;

        assert_eq!(
            book.pay_order(None).unwrap_err(),
            CoreError::EmptyOrder { order_id }
        );
        assert!(!book.active_order().unwrap().is_paid());

        book.add_product(&request("olivier")).unwrap();
        assert_eq!(book.pay_order(None), Ok(order_id));

        assert_eq!(
            book.add_product(&request("cola")).unwrap_err(),
            CoreError::OrderPaid { order_id }
        );
        assert_eq!(
            book.remove_product(1).unwrap_err(),
            CoreError::OrderPaid { order_id }
        );
        assert_eq!(
            book.pay_order(None).unwrap_err(),
            CoreError::AlreadyPaid { order_id }
        );
        assert_eq!(book.active_order().unwrap().products().len(), 1);
    }

    #[test]
    fn test_paid_order_can_still_be_viewed() {
        let mut book = OrderBook::default();
        book.new_order(Some(&request("cola")));
        book.pay_order(None).unwrap();

        let view = book.view_active_order().unwrap();
        assert!(view.is_paid());
        assert_eq!(view.lines().len(), 1);
    }

    #[test]
    fn test_pay_by_id() {
        let mut book = OrderBook::default();
        book.new_order(Some(&request("cola")));
        book.new_order(None);

        assert_eq!(book.pay_order(Some(OrderId::new(1))), Ok(OrderId::new(1)));
        assert_eq!(
            book.pay_order(Some(OrderId::new(7))).unwrap_err(),
            CoreError::OrderNotFound {
                order_id: OrderId::new(7)
            }
        );

        // Paying another order does not lock the active one
        assert_eq!(book.active_order_id(), Some(OrderId::new(2)));
        book.add_product(&request("coffee")).unwrap();
    }

    #[test]
    fn test_view_order_by_id() {
        let mut book = OrderBook::default();
        book.new_order(Some(&request("caesar")));
        book.new_order(None);

        let view = book.view_order(OrderId::new(1)).unwrap();
        assert_eq!(view.order_id(), OrderId::new(1));
        assert_eq!(view.lines().len(), 1);

        assert!(matches!(
            book.view_order(OrderId::new(2)).unwrap(),
            OrderView::Empty { .. }
        ));
        assert_eq!(
            book.view_order(OrderId::new(3)).unwrap_err(),
            CoreError::OrderNotFound {
                order_id: OrderId::new(3)
            }
        );
    }

    #[test]
    fn test_remove_product_from_active_order() {
        let mut book = OrderBook::default();
        book.new_order(Some(&request("olivier")));
        book.add_product(&request("cola")).unwrap();
        book.view_active_order().unwrap();

        let removed = book.remove_product(1).unwrap();
        assert_eq!(removed.name(), "cola");
        assert_eq!(
            book.remove_product(5).unwrap_err(),
            CoreError::InvalidPosition { position: 5 }
        );
        assert_eq!(book.active_order().unwrap().products().len(), 1);
    }

    #[test]
    fn test_list_orders() {
        let mut book = OrderBook::default();
        book.new_order(Some(&request("coffee")));
        book.new_order(Some(&request("hamburger")));
        book.pay_order(None).unwrap();

        let summaries = book.list_orders().unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].order_id, OrderId::new(1));
        assert_eq!(summaries[0].totals, Totals::new(80, 20));
        assert!(!summaries[0].is_paid);
        assert_eq!(summaries[1].totals, Totals::new(110, 60));
        assert!(summaries[1].is_paid);
    }
}
