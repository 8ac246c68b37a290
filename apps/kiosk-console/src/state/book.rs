//! # Order Book State
//!
//! Holds the single `OrderBook` of the running process.
//!
//! ## Thread Safety
//! The book is wrapped in `Arc<Mutex<T>>` so that every command runs to
//! completion with exclusive access. The console is single-threaded today;
//! the lock marks the method boundary a multi-user front end would rely on.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Book Operations                                │
//! │                                                                         │
//! │  Command                  State Access            Book Change           │
//! │  ───────                  ────────────            ───────────           │
//! │  new / select / add ────► with_book_mut() ──────► orders, active order │
//! │  remove / pay ──────────► with_book_mut() ──────► products, paid flag  │
//! │  view ──────────────────► with_book_mut() ──────► display order        │
//! │  list / menu ───────────► with_book() ──────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use kiosk_core::OrderBook;

/// Process-wide order book state.
#[derive(Debug, Clone)]
pub struct OrderBookState {
    book: Arc<Mutex<OrderBook>>,
}

impl OrderBookState {
    pub fn new(book: OrderBook) -> Self {
        OrderBookState {
            book: Arc::new(Mutex::new(book)),
        }
    }

    /// Executes a function with read access to the book.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summaries = state.with_book(|book| book.list_orders());
    /// ```
    pub fn with_book<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderBook) -> R,
    {
        // Core operations validate before mutating, so a poisoned book is
        // still consistent.
        let book = self.book.lock().unwrap_or_else(PoisonError::into_inner);
        f(&book)
    }

    /// Executes a function with write access to the book.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_book_mut(|book| book.pay_order(None))?;
    /// ```
    pub fn with_book_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderBook) -> R,
    {
        let mut book = self.book.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut book)
    }
}

impl Default for OrderBookState {
    fn default() -> Self {
        Self::new(OrderBook::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::ProductRequest;

    #[test]
    fn test_mutations_are_shared_between_clones() {
        let state = OrderBookState::default();
        let other = state.clone();

        state.with_book_mut(|book| {
            book.new_order(Some(&ProductRequest::new("cola")));
        });

        let count = other.with_book(|book| book.orders().len());
        assert_eq!(count, 1);
    }
}
