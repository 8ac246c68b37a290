//! # State Module
//!
//! Manages application state for the console.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                                     ▼                        │
//! │  ┌──────────────────┐                 ┌──────────────────┐              │
//! │  │  OrderBookState  │                 │   ConfigState    │              │
//! │  │                  │                 │                  │              │
//! │  │  Arc<Mutex<      │                 │  store_name      │              │
//! │  │    OrderBook     │                 │  output          │              │
//! │  │  >>              │                 │  prompt          │              │
//! │  └──────────────────┘                 └──────────────────┘              │
//! │                                                                         │
//! │  • OrderBookState: exclusive access per command                        │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod book;
mod config;

pub use book::OrderBookState;
pub use config::{ConfigError, ConfigState, OutputFormat};
