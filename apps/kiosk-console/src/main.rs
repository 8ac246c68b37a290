//! # Kiosk Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kiosk POS Console                                │
//! │                                                                         │
//! │  stdin ──► kiosk_console::run_session ──► stdout (text or JSON)         │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │              kiosk_core::OrderBook                                      │
//! │                                                                         │
//! │  logs ──► stderr (RUST_LOG)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for testability
    kiosk_console::run()
}
