//! # Kiosk Console Library
//!
//! Interactive cashier console for the kiosk ordering system.
//! This is the main entry point that configures and runs a session.
//!
//! ## Module Organization
//! ```text
//! kiosk_console/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── book.rs     ◄─── Shared order book
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Parsing, dispatch, responses
//! │   ├── order.rs    ◄─── Order commands
//! │   └── product.rs  ◄─── Product and menu commands
//! ├── render.rs       ◄─── Text / JSON output
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read line ──► Command::from_str ──► dispatch ──► render ──► write     │
//! │      ▲                                                         │        │
//! │      └─────────────────────────────────────────────────────────┘        │
//! │                                                                         │
//! │  Ends on quit/exit or end of input. A failed command prints an error   │
//! │  and the loop continues with the next line.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{dispatch, Command, Response};
use state::{ConfigState, OrderBookState, OutputFormat};

/// Runs the console on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, INFO for this crate; RUST_LOG overrides            │
/// │                                                                         │
/// │  2. Load Configuration (KIOSK_* environment variables)                  │
/// │                                                                         │
/// │  3. Initialize State (empty order book, standard catalog)               │
/// │                                                                         │
/// │  4. Run the session until quit or end of input                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Kiosk POS console");

    let config = ConfigState::from_env()?;
    info!(store = %config.store_name, output = ?config.output, "Configuration loaded");

    let state = OrderBookState::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&state, &config, stdin.lock(), stdout.lock())?;

    info!("Session ended");
    Ok(())
}

/// Reads commands from `input` until quit or end of input.
pub fn run_session<R, W>(
    state: &OrderBookState,
    config: &ConfigState,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let interactive = config.output == OutputFormat::Text;
    if interactive {
        writeln!(
            output,
            "Welcome to {}. Type 'help' for commands.",
            config.store_name
        )?;
    }

    let mut line = String::new();
    loop {
        if interactive {
            write!(output, "{}", config.prompt)?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = line.parse::<Command>().and_then(|command| dispatch(state, command));
        if let Err(err) = &result {
            warn!(code = ?err.code, message = %err.message, "Command failed");
        }

        writeln!(output, "{}", render::render(&result, config))?;

        if matches!(result, Ok(Response::Goodbye)) {
            break;
        }
    }

    output.flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=kiosk_console=trace` - Trace this crate only
/// - Default: WARN, INFO for the console
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,kiosk_console=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
