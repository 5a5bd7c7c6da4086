//! # Console Commands
//!
//! One handler per CLI subcommand. Each handler drives a screen the way a
//! user would: load it, optionally change something, and render the result.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── dispatch + Rendered
//! ├── overview.rs  ◄─── dashboard, report
//! ├── product.rs   ◄─── products list/add/update/delete
//! ├── stock.rs     ◄─── stock list/apply
//! ├── sale.rs      ◄─── sales list/record
//! └── customer.rs  ◄─── customers list/add/update/delete
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  wings products add --name Scone --price 12 --quantity 8               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ProductsScreen::load() ──► draft filled ──► submit() ──► reload        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rendered { output: table text, error: screen error slot }             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  run(): print output, non-zero exit if error is set                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod customer;
pub mod overview;
pub mod product;
pub mod sale;
pub mod stock;

use crate::cli::Command;
use crate::error::ConsoleResult;
use crate::session::Session;

/// A command's printable result.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Text for stdout.
    pub output: String,
    /// The screen's error slot after the command ran.
    pub error: Option<String>,
}

impl Rendered {
    pub fn new(output: String, error: Option<&str>) -> Self {
        Rendered {
            output,
            error: error.map(str::to_string),
        }
    }
}

/// Runs one subcommand against the session's service.
pub async fn dispatch(session: &Session, command: Command) -> ConsoleResult<Rendered> {
    match command {
        Command::Dashboard => Ok(overview::dashboard(session).await),
        Command::Report => Ok(overview::report(session).await),
        Command::Products { command } => product::run(session, command).await,
        Command::Stock { command } => Ok(stock::run(session, command).await),
        Command::Sales { command } => Ok(sale::run(session, command).await),
        Command::Customers { command } => customer::run(session, command).await,
    }
}
