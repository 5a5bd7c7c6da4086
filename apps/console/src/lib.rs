//! # Wings Console Library
//!
//! Terminal front-end for the Wings Cafe inventory service.
//!
//! ## Module Organization
//! ```text
//! wings_console/
//! ├── lib.rs        ◄─── You are here (startup & run)
//! ├── cli.rs        ◄─── clap argument definitions
//! ├── session.rs    ◄─── service handle + display settings
//! ├── screens/      ◄─── one controller per business screen
//! ├── commands/     ◄─── subcommand handlers driving the screens
//! ├── render.rs     ◄─── plain-text tables
//! └── error.rs      ◄─── ConsoleError + screen message policy
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod screens;
pub mod session;

use std::io::Write;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use wings_client::ClientConfig;

use cli::Cli;
use error::{ConsoleError, ConsoleResult};
use session::Session;

/// Runs one console command.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load configuration                                                  │
/// │     • defaults → TOML file → WINGS_* env → --api-url                    │
/// │                                                                         │
/// │  2. Build the session                                                   │
/// │     • --demo: seeded in-memory inventory                                │
/// │     • otherwise: HTTP client for the configured API URL                 │
/// │                                                                         │
/// │  3. Dispatch the subcommand and print its screen to stdout              │
/// │                                                                         │
/// │  4. A screen that ended with an error returns ConsoleError::Screen     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> ConsoleResult<()> {
    let mut config = ClientConfig::load(cli.config.clone())?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config.with_api_url(url)?;
    }
    debug!(?config, "Configuration loaded");

    let session = if cli.demo {
        Session::demo(&config)
    } else {
        Session::connect(&config)?
    };

    let rendered = commands::dispatch(&session, cli.command).await?;

    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(rendered.output.as_bytes());
    let _ = stdout.flush();

    match rendered.error {
        Some(message) => Err(ConsoleError::Screen(message)),
        None => {
            info!("Done");
            Ok(())
        }
    }
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - Default: `warn,wings=info`
/// - `RUST_LOG=wings_client=debug` - every request with its id and timing
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,wings=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
