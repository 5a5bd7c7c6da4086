//! # Wings Console Entry Point
//!
//! ```text
//! $ wings dashboard
//! $ wings --demo stock apply --product 1 --quantity 12
//! $ WINGS_API_URL=http://localhost:3001/api wings sales list
//! ```
//!
//! The actual setup is in lib.rs so it can be tested.

use clap::Parser;

use wings_console::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    wings_console::init_tracing();

    wings_console::run(cli).await?;
    Ok(())
}
