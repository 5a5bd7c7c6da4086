//! Command line surface.
//!
//! ```text
//! wings [--api-url URL] [--config PATH] [--demo] <COMMAND>
//!
//!   dashboard
//!   products  list | add | update <ID> | delete <ID>
//!   stock     list | apply --product <ID> --quantity <N> [--type add|deduct]
//!   sales     list | record --product <ID> --quantity <N>
//!   customers list | add | update <ID> | delete <ID>
//!   report
//! ```
//!
//! Numeric options are taken as text and passed through the form drafts, so
//! `--price abc` reaches the service the same way a typed form value would.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use wings_client::config::ENV_API_URL;
use wings_core::{RecordId, StockDirection};

/// Wings Cafe inventory console.
#[derive(Parser, Debug)]
#[command(name = "wings", version, about)]
pub struct Cli {
    /// Inventory service API URL. Overrides the config file.
    #[arg(long, global = true, env = ENV_API_URL)]
    pub api_url: Option<String>,

    /// Config file path. Defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use built-in sample data instead of a running service.
    #[arg(long, global = true, default_value_t = false)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Metrics, recent sales, low-stock alerts and all products.
    Dashboard,
    /// Manage the product catalog.
    Products {
        #[command(subcommand)]
        command: ProductsCommand,
    },
    /// View stock levels and record stock transactions.
    Stock {
        #[command(subcommand)]
        command: StockCommand,
    },
    /// Record sales and view the sales history.
    Sales {
        #[command(subcommand)]
        command: SalesCommand,
    },
    /// Manage customers.
    Customers {
        #[command(subcommand)]
        command: CustomersCommand,
    },
    /// Low-stock report and units sold per product.
    Report,
}

// =============================================================================
// Products
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum ProductsCommand {
    List,
    Add(ProductFields),
    /// Update a product. Omitted fields keep their current values.
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: ProductFields,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Args, Debug, Default)]
pub struct ProductFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Unit price in maloti, e.g. 12.50.
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub quantity: Option<String>,
    /// Externally hosted image URL.
    #[arg(long)]
    pub image_url: Option<String>,
    /// Image file to upload with the product.
    #[arg(long)]
    pub image: Option<PathBuf>,
}

// =============================================================================
// Stock
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum StockCommand {
    List,
    Apply {
        #[arg(long)]
        product: Option<String>,
        #[arg(long)]
        quantity: String,
        #[arg(long = "type", default_value = "add")]
        direction: StockDirection,
    },
}

// =============================================================================
// Sales
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum SalesCommand {
    List,
    Record {
        #[arg(long)]
        product: Option<String>,
        #[arg(long)]
        quantity: String,
    },
}

// =============================================================================
// Customers
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum CustomersCommand {
    List,
    Add(CustomerFields),
    /// Update a customer. Omitted fields keep their current values.
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: CustomerFields,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Args, Debug, Default)]
pub struct CustomerFields {
    #[arg(long)]
    pub name: Option<String>,
    /// Email or phone number.
    #[arg(long)]
    pub contact: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_stock_apply() {
        let cli = Cli::try_parse_from([
            "wings", "stock", "apply", "--product", "3", "--quantity", "4", "--type", "deduct",
        ])
        .unwrap();
        match cli.command {
            Command::Stock {
                command:
                    StockCommand::Apply {
                        product,
                        quantity,
                        direction,
                    },
            } => {
                assert_eq!(product.as_deref(), Some("3"));
                assert_eq!(quantity, "4");
                assert_eq!(direction, StockDirection::Deduct);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let result = Cli::try_parse_from([
            "wings", "stock", "apply", "--product", "3", "--quantity", "4", "--type", "move",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wings",
            "products",
            "update",
            "7",
            "--price",
            "18.50",
            "--demo",
            "--api-url",
            "http://inventory.local/api",
        ])
        .unwrap();
        assert!(cli.demo);
        assert_eq!(cli.api_url.as_deref(), Some("http://inventory.local/api"));
        match cli.command {
            Command::Products {
                command: ProductsCommand::Update { id, fields },
            } => {
                assert_eq!(id, RecordId::Number(7));
                assert_eq!(fields.price.as_deref(), Some("18.50"));
                assert_eq!(fields.name, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
