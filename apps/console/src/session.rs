//! # Session
//!
//! What every command needs: the service handle and the display settings.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ClientConfig ──► Session::connect ──► HttpInventory                   │
//! │                                                                         │
//! │  --demo ────────► Session::demo ─────► InMemoryInventory (seeded)      │
//! │                                                                         │
//! │  Session { api, asset_base, local_timestamps }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use wings_client::{ClientConfig, HttpInventory, InMemoryInventory};
use wings_core::{Customer, Money, Product, RecordId, Sale};

use crate::error::{ConsoleError, ConsoleResult};
use crate::render::RenderOptions;
use crate::screens::Api;

pub struct Session {
    pub api: Api,
    pub asset_base: String,
    pub local_timestamps: bool,
}

impl Session {
    /// Connects to the inventory service named in `config`.
    pub fn connect(config: &ClientConfig) -> ConsoleResult<Self> {
        let url = config.api_url()?;
        let api = HttpInventory::new(url.clone())
            .map_err(|e| ConsoleError::HttpClient(e.to_string()))?;
        info!(api_url = %url, "Using inventory service");

        Ok(Session {
            api: Arc::new(api),
            asset_base: config.asset_base().to_string(),
            local_timestamps: config.display.locale_timestamps,
        })
    }

    /// Works against built-in sample data. Changes last for one command.
    pub fn demo(config: &ClientConfig) -> Self {
        info!("Using demo data");
        Session {
            api: Arc::new(demo_inventory()),
            asset_base: config.asset_base().to_string(),
            local_timestamps: config.display.locale_timestamps,
        }
    }

    pub fn render_options(&self) -> RenderOptions<'_> {
        RenderOptions {
            asset_base: &self.asset_base,
            local_timestamps: self.local_timestamps,
        }
    }
}

fn demo_product(
    id: i64,
    name: &str,
    category: &str,
    cents: i64,
    quantity: i64,
    image: Option<&str>,
) -> Product {
    Product {
        id: RecordId::Number(id),
        name: name.to_string(),
        description: String::new(),
        category: category.to_string(),
        price: Some(Money::from_cents(cents)),
        quantity,
        image_path: image.map(str::to_string),
    }
}

/// A small cafe: a few drinks and snacks, two of them running low.
pub fn demo_inventory() -> InMemoryInventory {
    let now = Utc::now();
    let sale = |id: i64, product_id: i64, quantity: i64, hours_ago: i64| Sale {
        id: RecordId::Number(id),
        product_id: RecordId::Number(product_id),
        quantity,
        timestamp: Some(now - Duration::hours(hours_ago)),
    };

    InMemoryInventory::new()
        .with_products(vec![
            demo_product(1, "Rooibos Tea", "Drinks", 1500, 6, Some("/uploads/rooibos.png")),
            demo_product(2, "Cappuccino", "Drinks", 2800, 40, None),
            demo_product(3, "Chicken Wings", "Meals", 6500, 25, None),
            demo_product(4, "Scone", "Bakery", 1200, 3, None),
            demo_product(5, "Fresh Juice", "Drinks", 2200, 18, None),
        ])
        .with_sales(vec![
            sale(6, 3, 2, 1),
            sale(7, 2, 1, 3),
            sale(8, 1, 4, 5),
            sale(9, 4, 6, 26),
        ])
        .with_customers(vec![
            Customer {
                id: RecordId::Number(10),
                name: "Lerato Mokoena".to_string(),
                contact: "lerato@example.com".to_string(),
            },
            Customer {
                id: RecordId::Number(11),
                name: "Thabo Nthane".to_string(),
                contact: "+266 5800 1234".to_string(),
            },
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use wings_core::metrics::low_stock_products;

    #[tokio::test]
    async fn test_demo_inventory() {
        let fake = demo_inventory();
        let products = fake.products().await;
        let low: Vec<&str> = low_stock_products(&products)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(low, vec!["Rooibos Tea", "Scone"]);
        assert_eq!(fake.sales().await.len(), 4);
    }

    #[test]
    fn test_connect_uses_config() {
        let config = ClientConfig::default();
        let session = Session::connect(&config).unwrap();
        assert_eq!(session.asset_base, config.asset_base());
        assert!(!session.render_options().local_timestamps);
    }
}
