//! # Screens
//!
//! One controller per business screen. Each owns its own snapshots, form
//! draft and error slot; nothing is shared between screens.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Screen Lifecycle                                   │
//! │                                                                         │
//! │   new(api) ──► load() ──► snapshot replaced (or error slot set)        │
//! │                  ▲                                                      │
//! │                  │                                                      │
//! │   edit draft ──► submit() ──► mutation ──► ok: clear draft, reload     │
//! │                                        └─► err: error slot set,        │
//! │                                             draft and mode kept        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Screen      | Snapshots                   | Mutations                  |
//! |-------------|-----------------------------|----------------------------|
//! | Dashboard   | products, sales, customers  | none                       |
//! | Products    | products                    | create, update, delete     |
//! | Stock       | products                    | apply stock transaction    |
//! | Sales       | products, sales             | record sale                |
//! | Customers   | customers                   | create, update, delete     |
//! | Reporting   | products, sales             | none                       |

use std::sync::Arc;

use wings_client::InventoryApi;

pub mod customers;
pub mod dashboard;
pub mod products;
pub mod reporting;
pub mod sales;
pub mod stock;

pub use customers::CustomersScreen;
pub use dashboard::DashboardScreen;
pub use products::ProductsScreen;
pub use reporting::ReportingScreen;
pub use sales::SalesScreen;
pub use stock::StockScreen;

/// Shared handle to the inventory service.
pub type Api = Arc<dyn InventoryApi>;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use wings_client::InMemoryInventory;
    use wings_core::{Customer, Money, Product, RecordId, Sale};

    pub fn product(id: i64, name: &str, quantity: i64) -> Product {
        Product {
            id: RecordId::Number(id),
            name: name.to_string(),
            description: format!("{name} description"),
            category: "Drinks".to_string(),
            price: Some(Money::from_cents(1250)),
            quantity,
            image_path: None,
        }
    }

    pub fn sale(id: i64, product_id: i64, quantity: i64) -> Sale {
        Sale {
            id: RecordId::Number(id),
            product_id: RecordId::Number(product_id),
            quantity,
            timestamp: None,
        }
    }

    pub fn customer(id: i64, name: &str) -> Customer {
        Customer {
            id: RecordId::Number(id),
            name: name.to_string(),
            contact: format!("{}@example.com", name.to_lowercase()),
        }
    }

    /// Tea (5 in stock), Coffee (20), one sale of 3 teas, one customer.
    pub fn cafe() -> Arc<InMemoryInventory> {
        Arc::new(
            InMemoryInventory::new()
                .with_products(vec![product(1, "Tea", 5), product(2, "Coffee", 20)])
                .with_sales(vec![sale(3, 1, 3)])
                .with_customers(vec![customer(4, "Lerato")]),
        )
    }
}
