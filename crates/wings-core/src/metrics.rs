//! # Derived Metrics
//!
//! View data computed from the raw collections a screen has loaded.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   [Product]  [Sale]  [Customer]      (snapshots, received order)       │
//! │       │        │         │                                              │
//! │       ▼        ▼         ▼                                              │
//! │   low_stock_products   sales_summary   dashboard_metrics               │
//! │       │                    │                  │                         │
//! │       └────────────────────┴──────────────────┘                         │
//! │                            ▼                                            │
//! │                      render (console)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure and total: empty input gives empty or zero
//! output, and input order is preserved. Nothing sorts.

use std::collections::HashMap;

use crate::types::{Customer, Product, RecordId, Sale};
use crate::{LOW_STOCK_THRESHOLD, RECENT_SALES_WINDOW, UNKNOWN_PRODUCT};

// =============================================================================
// Low Stock
// =============================================================================

/// Products with quantity below the low-stock threshold, in input order.
pub fn low_stock_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

/// Stock level label shown next to each product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Low,
    Sufficient,
}

impl StockStatus {
    pub fn of(product: &Product) -> Self {
        if product.quantity < LOW_STOCK_THRESHOLD {
            StockStatus::Low
        } else {
            StockStatus::Sufficient
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Low => "Low Stock!",
            StockStatus::Sufficient => "Sufficient",
        }
    }
}

// =============================================================================
// Sales Summary
// =============================================================================

/// One row of the per-product sales summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummaryRow<'a> {
    pub product: &'a Product,
    pub total_sold: i64,
}

/// Units sold per product, one row per product in input order.
///
/// Sales pointing at products not in `products` are ignored. Totals saturate
/// at `i64::MAX`.
pub fn sales_summary<'a>(products: &'a [Product], sales: &[Sale]) -> Vec<SalesSummaryRow<'a>> {
    let mut totals: HashMap<&RecordId, i64> = HashMap::new();
    for sale in sales {
        let total = totals.entry(&sale.product_id).or_insert(0);
        *total = total.saturating_add(sale.quantity);
    }

    products
        .iter()
        .map(|product| SalesSummaryRow {
            product,
            total_sold: totals.get(&product.id).copied().unwrap_or(0),
        })
        .collect()
}

// =============================================================================
// Dashboard
// =============================================================================

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics<'a> {
    pub total_products: usize,
    pub low_stock_count: usize,
    pub total_sales: usize,
    pub total_customers: usize,
    /// The first sales as received. The service decides the order.
    pub recent_sales: &'a [Sale],
}

pub fn dashboard_metrics<'a>(
    products: &[Product],
    sales: &'a [Sale],
    customers: &[Customer],
) -> DashboardMetrics<'a> {
    DashboardMetrics {
        total_products: products.len(),
        low_stock_count: products.iter().filter(|p| p.is_low_stock()).count(),
        total_sales: sales.len(),
        total_customers: customers.len(),
        recent_sales: &sales[..sales.len().min(RECENT_SALES_WINDOW)],
    }
}

/// Name of the product a sale refers to, or `"Unknown"` when it is gone.
pub fn product_name_for<'a>(products: &'a [Product], product_id: &RecordId) -> &'a str {
    products
        .iter()
        .find(|p| &p.id == product_id)
        .map_or(UNKNOWN_PRODUCT, |p| p.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, quantity: i64) -> Product {
        Product {
            id: RecordId::Number(id),
            name: name.to_string(),
            description: String::new(),
            category: String::new(),
            price: None,
            quantity,
            image_path: None,
        }
    }

    fn sale(id: i64, product_id: i64, quantity: i64) -> Sale {
        Sale {
            id: RecordId::Number(id),
            product_id: RecordId::Number(product_id),
            quantity,
            timestamp: None,
        }
    }

    fn tea_and_coffee() -> Vec<Product> {
        vec![product(1, "Tea", 5), product(2, "Coffee", 20)]
    }

    #[test]
    fn test_low_stock_products() {
        let products = tea_and_coffee();
        let low = low_stock_products(&products);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Tea");
    }

    #[test]
    fn test_low_stock_preserves_order() {
        let products = vec![product(3, "Scone", 2), product(1, "Tea", 9), product(2, "Coffee", 10)];
        let names: Vec<_> = low_stock_products(&products).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Scone", "Tea"]);
    }

    #[test]
    fn test_sales_summary() {
        let products = tea_and_coffee();
        let sales = vec![sale(1, 1, 3)];
        let summary = sales_summary(&products, &sales);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].product.name, "Tea");
        assert_eq!(summary[0].total_sold, 3);
        assert_eq!(summary[1].product.name, "Coffee");
        assert_eq!(summary[1].total_sold, 0);
    }

    #[test]
    fn test_sales_summary_sums_and_ignores_dangling() {
        let products = tea_and_coffee();
        let mut string_id_sale = sale(4, 0, 1);
        string_id_sale.product_id = RecordId::Text("2".to_string());
        let sales = vec![sale(1, 1, 3), sale(2, 1, 4), sale(3, 99, 50), string_id_sale];
        let summary = sales_summary(&products, &sales);

        assert_eq!(summary[0].total_sold, 7);
        assert_eq!(summary[1].total_sold, 1);
    }

    #[test]
    fn test_dashboard_metrics_empty() {
        let metrics = dashboard_metrics(&[], &[], &[]);
        assert_eq!(metrics.total_products, 0);
        assert_eq!(metrics.low_stock_count, 0);
        assert_eq!(metrics.total_sales, 0);
        assert_eq!(metrics.total_customers, 0);
        assert!(metrics.recent_sales.is_empty());
    }

    #[test]
    fn test_dashboard_metrics_recent_window() {
        let products = tea_and_coffee();
        let sales: Vec<Sale> = (1..=7).map(|i| sale(i, 1, 1)).collect();
        let customers = vec![Customer {
            id: RecordId::Number(1),
            name: "Thabo".to_string(),
            contact: "555-0100".to_string(),
        }];

        let metrics = dashboard_metrics(&products, &sales, &customers);
        assert_eq!(metrics.total_products, 2);
        assert_eq!(metrics.low_stock_count, 1);
        assert_eq!(metrics.total_sales, 7);
        assert_eq!(metrics.total_customers, 1);
        assert_eq!(metrics.recent_sales, &sales[..5]);
    }

    #[test]
    fn test_dashboard_metrics_fewer_than_window() {
        let sales = vec![sale(1, 1, 1), sale(2, 2, 1)];
        let metrics = dashboard_metrics(&[], &sales, &[]);
        assert_eq!(metrics.recent_sales.len(), 2);
    }

    #[test]
    fn test_product_name_for_unknown() {
        let products = tea_and_coffee();
        assert_eq!(product_name_for(&products, &RecordId::Number(2)), "Coffee");
        assert_eq!(product_name_for(&products, &RecordId::Number(42)), "Unknown");
    }

    #[test]
    fn test_sales_summary_saturates() {
        let products = tea_and_coffee();
        let sales = vec![sale(1, 1, i64::MAX), sale(2, 1, i64::MAX), sale(3, 2, 4)];
        let summary = sales_summary(&products, &sales);
        assert_eq!(summary[0].total_sold, i64::MAX);
        assert_eq!(summary[1].total_sold, 4);
    }

    #[test]
    fn test_low_stock_and_summary_over_mixed_catalogue() {
        let quantities = [0, 9, 10, 11, 50, 3, 10, 9];
        let products: Vec<Product> = quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| product(i as i64 + 1, &format!("Item {}", i + 1), q))
            .collect();

        // Several sales per product, none for the last two, plus a dangling id.
        let mut sales = Vec::new();
        for id in 1..=6i64 {
            for n in 0..id {
                sales.push(sale(sales.len() as i64 + 1, id, n + 1));
            }
        }
        sales.push(sale(99, 404, 7));

        let low = low_stock_products(&products);
        let low_ids: Vec<&RecordId> = low.iter().map(|p| &p.id).collect();
        let expected: Vec<&RecordId> = products
            .iter()
            .filter(|p| p.quantity < LOW_STOCK_THRESHOLD)
            .map(|p| &p.id)
            .collect();
        assert_eq!(low_ids, expected);
        assert!(low.iter().all(|p| p.quantity < LOW_STOCK_THRESHOLD));
        assert!(products
            .iter()
            .filter(|p| !low_ids.contains(&&p.id))
            .all(|p| p.quantity >= LOW_STOCK_THRESHOLD));

        let summary = sales_summary(&products, &sales);
        assert_eq!(summary.len(), products.len());
        for (row, product) in summary.iter().zip(&products) {
            assert_eq!(row.product.id, product.id);
            let sold: i64 = sales
                .iter()
                .filter(|s| s.product_id == product.id)
                .map(|s| s.quantity)
                .sum();
            assert_eq!(row.total_sold, sold);
        }
        assert_eq!(summary[5].total_sold, 21);
        assert_eq!(summary[6].total_sold, 0);
        assert_eq!(summary[7].total_sold, 0);
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(StockStatus::of(&product(1, "Tea", 9)).label(), "Low Stock!");
        assert_eq!(StockStatus::of(&product(1, "Tea", 10)).label(), "Sufficient");
    }
}
