//! # Text Rendering
//!
//! Turns screen state into plain-text tables for stdout. Nothing here does
//! I/O; every function returns a `String`.
//!
//! ```text
//! Name    Category  Price   Quantity  Status
//! ------  --------  ------  --------  ----------
//! Tea     Drinks    M12.50  5         Low Stock!
//! Coffee  Drinks    M12.50  20        Sufficient
//! ```

use std::fmt::Write as _;

use chrono::{DateTime, Local, Utc};

use wings_core::metrics::{product_name_for, StockStatus};
use wings_core::money::format_price;
use wings_core::{Customer, ImageSource, Product, Sale};

use crate::screens::{
    CustomersScreen, DashboardScreen, ProductsScreen, ReportingScreen, SalesScreen, StockScreen,
};

/// Placeholder for an empty cell.
const EMPTY_CELL: &str = "-";

/// Display settings shared by every view.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Host that service-relative image paths are resolved against.
    pub asset_base: &'a str,
    /// Show sale times in the local zone instead of UTC.
    pub local_timestamps: bool,
}

// =============================================================================
// Table
// =============================================================================

/// Left-aligned columns sized to their widest cell.
struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: Vec<&'static str>) -> Self {
        Table {
            headers,
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn render(&self, empty: &str) -> String {
        if self.rows.is_empty() {
            return format!("{empty}\n");
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        push_line(&mut out, &headers, &widths);
        let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rules, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

fn heading(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

fn error_line(out: &mut String, error: Option<&str>) {
    if let Some(message) = error {
        let _ = writeln!(out, "! {message}");
    }
}

// =============================================================================
// Cells
// =============================================================================

fn image_cell(product: &Product, asset_base: &str) -> String {
    ImageSource::classify(product.image_path.as_deref())
        .resolve(asset_base)
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

fn or_empty(text: &str) -> String {
    if text.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        text.to_string()
    }
}

/// Sale time for display; missing timestamps show as `-`.
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>, local: bool) -> String {
    match timestamp {
        None => EMPTY_CELL.to_string(),
        Some(ts) if local => ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        Some(ts) => ts.format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}

// =============================================================================
// Shared Tables
// =============================================================================

/// Full product table with image, price and stock status.
pub fn products_table(products: &[Product], asset_base: &str) -> String {
    let mut table = Table::new(vec!["ID", "Image", "Name", "Category", "Price", "Quantity", "Status"]);
    for p in products {
        table.row(vec![
            p.id.to_string(),
            image_cell(p, asset_base),
            p.name.clone(),
            or_empty(&p.category),
            format_price(p.price),
            p.quantity.to_string(),
            StockStatus::of(p).label().to_string(),
        ]);
    }
    table.render("No products found.")
}

/// Low-stock alert rows: image, name, category and current level.
pub fn low_stock_table(products: &[&Product], asset_base: &str) -> String {
    let mut table = Table::new(vec!["Image", "Name", "Category", "Quantity"]);
    for p in products {
        table.row(vec![
            image_cell(p, asset_base),
            p.name.clone(),
            or_empty(&p.category),
            p.quantity.to_string(),
        ]);
    }
    table.render("All products are sufficiently stocked.")
}

/// Sales history joined with product names.
pub fn sales_table(sales: &[Sale], products: &[Product], local_timestamps: bool) -> String {
    let mut table = Table::new(vec!["ID", "Product", "Quantity", "Date"]);
    for sale in sales {
        table.row(vec![
            sale.id.to_string(),
            product_name_for(products, &sale.product_id).to_string(),
            sale.quantity.to_string(),
            format_timestamp(sale.timestamp, local_timestamps),
        ]);
    }
    table.render("No sales recorded.")
}

pub fn customers_table(customers: &[Customer]) -> String {
    let mut table = Table::new(vec!["ID", "Name", "Contact"]);
    for c in customers {
        table.row(vec![c.id.to_string(), c.name.clone(), or_empty(&c.contact)]);
    }
    table.render("No customers found.")
}

// =============================================================================
// Views
// =============================================================================

pub fn dashboard(screen: &DashboardScreen, opts: RenderOptions<'_>) -> String {
    let mut out = String::new();
    error_line(&mut out, screen.error());

    let metrics = screen.metrics();
    heading(&mut out, "Dashboard");
    let _ = writeln!(out, "Total Products:   {}", metrics.total_products);
    let _ = writeln!(out, "Low Stock Items:  {}", metrics.low_stock_count);
    let _ = writeln!(out, "Total Sales:      {}", metrics.total_sales);
    let _ = writeln!(out, "Total Customers:  {}", metrics.total_customers);

    heading(&mut out, "Recent Sales");
    out.push_str(&sales_table(
        metrics.recent_sales,
        screen.products(),
        opts.local_timestamps,
    ));

    heading(&mut out, "Low Stock Alerts");
    out.push_str(&low_stock_table(&screen.low_stock(), opts.asset_base));

    heading(&mut out, "All Products");
    out.push_str(&products_table(screen.products(), opts.asset_base));
    out
}

pub fn products(screen: &ProductsScreen, opts: RenderOptions<'_>) -> String {
    let mut out = String::new();
    error_line(&mut out, screen.error());
    heading(&mut out, "Products");
    out.push_str(&products_table(screen.products(), opts.asset_base));
    out
}

pub fn stock(screen: &StockScreen) -> String {
    let mut out = String::new();
    error_line(&mut out, screen.error());
    heading(&mut out, "Stock Levels");

    let mut table = Table::new(vec!["ID", "Name", "Quantity", "Status"]);
    for (p, status) in screen.levels() {
        table.row(vec![
            p.id.to_string(),
            p.name.clone(),
            p.quantity.to_string(),
            status.label().to_string(),
        ]);
    }
    out.push_str(&table.render("No products found."));
    out
}

pub fn sales(screen: &SalesScreen, opts: RenderOptions<'_>) -> String {
    let mut out = String::new();
    error_line(&mut out, screen.error());

    heading(&mut out, "Products Available");
    if screen.products().is_empty() {
        out.push_str("No products found.\n");
    }
    for p in screen.products() {
        let _ = writeln!(out, "{}  {} (Stock: {})", p.id, p.name, p.quantity);
    }

    heading(&mut out, "Sales History");
    out.push_str(&sales_table(
        screen.sales(),
        screen.products(),
        opts.local_timestamps,
    ));
    out
}

pub fn customers(screen: &CustomersScreen) -> String {
    let mut out = String::new();
    error_line(&mut out, screen.error());
    heading(&mut out, "Customers");
    out.push_str(&customers_table(screen.customers()));
    out
}

pub fn report(screen: &ReportingScreen, opts: RenderOptions<'_>) -> String {
    let mut out = String::new();
    error_line(&mut out, screen.error());

    heading(&mut out, "Low Stock Report");
    out.push_str(&low_stock_table(&screen.low_stock(), opts.asset_base));

    heading(&mut out, "Sales Summary");
    let mut table = Table::new(vec!["Product", "Total Sold"]);
    for row in screen.summary() {
        table.row(vec![row.product.name.clone(), row.total_sold.to_string()]);
    }
    out.push_str(&table.render("No products found."));
    out
}
