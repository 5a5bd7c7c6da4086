//! # Endpoints
//!
//! One type per service resource, borrowed from [`HttpInventory`].
//!
//! ## Endpoint Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Screen                                                                 │
//! │    │  api.products().update(&id, &payload, None)                       │
//! │    ▼                                                                    │
//! │  ProductEndpoint                                                       │
//! │  ├── list()              GET    /products                              │
//! │  ├── create(..)          POST   /products          (multipart)         │
//! │  ├── update(id, ..)      PUT    /products/{id}     (multipart)         │
//! │  └── delete(id)          DELETE /products/{id}                         │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  HttpInventory::send_json / send_confirm                               │
//! │                                                                         │
//! │  Request shapes live here; status mapping and decoding do not.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`HttpInventory`]: crate::HttpInventory

pub mod customer;
pub mod product;
pub mod sale;
pub mod stock;

pub use customer::CustomerEndpoint;
pub use product::ProductEndpoint;
pub use sale::SaleEndpoint;
pub use stock::StockEndpoint;
