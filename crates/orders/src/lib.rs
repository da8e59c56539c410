//! Order domain and order creation.
//!
//! The order assembler ([`OrderService`]) is the engineered core of the
//! system: it turns a list of requested product numbers and a caller-supplied
//! timestamp into a priced, persisted [`Order`], coordinating the catalog,
//! the stock ledger and the order store so that the whole operation either
//! completes or leaves no trace.

pub mod order;
pub mod service;
pub mod statistics;
pub mod store;

pub use order::{Order, OrderLine, OrderStatus};
pub use service::{OrderCreateRequest, OrderResponse, OrderService};
pub use statistics::OrderStatisticsService;
pub use store::OrderStore;
