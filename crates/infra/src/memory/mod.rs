//! In-memory stores (intended for tests/dev; not optimized for performance).

mod catalog;
mod ledger;
mod mail;
mod orders;

pub use catalog::InMemoryCatalog;
pub use ledger::InMemoryStockLedger;
pub use mail::{InMemoryMailHistoryStore, StubMailClient};
pub use orders::InMemoryOrderStore;
