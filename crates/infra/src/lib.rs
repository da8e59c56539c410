//! Infrastructure implementations of the collaborator seams.
//!
//! Everything here is in-memory (`RwLock<HashMap>`-style stores) and intended
//! for tests/dev. A database-backed implementation would put the catalog,
//! ledger and order store behind one transaction; the domain services do not
//! change either way.

pub mod memory;

mod integration_tests;

pub use memory::{
    InMemoryCatalog, InMemoryMailHistoryStore, InMemoryOrderStore, InMemoryStockLedger,
    StubMailClient,
};
