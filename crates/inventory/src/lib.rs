//! Stock ledger domain.
//!
//! This crate contains the stock record and its deduction rules, implemented
//! purely as deterministic domain logic (no IO, no storage). The ledger
//! storage and its atomicity strategy live behind the [`StockLedger`] trait.

pub mod ledger;
pub mod stock;

pub use ledger::{DeductionCounts, StockLedger};
pub use stock::Stock;
