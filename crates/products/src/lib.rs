//! Product catalog domain.
//!
//! This crate contains the product record, its type/status classification and
//! the catalog lookup seam. It is pure domain logic (no IO, no HTTP, no
//! storage); storage lives behind the [`ProductCatalog`] trait.

pub mod catalog;
pub mod product;
pub mod service;

pub use catalog::ProductCatalog;
pub use product::{Product, ProductStatus, ProductType};
pub use service::ProductService;
