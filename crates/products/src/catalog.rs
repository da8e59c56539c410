//! Catalog lookup seam.

use storefront_core::{DomainResult, ProductNo};

use crate::product::{Product, ProductStatus};

/// Read access to the product catalog.
///
/// Implementations own storage and synchronization; callers treat lookups as
/// batch operations and do not rely on result ordering.
pub trait ProductCatalog: Send + Sync {
    /// Resolve every product whose number is in `product_nos`.
    ///
    /// Numbers with no match are simply absent from the result; duplicates in
    /// the input do not duplicate the output.
    fn find_all_by_product_no_in(&self, product_nos: &[ProductNo]) -> DomainResult<Vec<Product>>;

    /// All products whose status is in `statuses`.
    fn find_all_by_status_in(&self, statuses: &[ProductStatus]) -> DomainResult<Vec<Product>>;
}

impl<T> ProductCatalog for std::sync::Arc<T>
where
    T: ProductCatalog + ?Sized,
{
    fn find_all_by_product_no_in(&self, product_nos: &[ProductNo]) -> DomainResult<Vec<Product>> {
        (**self).find_all_by_product_no_in(product_nos)
    }

    fn find_all_by_status_in(&self, statuses: &[ProductStatus]) -> DomainResult<Vec<Product>> {
        (**self).find_all_by_status_in(statuses)
    }
}
