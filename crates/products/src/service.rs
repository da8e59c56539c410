//! Catalog listing service.

use storefront_core::DomainResult;

use crate::catalog::ProductCatalog;
use crate::product::{Product, ProductStatus};

/// Read-only product listing over a [`ProductCatalog`].
///
/// Catalog management (create/update) is out of scope for this core; the
/// service only exposes the storefront-facing listing.
#[derive(Debug)]
pub struct ProductService<C> {
    catalog: C,
}

impl<C> ProductService<C>
where
    C: ProductCatalog,
{
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Products shown on the storefront: everything currently selling or on
    /// hold. Sold-out products are filtered out of the listing.
    pub fn selling_products(&self) -> DomainResult<Vec<Product>> {
        self.catalog
            .find_all_by_status_in(&ProductStatus::for_display())
    }
}
