use std::collections::BTreeMap;
use std::sync::RwLock;

use storefront_core::{DomainError, DomainResult, ProductNo};
use storefront_products::{Product, ProductCatalog, ProductStatus, ProductType};

/// In-memory product catalog.
///
/// Keyed by product number in sequence order, so the latest allocated number
/// is simply the last key.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<BTreeMap<ProductNo, Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision a product under an explicit, already-allocated number.
    pub fn save(&self, product: Product) -> DomainResult<Product> {
        let mut products = self.write()?;
        products.insert(product.product_no().clone(), product.clone());
        Ok(product)
    }

    /// Provision a product under the next number in the sequence.
    ///
    /// Reads the latest stored number and allocates its successor (`001` for
    /// an empty catalog). Single-writer provisioning is assumed; the write
    /// lock covers the read-allocate-insert sequence.
    pub fn register(
        &self,
        product_type: ProductType,
        status: ProductStatus,
        name: impl Into<String>,
        price: u64,
    ) -> DomainResult<Product> {
        let mut products = self.write()?;
        let product_no = match products.keys().next_back() {
            Some(latest) => latest.next()?,
            None => ProductNo::first(),
        };
        let product = Product::new(product_no.clone(), product_type, status, name, price);
        tracing::debug!(%product_no, name = product.name(), "registered product");
        products.insert(product_no, product.clone());
        Ok(product)
    }

    fn write(
        &self,
    ) -> DomainResult<std::sync::RwLockWriteGuard<'_, BTreeMap<ProductNo, Product>>> {
        self.products
            .write()
            .map_err(|_| DomainError::persistence("catalog lock poisoned"))
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn find_all_by_product_no_in(&self, product_nos: &[ProductNo]) -> DomainResult<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|_| DomainError::persistence("catalog lock poisoned"))?;
        Ok(products
            .values()
            .filter(|p| product_nos.contains(p.product_no()))
            .cloned()
            .collect())
    }

    fn find_all_by_status_in(&self, statuses: &[ProductStatus]) -> DomainResult<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|_| DomainError::persistence("catalog lock poisoned"))?;
        Ok(products
            .values()
            .filter(|p| statuses.contains(&p.status()))
            .cloned()
            .collect())
    }
}
