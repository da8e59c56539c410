use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductNo};

/// Product classification (closed set).
///
/// The classification decides whether the product participates in stock
/// tracking: handmade items are produced per order and carry no stock record,
/// bottled and bakery items are finite goods backed by the stock ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Handmade,
    Bottle,
    Bakery,
}

impl ProductType {
    /// Whether orders for this type deduct from the stock ledger.
    ///
    /// This is the only gate on deduction; display status is deliberately
    /// not consulted at order time.
    pub fn is_stock_managed(self) -> bool {
        matches!(self, ProductType::Bottle | ProductType::Bakery)
    }
}

/// Product display status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Selling,
    Hold,
    SoldOut,
}

impl ProductStatus {
    /// Statuses shown on the storefront listing.
    pub fn for_display() -> [ProductStatus; 2] {
        [ProductStatus::Selling, ProductStatus::Hold]
    }
}

/// Catalogued product record.
///
/// Created by catalog provisioning and immutable thereafter within this
/// core's view. Orders snapshot the fields they need rather than holding a
/// reference back into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    product_no: ProductNo,
    product_type: ProductType,
    status: ProductStatus,
    name: String,
    /// Unit price in the smallest currency unit.
    price: u64,
}

impl Product {
    pub fn new(
        product_no: ProductNo,
        product_type: ProductType,
        status: ProductStatus,
        name: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            product_no,
            product_type,
            status,
            name: name.into(),
            price,
        }
    }

    pub fn product_no(&self) -> &ProductNo {
        &self.product_no
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    /// Whether this product is backed by a stock record.
    pub fn is_stock_managed(&self) -> bool {
        self.product_type.is_stock_managed()
    }
}

impl Entity for Product {
    type Id = ProductNo;

    fn id(&self) -> &Self::Id {
        &self.product_no
    }
}
