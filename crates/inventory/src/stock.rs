use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductNo};

/// Stock record for a single stock-managed product.
///
/// The quantity is a `u32`: a negative quantity is unrepresentable, and
/// [`Stock::deduct`] refuses any deduction that would require one. Only
/// products whose type is stock-managed have a record at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    product_no: ProductNo,
    quantity: u32,
}

impl Stock {
    pub fn new(product_no: ProductNo, quantity: u32) -> Self {
        Self {
            product_no,
            quantity,
        }
    }

    pub fn product_no(&self) -> &ProductNo {
        &self.product_no
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the current quantity is short of `required`.
    pub fn is_quantity_less_than(&self, required: u32) -> bool {
        self.quantity < required
    }

    /// Subtract `count` from the quantity.
    ///
    /// Fails with [`DomainError::InsufficientStock`] without mutating when the
    /// quantity is short.
    pub fn deduct(&mut self, count: u32) -> DomainResult<()> {
        self.quantity = self
            .quantity
            .checked_sub(count)
            .ok_or_else(|| DomainError::insufficient_stock(self.product_no.clone()))?;
        Ok(())
    }

    /// Add `count` back to the quantity (compensation for a rolled-back
    /// deduction).
    pub fn restore(&mut self, count: u32) -> DomainResult<()> {
        self.quantity = self.quantity.checked_add(count).ok_or_else(|| {
            DomainError::invariant(format!("stock quantity overflow for product {}", self.product_no))
        })?;
        Ok(())
    }
}

impl Entity for Stock {
    type Id = ProductNo;

    fn id(&self) -> &Self::Id {
        &self.product_no
    }
}
