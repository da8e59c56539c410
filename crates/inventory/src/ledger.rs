//! Ledger seam: check-and-deduct over shared stock records.

use std::collections::HashMap;

use storefront_core::{DomainResult, ProductNo};

/// Required deduction count per distinct product.
pub type DeductionCounts = HashMap<ProductNo, u32>;

/// Shared mutable stock state, accessed by concurrent order creations.
///
/// Implementations choose the atomicity strategy (a lock held across the
/// check-then-mutate sequence, an optimistic version counter with retries,
/// a database transaction). Whatever the strategy, the contract is the same:
/// a quantity never goes negative, and [`StockLedger::deduct_all`] either
/// applies every entry or none of them.
pub trait StockLedger: Send + Sync {
    /// Current quantity for `product_no`.
    ///
    /// `None` means the product is not stock-tracked at all, which is
    /// distinct from a tracked product at quantity zero.
    fn quantity_of(&self, product_no: &ProductNo) -> DomainResult<Option<u32>>;

    /// Whether `product_no` has at least `count` units on hand.
    ///
    /// An untracked product never "has" stock.
    fn has_at_least(&self, product_no: &ProductNo, count: u32) -> DomainResult<bool> {
        Ok(self
            .quantity_of(product_no)?
            .is_some_and(|quantity| quantity >= count))
    }

    /// Subtract `count` from a single product's quantity.
    ///
    /// Fails with `InsufficientStock` without mutating when the quantity is
    /// short or the product is untracked. The check and the subtraction are
    /// atomic with respect to concurrent callers.
    fn deduct(&self, product_no: &ProductNo, count: u32) -> DomainResult<()>;

    /// Subtract every entry of `counts`, all or nothing.
    ///
    /// Every entry's sufficiency is checked before any entry is mutated; if
    /// any is short, the call fails with `InsufficientStock` naming an
    /// offending product and **no** quantity changes. A partially applied
    /// deduction would corrupt the ledger relative to an order that was never
    /// persisted, so this is the central correctness property of the ledger.
    fn deduct_all(&self, counts: &DeductionCounts) -> DomainResult<()>;

    /// Add every entry of `counts` back.
    ///
    /// Compensation for a deduction whose enclosing order creation failed
    /// afterwards (e.g. order persistence); the counts must be exactly the
    /// ones previously deducted.
    fn restore_all(&self, counts: &DeductionCounts) -> DomainResult<()>;
}

impl<T> StockLedger for std::sync::Arc<T>
where
    T: StockLedger + ?Sized,
{
    fn quantity_of(&self, product_no: &ProductNo) -> DomainResult<Option<u32>> {
        (**self).quantity_of(product_no)
    }

    fn has_at_least(&self, product_no: &ProductNo, count: u32) -> DomainResult<bool> {
        (**self).has_at_least(product_no, count)
    }

    fn deduct(&self, product_no: &ProductNo, count: u32) -> DomainResult<()> {
        (**self).deduct(product_no, count)
    }

    fn deduct_all(&self, counts: &DeductionCounts) -> DomainResult<()> {
        (**self).deduct_all(counts)
    }

    fn restore_all(&self, counts: &DeductionCounts) -> DomainResult<()> {
        (**self).restore_all(counts)
    }
}
