use std::collections::HashMap;
use std::sync::RwLock;

use storefront_core::{DomainError, DomainResult, ProductNo};
use storefront_inventory::{DeductionCounts, Stock, StockLedger};

/// In-memory stock ledger.
///
/// Atomicity strategy: the write lock is held across the whole
/// check-then-mutate sequence, so concurrent `deduct_all` calls are
/// serialized. Two orders that would together overdraw a product can never
/// both succeed.
#[derive(Debug, Default)]
pub struct InMemoryStockLedger {
    stocks: RwLock<HashMap<ProductNo, Stock>>,
}

impl InMemoryStockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision a stock record (created alongside catalog provisioning).
    pub fn put(&self, stock: Stock) -> DomainResult<()> {
        let mut stocks = self.write()?;
        stocks.insert(stock.product_no().clone(), stock);
        Ok(())
    }

    fn write(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, HashMap<ProductNo, Stock>>> {
        self.stocks
            .write()
            .map_err(|_| DomainError::persistence("stock ledger lock poisoned"))
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, HashMap<ProductNo, Stock>>> {
        self.stocks
            .read()
            .map_err(|_| DomainError::persistence("stock ledger lock poisoned"))
    }
}

impl StockLedger for InMemoryStockLedger {
    fn quantity_of(&self, product_no: &ProductNo) -> DomainResult<Option<u32>> {
        let stocks = self.read()?;
        Ok(stocks.get(product_no).map(Stock::quantity))
    }

    fn deduct(&self, product_no: &ProductNo, count: u32) -> DomainResult<()> {
        let mut stocks = self.write()?;
        let stock = stocks
            .get_mut(product_no)
            .ok_or_else(|| DomainError::insufficient_stock(product_no.clone()))?;
        stock.deduct(count)
    }

    fn deduct_all(&self, counts: &DeductionCounts) -> DomainResult<()> {
        let mut stocks = self.write()?;

        // Check every entry before mutating any.
        for (product_no, &count) in counts {
            let short = match stocks.get(product_no) {
                Some(stock) => stock.is_quantity_less_than(count),
                None => true,
            };
            if short {
                return Err(DomainError::insufficient_stock(product_no.clone()));
            }
        }

        for (product_no, &count) in counts {
            if let Some(stock) = stocks.get_mut(product_no) {
                stock.deduct(count)?;
            }
        }
        tracing::debug!(products = counts.len(), "deducted stock batch");
        Ok(())
    }

    fn restore_all(&self, counts: &DeductionCounts) -> DomainResult<()> {
        let mut stocks = self.write()?;
        for (product_no, &count) in counts {
            stocks
                .entry(product_no.clone())
                .or_insert_with(|| Stock::new(product_no.clone(), 0))
                .restore(count)?;
        }
        Ok(())
    }
}
