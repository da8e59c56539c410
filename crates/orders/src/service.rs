//! Order creation (the order assembler).
//!
//! `OrderService` composes the three collaborator seams — [`ProductCatalog`],
//! [`StockLedger`], [`OrderStore`] — and runs order creation as a single
//! all-or-nothing unit: validate, resolve, deduct, persist. A stock shortfall
//! aborts before anything is written; a persistence failure after deduction
//! restores the deducted counts before propagating.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, OrderId, ProductNo};
use storefront_inventory::{DeductionCounts, StockLedger};
use storefront_products::{Product, ProductCatalog, ProductType};

use crate::order::Order;
use crate::store::OrderStore;

/// Ordered sequence of requested product numbers.
///
/// Duplicates are meaningful: each occurrence is a distinct line-item demand.
/// An empty sequence is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreateRequest {
    pub product_nos: Vec<ProductNo>,
}

impl OrderCreateRequest {
    pub fn new(product_nos: Vec<ProductNo>) -> Self {
        Self { product_nos }
    }
}

/// Line view returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineView {
    pub product_no: ProductNo,
    pub product_type: ProductType,
    pub price: u64,
}

/// Response view of a persisted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: OrderId,
    pub registered_at: DateTime<Utc>,
    pub total_price: u64,
    pub lines: Vec<OrderLineView>,
}

impl OrderResponse {
    pub fn of(order: &Order) -> Self {
        Self {
            id: order.order_id(),
            registered_at: order.registered_at(),
            total_price: order.total_price(),
            lines: order
                .lines()
                .iter()
                .map(|line| OrderLineView {
                    product_no: line.product_no.clone(),
                    product_type: line.product_type,
                    price: line.price,
                })
                .collect(),
        }
    }
}

/// The order assembler.
///
/// Stock deduction is the part with real design tension: concurrent orders
/// for overlapping products must not overdraw a record. The atomicity
/// strategy lives entirely inside the [`StockLedger`] implementation; this
/// service only relies on `deduct_all` being all-or-nothing.
#[derive(Debug)]
pub struct OrderService<C, L, S> {
    catalog: C,
    stock_ledger: L,
    order_store: S,
}

impl<C, L, S> OrderService<C, L, S>
where
    C: ProductCatalog,
    L: StockLedger,
    S: OrderStore,
{
    pub fn new(catalog: C, stock_ledger: L, order_store: S) -> Self {
        Self {
            catalog,
            stock_ledger,
            order_store,
        }
    }

    /// Create an order from the requested product numbers.
    ///
    /// `registered_at` is supplied by the caller and stored verbatim; the
    /// clock is never sampled here. On `InsufficientStock` nothing is
    /// deducted and nothing is persisted.
    pub fn create_order(
        &self,
        request: &OrderCreateRequest,
        registered_at: DateTime<Utc>,
    ) -> DomainResult<OrderResponse> {
        if request.product_nos.is_empty() {
            return Err(DomainError::validation(
                "order request must contain at least one product number",
            ));
        }

        let products = self.resolve_products(&request.product_nos)?;
        if products.is_empty() {
            return Err(DomainError::validation(
                "none of the requested product numbers exist in the catalog",
            ));
        }

        let counts = required_deductions(&products);
        if !counts.is_empty() {
            self.stock_ledger.deduct_all(&counts)?;
        }

        let order = Order::create(&products, registered_at);
        let saved = match self.order_store.save(order) {
            Ok(saved) => saved,
            Err(err) => {
                self.roll_back_deductions(&counts, &err);
                return Err(err);
            }
        };

        tracing::debug!(
            order_id = %saved.order_id(),
            lines = saved.lines().len(),
            total_price = saved.total_price(),
            "order created"
        );
        Ok(OrderResponse::of(&saved))
    }

    /// Resolve the requested numbers in a single batch lookup, then re-expand
    /// them in the original request order so duplicates stay distinct lines.
    ///
    /// Numbers with no catalog match are dropped from the order rather than
    /// failing it; each drop is logged.
    fn resolve_products(&self, product_nos: &[ProductNo]) -> DomainResult<Vec<Product>> {
        let found = self.catalog.find_all_by_product_no_in(product_nos)?;
        let by_no: HashMap<&ProductNo, &Product> =
            found.iter().map(|p| (p.product_no(), p)).collect();

        let mut resolved = Vec::with_capacity(product_nos.len());
        for product_no in product_nos {
            match by_no.get(product_no) {
                Some(product) => resolved.push((*product).clone()),
                None => {
                    tracing::warn!(%product_no, "dropping unresolved product number from order");
                }
            }
        }
        Ok(resolved)
    }

    fn roll_back_deductions(&self, counts: &DeductionCounts, cause: &DomainError) {
        if counts.is_empty() {
            return;
        }
        tracing::warn!(error = %cause, "order persistence failed, restoring deducted stock");
        if let Err(restore_err) = self.stock_ledger.restore_all(counts) {
            tracing::error!(error = %restore_err, "failed to restore deducted stock");
        }
    }
}

/// Required deduction count per distinct stock-managed product.
///
/// Duplicate requests for the same tracked product compound the deduction;
/// untracked types contribute nothing and never reach the ledger.
fn required_deductions(products: &[Product]) -> DeductionCounts {
    let mut counts = DeductionCounts::new();
    for product in products.iter().filter(|p| p.is_stock_managed()) {
        *counts.entry(product.product_no().clone()).or_insert(0) += 1;
    }
    counts
}
