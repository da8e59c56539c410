//! Order persistence seam.

use chrono::{DateTime, Utc};

use storefront_core::DomainResult;

use crate::order::{Order, OrderStatus};

/// Persistence for order records.
///
/// Orders are written exactly once and only ever read back. Implementations
/// that share a transaction with the stock ledger get rollback for free; with
/// independent stores the order service compensates explicitly.
pub trait OrderStore: Send + Sync {
    /// Persist an order, returning the persisted form.
    fn save(&self, order: Order) -> DomainResult<Order>;

    /// Orders in the half-open interval `[start, end)` of `registered_at`,
    /// filtered by status.
    fn find_orders_registered_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        status: OrderStatus,
    ) -> DomainResult<Vec<Order>>;
}

impl<T> OrderStore for std::sync::Arc<T>
where
    T: OrderStore + ?Sized,
{
    fn save(&self, order: Order) -> DomainResult<Order> {
        (**self).save(order)
    }

    fn find_orders_registered_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        status: OrderStatus,
    ) -> DomainResult<Vec<Order>> {
        (**self).find_orders_registered_between(start, end, status)
    }
}
