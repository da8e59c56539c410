use std::sync::RwLock;

use chrono::{DateTime, Utc};

use storefront_core::{DomainError, DomainResult};
use storefront_orders::{Order, OrderStatus, OrderStore};

/// In-memory order store (append-only).
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> DomainResult<usize> {
        let orders = self
            .orders
            .read()
            .map_err(|_| DomainError::persistence("order store lock poisoned"))?;
        Ok(orders.len())
    }
}

impl OrderStore for InMemoryOrderStore {
    fn save(&self, order: Order) -> DomainResult<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| DomainError::persistence("order store lock poisoned"))?;
        orders.push(order.clone());
        Ok(order)
    }

    fn find_orders_registered_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        status: OrderStatus,
    ) -> DomainResult<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|_| DomainError::persistence("order store lock poisoned"))?;
        Ok(orders
            .iter()
            .filter(|o| {
                o.status() == status && o.registered_at() >= start && o.registered_at() < end
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductNo;
    use storefront_products::{Product, ProductStatus, ProductType};

    fn order(status: OrderStatus, registered_at: &str) -> Order {
        let product = Product::new(
            ProductNo::first(),
            ProductType::Handmade,
            ProductStatus::Selling,
            "Americano",
            4000,
        );
        Order::new(std::slice::from_ref(&product), status, registered_at.parse().unwrap())
    }

    #[test]
    fn save_returns_the_persisted_order() {
        let store = InMemoryOrderStore::new();
        let order = order(OrderStatus::Init, "2024-03-08T10:00:00Z");

        let saved = store.save(order.clone()).unwrap();

        assert_eq!(saved, order);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn interval_is_half_open_and_status_filtered() {
        let store = InMemoryOrderStore::new();
        store
            .save(order(OrderStatus::PaymentCompleted, "2024-03-08T00:00:00Z"))
            .unwrap();
        store
            .save(order(OrderStatus::PaymentCompleted, "2024-03-09T00:00:00Z"))
            .unwrap();
        store
            .save(order(OrderStatus::Init, "2024-03-08T12:00:00Z"))
            .unwrap();

        let found = store
            .find_orders_registered_between(
                "2024-03-08T00:00:00Z".parse().unwrap(),
                "2024-03-09T00:00:00Z".parse().unwrap(),
                OrderStatus::PaymentCompleted,
            )
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].registered_at(),
            "2024-03-08T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }
}
