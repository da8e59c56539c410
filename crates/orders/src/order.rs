use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{Entity, OrderId, ProductNo};
use storefront_products::{Product, ProductType};

/// Order lifecycle status.
///
/// Orders are created as [`OrderStatus::Init`]; the payment flow that moves
/// them forward is outside this core, which only ever reads statuses back
/// (e.g. for revenue statistics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Init,
    Canceled,
    PaymentCompleted,
    PaymentFailed,
    Received,
    Completed,
}

/// One line of an order: a snapshot of the resolved product.
///
/// Duplicated request numbers produce duplicated lines; each occurrence is a
/// distinct demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_no: ProductNo,
    pub product_type: ProductType,
    /// Unit price at order time, in the smallest currency unit.
    pub price: u64,
}

impl From<&Product> for OrderLine {
    fn from(product: &Product) -> Self {
        Self {
            product_no: product.product_no().clone(),
            product_type: product.product_type(),
            price: product.price(),
        }
    }
}

impl storefront_core::ValueObject for OrderLine {}

/// Immutable snapshot of what was ordered.
///
/// `registered_at` is stored verbatim from the caller; the wall clock is
/// never sampled here, so order creation is deterministic and testable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    status: OrderStatus,
    registered_at: DateTime<Utc>,
    lines: Vec<OrderLine>,
    /// Sum of each line's unit price, duplicates counted individually.
    total_price: u64,
}

impl Order {
    /// Build an order in a given status from resolved products.
    pub fn new(products: &[Product], status: OrderStatus, registered_at: DateTime<Utc>) -> Self {
        let lines: Vec<OrderLine> = products.iter().map(OrderLine::from).collect();
        let total_price = lines.iter().map(|line| line.price).sum();
        Self {
            id: OrderId::new(),
            status,
            registered_at,
            lines,
            total_price,
        }
    }

    /// Build a freshly created order ([`OrderStatus::Init`]).
    pub fn create(products: &[Product], registered_at: DateTime<Utc>) -> Self {
        Self::new(products, OrderStatus::Init, registered_at)
    }

    pub fn order_id(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
