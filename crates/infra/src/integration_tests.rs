//! End-to-end tests of order creation over the in-memory infrastructure.
//!
//! Covers the documented scenarios: mixed tracked/untracked orders with
//! duplicate lines, the all-or-nothing stock guarantee, ledger-free orders
//! for untracked products, and the daily statistics mail.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Utc};

    use storefront_core::{DomainError, ProductNo};
    use storefront_inventory::{Stock, StockLedger};
    use storefront_mail::MailService;
    use storefront_orders::{
        Order, OrderCreateRequest, OrderService, OrderStatisticsService, OrderStatus, OrderStore,
    };
    use storefront_products::{Product, ProductService, ProductStatus, ProductType};

    use crate::memory::{
        InMemoryCatalog, InMemoryMailHistoryStore, InMemoryOrderStore, InMemoryStockLedger,
        StubMailClient,
    };

    fn product_no(s: &str) -> ProductNo {
        ProductNo::new(s).unwrap()
    }

    fn test_time() -> DateTime<Utc> {
        "2024-03-08T10:00:00Z".parse().unwrap()
    }

    /// Catalog: 001 bottle 4000, 002 bakery 4000, 003 handmade 7000.
    /// Stock: 001 → `bottle_stock`, 002 → 2. Handmade has no record.
    fn seed(
        bottle_stock: u32,
    ) -> (
        Arc<InMemoryCatalog>,
        Arc<InMemoryStockLedger>,
        Arc<InMemoryOrderStore>,
        OrderService<Arc<InMemoryCatalog>, Arc<InMemoryStockLedger>, Arc<InMemoryOrderStore>>,
    ) {
        // Idempotent; makes dropped-product warnings visible under RUST_LOG.
        storefront_observability::init();

        let catalog = Arc::new(InMemoryCatalog::new());
        catalog
            .save(Product::new(
                product_no("001"),
                ProductType::Bottle,
                ProductStatus::Selling,
                "Orange juice",
                4000,
            ))
            .unwrap();
        catalog
            .save(Product::new(
                product_no("002"),
                ProductType::Bakery,
                ProductStatus::Hold,
                "Croissant",
                4000,
            ))
            .unwrap();
        catalog
            .save(Product::new(
                product_no("003"),
                ProductType::Handmade,
                ProductStatus::SoldOut,
                "Shaved ice",
                7000,
            ))
            .unwrap();

        let ledger = Arc::new(InMemoryStockLedger::new());
        ledger.put(Stock::new(product_no("001"), bottle_stock)).unwrap();
        ledger.put(Stock::new(product_no("002"), 2)).unwrap();

        let store = Arc::new(InMemoryOrderStore::new());
        let service = OrderService::new(Arc::clone(&catalog), Arc::clone(&ledger), Arc::clone(&store));
        (catalog, ledger, store, service)
    }

    #[test]
    fn mixed_order_deducts_tracked_stock_and_prices_every_line() {
        let (_catalog, ledger, store, service) = seed(2);

        let request = OrderCreateRequest::new(vec![
            product_no("001"),
            product_no("001"),
            product_no("002"),
            product_no("003"),
        ]);
        let response = service.create_order(&request, test_time()).unwrap();

        assert_eq!(response.lines.len(), 4);
        assert_eq!(response.total_price, 19000);
        assert_eq!(response.registered_at, test_time());
        assert_eq!(store.count().unwrap(), 1);

        assert_eq!(ledger.quantity_of(&product_no("001")).unwrap(), Some(0));
        assert_eq!(ledger.quantity_of(&product_no("002")).unwrap(), Some(1));
    }

    #[test]
    fn insufficient_stock_aborts_with_no_partial_effects() {
        // 001 pre-deducted to a single unit; the order needs two.
        let (_catalog, ledger, store, service) = seed(1);

        let request = OrderCreateRequest::new(vec![
            product_no("001"),
            product_no("001"),
            product_no("002"),
            product_no("003"),
        ]);
        let err = service.create_order(&request, test_time()).unwrap_err();

        assert_eq!(err, DomainError::InsufficientStock(product_no("001")));
        assert_eq!(store.count().unwrap(), 0);
        // Nothing moved, including 002 which individually had enough.
        assert_eq!(ledger.quantity_of(&product_no("001")).unwrap(), Some(1));
        assert_eq!(ledger.quantity_of(&product_no("002")).unwrap(), Some(2));
    }

    #[test]
    fn untracked_products_order_without_any_stock_records() {
        let catalog = Arc::new(InMemoryCatalog::new());
        catalog
            .save(Product::new(
                product_no("001"),
                ProductType::Handmade,
                ProductStatus::Selling,
                "Americano",
                4000,
            ))
            .unwrap();
        let ledger = Arc::new(InMemoryStockLedger::new());
        let store = Arc::new(InMemoryOrderStore::new());
        let service = OrderService::new(catalog, Arc::clone(&ledger), store);

        let request = OrderCreateRequest::new(vec![product_no("001"), product_no("001")]);
        let response = service.create_order(&request, test_time()).unwrap();

        assert_eq!(response.lines.len(), 2);
        assert_eq!(response.total_price, 8000);
        assert_eq!(ledger.quantity_of(&product_no("001")).unwrap(), None);
    }

    #[test]
    fn selling_product_listing_over_the_same_catalog() {
        let (catalog, _ledger, _store, _service) = seed(2);
        let products = ProductService::new(catalog);

        let listed = products.selling_products().unwrap();

        // 003 is sold out and stays off the listing.
        let nos: Vec<&str> = listed.iter().map(|p| p.product_no().as_str()).collect();
        assert_eq!(nos, vec!["001", "002"]);
    }

    #[test]
    fn statistics_mail_reports_the_days_revenue_and_records_history() {
        let store = Arc::new(InMemoryOrderStore::new());
        let paid = |price: u64, at: &str| {
            let product = Product::new(
                product_no("001"),
                ProductType::Handmade,
                ProductStatus::Selling,
                "Americano",
                price,
            );
            Order::new(
                std::slice::from_ref(&product),
                OrderStatus::PaymentCompleted,
                at.parse().unwrap(),
            )
        };
        store.save(paid(12000, "2024-03-08T03:00:00Z")).unwrap();
        store.save(paid(7000, "2024-03-08T20:00:00Z")).unwrap();
        store.save(paid(9999, "2024-03-09T00:00:00Z")).unwrap();

        let client = Arc::new(StubMailClient::accepting());
        let history = Arc::new(InMemoryMailHistoryStore::new());
        let service = OrderStatisticsService::new(
            store,
            MailService::new(Arc::clone(&client), Arc::clone(&history)),
        );

        let sent = service
            .send_order_statistics_mail("2024-03-08".parse().unwrap(), "ops@example.com")
            .unwrap();

        assert!(sent);
        assert_eq!(client.sent_count(), 1);
        let rows = history.rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].to_email(), "ops@example.com");
        assert_eq!(rows[0].content(), "Total revenue for the day: 19000");
    }

    #[test]
    fn statistics_mail_refusal_records_no_history() {
        let store = Arc::new(InMemoryOrderStore::new());
        let client = Arc::new(StubMailClient::refusing());
        let history = Arc::new(InMemoryMailHistoryStore::new());
        let service = OrderStatisticsService::new(
            store,
            MailService::new(client, Arc::clone(&history)),
        );

        let err = service
            .send_order_statistics_mail("2024-03-08".parse().unwrap(), "ops@example.com")
            .unwrap_err();

        assert!(matches!(err, DomainError::Persistence(_)));
        assert!(history.rows().unwrap().is_empty());
    }
}
