//! Daily order statistics reporting.

use chrono::{Days, NaiveDate, NaiveTime};

use storefront_core::{DomainError, DomainResult};
use storefront_mail::{MailHistoryStore, MailSendClient, MailService};

use crate::order::OrderStatus;
use crate::store::OrderStore;

const STATISTICS_SENDER: &str = "no-reply@storefront.example";

/// Reports a day's completed-payment revenue by mail.
#[derive(Debug)]
pub struct OrderStatisticsService<S, C, H> {
    order_store: S,
    mail_service: MailService<C, H>,
}

impl<S, C, H> OrderStatisticsService<S, C, H>
where
    S: OrderStore,
    C: MailSendClient,
    H: MailHistoryStore,
{
    pub fn new(order_store: S, mail_service: MailService<C, H>) -> Self {
        Self {
            order_store,
            mail_service,
        }
    }

    /// Sum the total price of every payment-completed order registered on
    /// `order_date` and mail the figure to `email`.
    ///
    /// A gateway refusal is an error; the caller decides whether to retry.
    pub fn send_order_statistics_mail(
        &self,
        order_date: NaiveDate,
        email: &str,
    ) -> DomainResult<bool> {
        let start = order_date.and_time(NaiveTime::MIN).and_utc();
        let end = order_date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| DomainError::validation("order date out of range"))?
            .and_time(NaiveTime::MIN)
            .and_utc();

        let orders = self.order_store.find_orders_registered_between(
            start,
            end,
            OrderStatus::PaymentCompleted,
        )?;
        let total_amount: u64 = orders.iter().map(|order| order.total_price()).sum();

        let sent = self.mail_service.send_mail(
            STATISTICS_SENDER,
            email,
            &format!("Order statistics for {order_date}"),
            &format!("Total revenue for the day: {total_amount}"),
        )?;
        if !sent {
            return Err(DomainError::persistence(
                "order statistics mail was refused by the gateway",
            ));
        }

        tracing::info!(%order_date, orders = orders.len(), total_amount, "order statistics mail sent");
        Ok(true)
    }
}
