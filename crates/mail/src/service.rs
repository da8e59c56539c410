//! Mail sending with history recording.

use storefront_core::DomainResult;

use crate::history::{MailHistoryStore, MailSendHistory};

/// Delivery gateway for outbound mail.
///
/// Returns whether the gateway accepted the mail. Implementations talk to an
/// external network; tests substitute a recording fake.
pub trait MailSendClient: Send + Sync {
    fn send(&self, from_email: &str, to_email: &str, subject: &str, content: &str) -> bool;
}

impl<T> MailSendClient for std::sync::Arc<T>
where
    T: MailSendClient + ?Sized,
{
    fn send(&self, from_email: &str, to_email: &str, subject: &str, content: &str) -> bool {
        (**self).send(from_email, to_email, subject, content)
    }
}

/// Sends mail through a [`MailSendClient`] and records accepted sends.
#[derive(Debug)]
pub struct MailService<C, H> {
    client: C,
    history_store: H,
}

impl<C, H> MailService<C, H>
where
    C: MailSendClient,
    H: MailHistoryStore,
{
    pub fn new(client: C, history_store: H) -> Self {
        Self {
            client,
            history_store,
        }
    }

    /// Hand a mail to the gateway; on acceptance, record a history row.
    ///
    /// Returns whether the gateway accepted the mail. A refusal records
    /// nothing.
    pub fn send_mail(
        &self,
        from_email: &str,
        to_email: &str,
        subject: &str,
        content: &str,
    ) -> DomainResult<bool> {
        if !self.client.send(from_email, to_email, subject, content) {
            tracing::warn!(to_email, subject, "mail gateway refused the mail");
            return Ok(false);
        }

        self.history_store
            .save(MailSendHistory::new(from_email, to_email, subject, content))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use super::*;

    struct FakeClient {
        accept: AtomicBool,
        sent: AtomicUsize,
    }

    impl FakeClient {
        fn accepting(accept: bool) -> Self {
            Self {
                accept: AtomicBool::new(accept),
                sent: AtomicUsize::new(0),
            }
        }
    }

    impl MailSendClient for &FakeClient {
        fn send(&self, _from: &str, _to: &str, _subject: &str, _content: &str) -> bool {
            self.sent.fetch_add(1, Ordering::SeqCst);
            self.accept.load(Ordering::SeqCst)
        }
    }

    #[derive(Default)]
    struct RecordingHistoryStore {
        rows: Mutex<Vec<MailSendHistory>>,
    }

    impl MailHistoryStore for &RecordingHistoryStore {
        fn save(&self, history: MailSendHistory) -> DomainResult<MailSendHistory> {
            self.rows.lock().unwrap().push(history.clone());
            Ok(history)
        }
    }

    #[test]
    fn accepted_mail_is_recorded() {
        let client = FakeClient::accepting(true);
        let store = RecordingHistoryStore::default();
        let service = MailService::new(&client, &store);

        let sent = service
            .send_mail("no-reply@storefront.example", "ops@example.com", "hello", "body")
            .unwrap();

        assert!(sent);
        assert_eq!(client.sent.load(Ordering::SeqCst), 1);
        let rows = store.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].to_email(), "ops@example.com");
        assert_eq!(rows[0].subject(), "hello");
    }

    #[test]
    fn refused_mail_records_nothing() {
        let client = FakeClient::accepting(false);
        let store = RecordingHistoryStore::default();
        let service = MailService::new(&client, &store);

        let sent = service
            .send_mail("no-reply@storefront.example", "ops@example.com", "hello", "body")
            .unwrap();

        assert!(!sent);
        assert!(store.rows.lock().unwrap().is_empty());
    }
}
