use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use storefront_core::{DomainError, DomainResult};
use storefront_mail::{MailHistoryStore, MailSendClient, MailSendHistory};

/// In-memory mail history store.
#[derive(Debug, Default)]
pub struct InMemoryMailHistoryStore {
    rows: RwLock<Vec<MailSendHistory>>,
}

impl InMemoryMailHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> DomainResult<Vec<MailSendHistory>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| DomainError::persistence("mail history lock poisoned"))?;
        Ok(rows.clone())
    }
}

impl MailHistoryStore for InMemoryMailHistoryStore {
    fn save(&self, history: MailSendHistory) -> DomainResult<MailSendHistory> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| DomainError::persistence("mail history lock poisoned"))?;
        rows.push(history.clone());
        Ok(history)
    }
}

/// Gateway stand-in that accepts (or refuses) everything and counts sends.
///
/// The real gateway sits on an external network; tests run against this.
#[derive(Debug)]
pub struct StubMailClient {
    accept: bool,
    sent: AtomicUsize,
}

impl StubMailClient {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            sent: AtomicUsize::new(0),
        }
    }

    pub fn refusing() -> Self {
        Self {
            accept: false,
            sent: AtomicUsize::new(0),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

impl MailSendClient for StubMailClient {
    fn send(&self, _from_email: &str, _to_email: &str, _subject: &str, _content: &str) -> bool {
        self.sent.fetch_add(1, Ordering::SeqCst);
        self.accept
    }
}
