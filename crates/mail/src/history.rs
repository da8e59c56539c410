use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, Entity, MailHistoryId};

/// Record of a mail that was handed to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailSendHistory {
    id: MailHistoryId,
    from_email: String,
    to_email: String,
    subject: String,
    content: String,
}

impl MailSendHistory {
    pub fn new(
        from_email: impl Into<String>,
        to_email: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: MailHistoryId::new(),
            from_email: from_email.into(),
            to_email: to_email.into(),
            subject: subject.into(),
            content: content.into(),
        }
    }

    pub fn from_email(&self) -> &str {
        &self.from_email
    }

    pub fn to_email(&self) -> &str {
        &self.to_email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Entity for MailSendHistory {
    type Id = MailHistoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Persistence seam for mail history rows.
pub trait MailHistoryStore: Send + Sync {
    /// Persist a history row, returning the persisted form.
    fn save(&self, history: MailSendHistory) -> DomainResult<MailSendHistory>;
}

impl<T> MailHistoryStore for std::sync::Arc<T>
where
    T: MailHistoryStore + ?Sized,
{
    fn save(&self, history: MailSendHistory) -> DomainResult<MailSendHistory> {
        (**self).save(history)
    }
}
