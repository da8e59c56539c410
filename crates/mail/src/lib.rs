//! Mail notification support.
//!
//! The actual delivery network sits behind [`MailSendClient`] so callers can
//! be tested without touching an external mail system. Every successfully
//! sent mail is recorded as a [`MailSendHistory`] row.

pub mod history;
pub mod service;

pub use history::{MailHistoryStore, MailSendHistory};
pub use service::{MailSendClient, MailService};
