//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Stable external product key: a zero-padded decimal sequence (`001`, `002`, ...).
///
/// Product numbers are allocated sequentially at catalog provisioning time and
/// never change afterwards. Stock records and order lines refer to products by
/// this key, not by any internal identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductNo(String);

impl ProductNo {
    /// Minimum printed width of the sequence (`001`, not `1`).
    const MIN_WIDTH: usize = 3;

    /// Parse and validate a product number (non-empty, decimal digits only).
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::invalid_id("product number cannot be empty"));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!(
                "product number must be decimal digits, got '{value}'"
            )));
        }
        Ok(Self(value))
    }

    /// First number in the sequence.
    pub fn first() -> Self {
        Self(format!("{:0width$}", 1, width = Self::MIN_WIDTH))
    }

    /// Next number in the sequence, re-padded to at least three digits.
    pub fn next(&self) -> Result<Self, DomainError> {
        let current: u64 = self
            .0
            .parse()
            .map_err(|_| DomainError::invariant(format!("product number '{}' out of range", self.0)))?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| DomainError::invariant("product number sequence exhausted"))?;
        Ok(Self(format!("{next:0width$}", width = Self::MIN_WIDTH)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl crate::value_object::ValueObject for ProductNo {}

impl core::fmt::Display for ProductNo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductNo {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier of a persisted order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

/// Identifier of a recorded mail send.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MailHistoryId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(OrderId, "OrderId");
impl_uuid_newtype!(MailHistoryId, "MailHistoryId");
