use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product identifier (SKU).
///
/// Products are keyed by caller-chosen SKUs such as `lamp-001`, so this is a
/// thin string wrapper rather than a generated id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the ID is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

const ORDER_ID_PREFIX: &str = "ORD-";

/// Sequential order identifier, rendered as `ORD-0001`.
///
/// Ordering follows the numeric sequence, so `ORD-10000` sorts after
/// `ORD-9999` even though the rendered strings do not. The default (sequence
/// 0) marks "no order yet"; the first issued id is `ORD-0001`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct OrderId(u64);

impl OrderId {
    /// Creates an order ID from its sequence number.
    pub fn from_sequence(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Returns the sequence number.
    pub fn sequence(&self) -> u64 {
        self.0
    }

    /// Returns the ID that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{ORDER_ID_PREFIX}{:04}", self.0)
    }
}

/// Error returned when a string is not a valid `ORD-NNNN` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid order id: {0:?}")]
pub struct ParseOrderIdError(pub String);

impl FromStr for OrderId {
    type Err = ParseOrderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(ORDER_ID_PREFIX)
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| ParseOrderIdError(s.to_string()))?;

        digits
            .parse()
            .map(Self)
            .map_err(|_| ParseOrderIdError(s.to_string()))
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for OrderId {
    type Error = ParseOrderIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
