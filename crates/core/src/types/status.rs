//! Order status enum for the sample store.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of an order.
///
/// Stored in the sample database as its display text (e.g. "Shipped"), which
/// is also how the schema descriptor advertises it to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Completed,
    Cancelled,
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct StatusParseError(String);

impl OrderStatus {
    /// All statuses, in the order they appear in the schema descriptor.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Shipped, Self::Completed, Self::Cancelled];

    /// The database/display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Shipped" => Ok(Self::Shipped),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}
