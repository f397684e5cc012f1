//! Product category enum for the sample store.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Electronics,
    Furniture,
}

/// Error returned when parsing an unknown category string.
#[derive(Debug, Error)]
#[error("unknown product category: {0}")]
pub struct CategoryParseError(String);

impl ProductCategory {
    /// All categories, in the order they appear in the schema descriptor.
    pub const ALL: [Self; 2] = [Self::Electronics, Self::Furniture];

    /// The database/display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Furniture => "Furniture",
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Electronics" => Ok(Self::Electronics),
            "Furniture" => Ok(Self::Furniture),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in ProductCategory::ALL {
            let parsed: ProductCategory = category.as_str().parse().expect("parse");
            assert_eq!(parsed, category);
        }
    }
}
