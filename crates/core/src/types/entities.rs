//! Entity structs for the sample store's seed data.
//!
//! These are plain value types: the engine's dataset provisioner turns them
//! into rows, and tests use them to verify what was provisioned. They carry
//! no database coupling.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::ProductCategory;
use super::id::{CustomerId, OrderId, OrderItemId, ProductId};
use super::status::OrderStatus;

/// A customer of the sample store.
///
/// `city` and `state` are optional; seed data leaves them unset for some
/// customers so NULL handling is exercised end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Unique across customers.
    pub email: String,
    pub signup_date: NaiveDate,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// A product in the sample store's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    /// Current list price, non-negative.
    pub price: Decimal,
    /// Units on hand, non-negative.
    pub stock_quantity: i64,
}

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub order_date: NaiveDate,
    /// Derived: equals the sum of `quantity * unit_price` over the order's
    /// line items. The provisioner recomputes it after seeding; any later
    /// mutation must recompute again.
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

/// A line item within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    /// Positive.
    pub quantity: i64,
    /// Price at time of purchase; may differ from the product's current
    /// price.
    pub unit_price: Decimal,
}

impl OrderItem {
    /// Line total for this item.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = OrderItem {
            id: OrderItemId::new(1),
            order_id: OrderId::new(1),
            product_id: ProductId::new(3),
            quantity: 2,
            unit_price: Decimal::new(24999, 2),
        };
        assert_eq!(item.line_total(), Decimal::new(49998, 2));
    }
}
