//! Deterministic seed data for the sample store.
//!
//! The same rows are produced on every call, so two provisioning passes
//! yield identical datasets. Line items are chosen so each order's
//! `quantity * unit_price` sum equals its seeded total; the recompute pass
//! in the provisioner is therefore a no-op until someone mutates the data.
//!
//! For reference, summed order totals per customer: Emily Davis 2999.96,
//! John Smith 1759.96, Mike Brown 609.96, David Wilson 499.98,
//! Sarah Johnson 339.98. Tests rely on Emily Davis being the top spender.

use askdb_core::{
    Customer, CustomerId, Order, OrderId, OrderItem, OrderItemId, OrderStatus, Product, ProductId,
};
use askdb_core::ProductCategory::{Electronics, Furniture};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Two-decimal amount from cents.
fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn customer(
    id: i64,
    name: &str,
    email: &str,
    signup: NaiveDate,
    location: Option<(&str, &str)>,
) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        signup_date: signup,
        city: location.map(|(city, _)| city.to_string()),
        state: location.map(|(_, state)| state.to_string()),
    }
}

/// The five seed customers. Two have no recorded city/state, which keeps
/// NULL rendering exercised end to end.
#[must_use]
pub fn customers() -> Vec<Customer> {
    vec![
        customer(1, "John Smith", "john@email.com", date(2024, 1, 15), Some(("Austin", "TX"))),
        customer(2, "Sarah Johnson", "sarah@email.com", date(2024, 2, 20), Some(("Portland", "OR"))),
        customer(3, "Mike Brown", "mike@email.com", date(2023, 11, 10), None),
        customer(4, "Emily Davis", "emily@email.com", date(2024, 3, 5), Some(("Denver", "CO"))),
        customer(5, "David Wilson", "david@email.com", date(2023, 12, 1), None),
    ]
}

fn product(
    id: i64,
    name: &str,
    category: askdb_core::ProductCategory,
    price: Decimal,
    stock: i64,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category,
        price,
        stock_quantity: stock,
    }
}

/// The eight seed products.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(1, "Laptop Pro", Electronics, cents(1_299_99), 12),
        product(2, "Wireless Mouse", Electronics, cents(29_99), 140),
        product(3, "Office Chair", Furniture, cents(249_99), 35),
        product(4, "Desk Lamp", Furniture, cents(49_99), 80),
        product(5, "USB Cable", Electronics, cents(9_99), 300),
        product(6, "Monitor 27\"", Electronics, cents(399_99), 24),
        product(7, "Keyboard Mechanical", Electronics, cents(89_99), 60),
        product(8, "Standing Desk", Furniture, cents(499_99), 9),
    ]
}

fn order(
    id: i64,
    customer_id: i64,
    order_date: NaiveDate,
    total: Decimal,
    status: OrderStatus,
) -> Order {
    Order {
        id: OrderId::new(id),
        customer_id: CustomerId::new(customer_id),
        order_date,
        total_amount: total,
        status,
    }
}

/// The ten seed orders.
#[must_use]
pub fn orders() -> Vec<Order> {
    use OrderStatus::{Cancelled, Completed, Pending, Shipped};
    vec![
        order(1, 1, date(2024, 1, 20), cents(1_329_98), Completed),
        order(2, 2, date(2024, 2, 25), cents(249_99), Completed),
        order(3, 1, date(2024, 3, 10), cents(399_99), Completed),
        order(4, 3, date(2024, 3, 15), cents(559_97), Pending),
        order(5, 4, date(2024, 3, 20), cents(1_299_99), Completed),
        order(6, 2, date(2024, 4, 1), cents(89_99), Shipped),
        order(7, 5, date(2024, 4, 5), cents(499_98), Completed),
        order(8, 1, date(2024, 4, 10), cents(29_99), Cancelled),
        order(9, 3, date(2024, 4, 12), cents(49_99), Completed),
        order(10, 4, date(2024, 4, 15), cents(1_699_97), Shipped),
    ]
}

fn item(id: i64, order_id: i64, product_id: i64, quantity: i64, unit_price: Decimal) -> OrderItem {
    OrderItem {
        id: OrderItemId::new(id),
        order_id: OrderId::new(order_id),
        product_id: ProductId::new(product_id),
        quantity,
        unit_price,
    }
}

/// The fifteen seed line items.
///
/// Unit prices are the price at time of purchase: order 10 bought the laptop
/// and keyboard below their current list price.
#[must_use]
pub fn order_items() -> Vec<OrderItem> {
    vec![
        item(1, 1, 1, 1, cents(1_299_99)),
        item(2, 1, 2, 1, cents(29_99)),
        item(3, 2, 3, 1, cents(249_99)),
        item(4, 3, 6, 1, cents(399_99)),
        item(5, 4, 8, 1, cents(499_99)),
        item(6, 4, 4, 1, cents(49_99)),
        item(7, 4, 5, 1, cents(9_99)),
        item(8, 5, 1, 1, cents(1_299_99)),
        item(9, 6, 7, 1, cents(89_99)),
        item(10, 7, 3, 2, cents(249_99)),
        item(11, 8, 2, 1, cents(29_99)),
        item(12, 9, 4, 1, cents(49_99)),
        item(13, 10, 1, 1, cents(1_249_99)),
        item(14, 10, 6, 1, cents(399_99)),
        item(15, 10, 7, 1, cents(49_99)),
    ]
}
