//! Ephemeral sample database provisioning.
//!
//! Every request gets a private in-memory SQLite instance, fully rebuilt
//! from the same deterministic seed: schema first, then parents, then
//! children, then the derived-total recompute. Nothing survives the
//! connection, so concurrent requests cannot interfere and a hostile
//! statement can at worst vandalize its own copy.
//!
//! The caller owns the returned connection and must `close()` it when done,
//! whether or not execution succeeded.

pub mod seed;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::{Connection, SqliteConnection};
use thiserror::Error;
use tracing::instrument;

use crate::schema::{DERIVED_TOTAL_FORMULA, DatasetVariant};

/// Errors that can occur while provisioning the sample dataset.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Seed amounts are two-decimal values; SQLite stores them as REAL.
fn money(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Provision a fresh, fully populated sample database.
///
/// Referential integrity is enabled before any rows are inserted, and the
/// derived order totals are recomputed after all line items are in place.
///
/// # Errors
///
/// Returns [`ProvisionError`] if the in-memory instance cannot be created or
/// seeded. On failure the connection is released before returning.
#[instrument]
pub async fn provision(variant: DatasetVariant) -> Result<SqliteConnection, ProvisionError> {
    let mut conn = SqliteConnection::connect("sqlite::memory:").await?;

    match populate(&mut conn, variant).await {
        Ok(()) => Ok(conn),
        Err(e) => {
            // Release the handle on the failure path as well.
            if let Err(close_err) = conn.close().await {
                tracing::warn!(error = %close_err, "failed to close dataset after seed error");
            }
            Err(e)
        }
    }
}

async fn populate(
    conn: &mut SqliteConnection,
    variant: DatasetVariant,
) -> Result<(), ProvisionError> {
    // Must precede any insert that references another table.
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&mut *conn)
        .await?;

    for table in variant.tables() {
        sqlx::query(&table.create_sql()).execute(&mut *conn).await?;
    }

    match variant {
        DatasetVariant::Flat => {
            insert_flat_customers(conn).await?;
            insert_flat_products(conn).await?;
            insert_orders(conn).await?;
        }
        DatasetVariant::Relational => {
            insert_customers(conn).await?;
            insert_products(conn).await?;
            insert_orders(conn).await?;
            insert_order_items(conn).await?;
            recompute_totals(conn).await?;
        }
    }

    Ok(())
}

/// Recompute every order's `total_amount` from its line items.
///
/// The total is derived, not authoritative: any mutation of `order_items`
/// must be followed by this pass.
///
/// # Errors
///
/// Returns [`ProvisionError`] if the update fails.
pub async fn recompute_totals(conn: &mut SqliteConnection) -> Result<(), ProvisionError> {
    // Amounts are two-decimal money; rounding keeps float summation from
    // leaking artifacts into the stored totals.
    let sql = format!(
        "UPDATE orders SET total_amount = ROUND(COALESCE((SELECT {DERIVED_TOTAL_FORMULA} \
         FROM order_items WHERE order_items.order_id = orders.order_id), 0), 2)"
    );
    sqlx::query(&sql).execute(conn).await?;
    Ok(())
}

async fn insert_customers(conn: &mut SqliteConnection) -> Result<(), ProvisionError> {
    for customer in seed::customers() {
        sqlx::query(
            "INSERT INTO customers (customer_id, customer_name, email, signup_date, city, state) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(customer.id.as_i64())
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(customer.signup_date)
        .bind(customer.city.as_deref())
        .bind(customer.state.as_deref())
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn insert_flat_customers(conn: &mut SqliteConnection) -> Result<(), ProvisionError> {
    for customer in seed::customers() {
        sqlx::query(
            "INSERT INTO customers (customer_id, customer_name, email, signup_date) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(customer.id.as_i64())
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(customer.signup_date)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn insert_products(conn: &mut SqliteConnection) -> Result<(), ProvisionError> {
    for product in seed::products() {
        sqlx::query(
            "INSERT INTO products (product_id, product_name, category, price, stock_quantity) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(product.id.as_i64())
        .bind(&product.name)
        .bind(product.category.as_str())
        .bind(money(product.price))
        .bind(product.stock_quantity)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn insert_flat_products(conn: &mut SqliteConnection) -> Result<(), ProvisionError> {
    for product in seed::products() {
        sqlx::query(
            "INSERT INTO products (product_id, product_name, category, price) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(product.id.as_i64())
        .bind(&product.name)
        .bind(product.category.as_str())
        .bind(money(product.price))
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn insert_orders(conn: &mut SqliteConnection) -> Result<(), ProvisionError> {
    for order in seed::orders() {
        sqlx::query(
            "INSERT INTO orders (order_id, customer_id, order_date, total_amount, status) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(order.id.as_i64())
        .bind(order.customer_id.as_i64())
        .bind(order.order_date)
        .bind(money(order.total_amount))
        .bind(order.status.as_str())
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn insert_order_items(conn: &mut SqliteConnection) -> Result<(), ProvisionError> {
    for item in seed::order_items() {
        sqlx::query(
            "INSERT INTO order_items (order_item_id, order_id, product_id, quantity, unit_price) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(item.id.as_i64())
        .bind(item.order_id.as_i64())
        .bind(item.product_id.as_i64())
        .bind(item.quantity)
        .bind(money(item.unit_price))
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
