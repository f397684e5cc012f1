//! Query execution against a provisioned dataset.
//!
//! The statement is model-generated, so nothing about its shape is known at
//! compile time: execution goes through sqlx's dynamic row API and decodes
//! each cell by its SQLite value type. The connection is consumed and closed
//! on every path, success or failure.

use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Connection, Row, SqliteConnection, TypeInfo, ValueRef};
use thiserror::Error;
use tracing::instrument;

/// Errors that can occur while executing a generated statement.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The statement failed against the dataset (syntax, type, constraint,
    /// unresolved reference). Carries the underlying SQLite message.
    #[error("{0}")]
    Query(String),

    /// A result cell could not be decoded.
    #[error("row decode failed: {0}")]
    Decode(String),
}

/// Column names and stringified rows of a query result.
///
/// `None` cells are SQL NULLs; the formatter renders them as the literal
/// `NULL`. This is display-oriented output, not a data contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Execute `sql` against the provisioned dataset and collect all rows.
///
/// Takes the connection by value: it is closed before this function returns,
/// regardless of outcome, so the ephemeral dataset never outlives its
/// request.
///
/// # Errors
///
/// Returns [`ExecError::Query`] when the statement itself fails and
/// [`ExecError::Decode`] when a result value cannot be read.
#[instrument(skip(conn, sql))]
pub async fn execute(conn: SqliteConnection, sql: &str) -> Result<QueryOutput, ExecError> {
    let mut conn = conn;
    let fetched = sqlx::query(sql).fetch_all(&mut conn).await;

    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close dataset connection");
    }

    let rows = fetched.map_err(|e| ExecError::Query(e.to_string()))?;

    let columns = rows.first().map_or_else(Vec::new, |row| {
        row.columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect()
    });

    let mut decoded = Vec::with_capacity(rows.len());
    for row in &rows {
        let mut cells = Vec::with_capacity(row.columns().len());
        for index in 0..row.columns().len() {
            cells.push(decode_cell(row, index)?);
        }
        decoded.push(cells);
    }

    tracing::debug!(rows = decoded.len(), columns = columns.len(), "query executed");

    Ok(QueryOutput {
        columns,
        rows: decoded,
    })
}

/// Decode one cell by its SQLite value type.
fn decode_cell(row: &SqliteRow, index: usize) -> Result<Option<String>, ExecError> {
    let (is_null, type_name) = {
        let raw = row
            .try_get_raw(index)
            .map_err(|e| ExecError::Decode(e.to_string()))?;
        (raw.is_null(), raw.type_info().name().to_string())
    };

    if is_null {
        return Ok(None);
    }

    let rendered = match type_name.as_str() {
        "INTEGER" | "BOOLEAN" => row
            .try_get::<i64, _>(index)
            .map(|value| value.to_string()),
        "REAL" => row.try_get::<f64, _>(index).map(|value| value.to_string()),
        "BLOB" => row
            .try_get::<Vec<u8>, _>(index)
            .map(|bytes| format!("<blob {} bytes>", bytes.len())),
        _ => row.try_get::<String, _>(index),
    }
    .map_err(|e| ExecError::Decode(e.to_string()))?;

    Ok(Some(rendered))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dataset::provision;
    use crate::schema::DatasetVariant;

    #[tokio::test]
    async fn test_select_all_customers() {
        let conn = provision(DatasetVariant::Relational).await.unwrap();
        let output = execute(conn, "SELECT * FROM customers ORDER BY customer_id")
            .await
            .unwrap();

        assert_eq!(
            output.columns,
            ["customer_id", "customer_name", "email", "signup_date", "city", "state"]
        );
        assert_eq!(output.rows.len(), 5);
        let first = &output.rows[0];
        assert_eq!(first[0].as_deref(), Some("1"));
        assert_eq!(first[1].as_deref(), Some("John Smith"));
        assert_eq!(first[3].as_deref(), Some("2024-01-15"));
    }

    #[tokio::test]
    async fn test_null_cells_decode_to_none() {
        let conn = provision(DatasetVariant::Relational).await.unwrap();
        let output = execute(conn, "SELECT city FROM customers WHERE customer_id = 3")
            .await
            .unwrap();
        assert_eq!(output.rows, vec![vec![None]]);
    }

    #[tokio::test]
    async fn test_aggregate_returns_real() {
        let conn = provision(DatasetVariant::Relational).await.unwrap();
        let output = execute(conn, "SELECT SUM(total_amount) FROM orders")
            .await
            .unwrap();
        let cell = output.rows[0][0].as_deref().unwrap();
        let value: f64 = cell.parse().unwrap();
        assert!((value - 6209.84).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_bad_statement_is_query_error() {
        let conn = provision(DatasetVariant::Relational).await.unwrap();
        let result = execute(conn, "SELECT no_such_column FROM customers").await;
        match result {
            Err(ExecError::Query(message)) => {
                assert!(message.contains("no_such_column"), "message: {message}");
            }
            other => panic!("expected query error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_statement_yields_nothing() {
        // A fence-only completion sanitizes to "". Not specially detected;
        // it simply cannot produce rows.
        let conn = provision(DatasetVariant::Relational).await.unwrap();
        match execute(conn, "").await {
            Err(ExecError::Query(_)) => {}
            Ok(output) => assert!(output.rows.is_empty()),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_result_has_no_columns() {
        let conn = provision(DatasetVariant::Relational).await.unwrap();
        let output = execute(conn, "SELECT * FROM customers WHERE customer_id = 99")
            .await
            .unwrap();
        assert!(output.columns.is_empty());
        assert!(output.rows.is_empty());
    }
}
