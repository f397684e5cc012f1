//! End-to-end pipeline tests.
//!
//! Each test scripts the completion (no network, no credentials) and runs
//! the real pipeline: sanitization, provisioning, execution, formatting.

use askdb_engine::pipeline::{self, Answer};
use askdb_engine::schema::DatasetVariant;
use askdb_integration_tests::ScriptedCompletion;

async fn ask(completion: &str, variant: DatasetVariant, question: &str) -> Answer {
    let client = ScriptedCompletion::text(completion);
    pipeline::run(&client, variant, question).await
}

// ============================================================================
// Scenario: flat dataset
// ============================================================================

#[tokio::test]
async fn test_show_all_customers_flat() {
    let answer = ask(
        "```sql\nSELECT * FROM customers\n```",
        DatasetVariant::Flat,
        "Show all customers",
    )
    .await;

    assert_eq!(answer.query, "SELECT * FROM customers");

    let lines: Vec<&str> = answer.result.lines().collect();
    assert_eq!(lines[0], "customer_id | customer_name | email | signup_date");
    // header + rule + 5 data rows + summary
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[2], "1 | John Smith | john@email.com | 2024-01-15");
    assert_eq!(lines[7], "(5 rows total)");
}

#[tokio::test]
async fn test_pending_orders_flat() {
    let answer = ask(
        "SELECT order_id, status FROM orders WHERE status = 'Pending' ORDER BY order_id",
        DatasetVariant::Flat,
        "Show pending orders",
    )
    .await;

    let lines: Vec<&str> = answer.result.lines().collect();
    assert_eq!(lines[0], "order_id | status");
    assert_eq!(lines[2], "4 | Pending");
    assert_eq!(lines[3], "(1 row total)");
}

// ============================================================================
// Scenario: relational dataset
// ============================================================================

#[tokio::test]
async fn test_top_spender_is_named_not_numbered() {
    let answer = ask(
        "SELECT c.customer_name, SUM(o.total_amount) AS total_spent \
         FROM customers c \
         JOIN orders o ON o.customer_id = c.customer_id \
         GROUP BY c.customer_id \
         ORDER BY total_spent DESC \
         LIMIT 1",
        DatasetVariant::Relational,
        "Which customer has spent the most money?",
    )
    .await;

    let lines: Vec<&str> = answer.result.lines().collect();
    assert_eq!(lines[0], "customer_name | total_spent");
    assert_eq!(lines.len(), 4, "exactly one data row expected");

    let cells: Vec<&str> = lines[2].split(" | ").collect();
    assert_eq!(cells[0], "Emily Davis");
    let spent: f64 = cells[1].parse().expect("numeric total");
    assert!((spent - 2999.96).abs() < 1e-6, "total was {spent}");
}

#[tokio::test]
async fn test_totals_computed_from_line_items() {
    // The derived total and the line-item sum must agree for every order.
    let answer = ask(
        "SELECT o.order_id \
         FROM orders o \
         JOIN order_items oi ON oi.order_id = o.order_id \
         GROUP BY o.order_id \
         HAVING ABS(o.total_amount - SUM(oi.quantity * oi.unit_price)) > 0.005",
        DatasetVariant::Relational,
        "Are any order totals wrong?",
    )
    .await;

    assert_eq!(answer.result, "No results.");
}

#[tokio::test]
async fn test_null_city_rendered_as_literal() {
    let answer = ask(
        "SELECT customer_name, city FROM customers WHERE customer_id = 3",
        DatasetVariant::Relational,
        "Where is Mike Brown?",
    )
    .await;

    let lines: Vec<&str> = answer.result.lines().collect();
    assert_eq!(lines[2], "Mike Brown | NULL");
}

#[tokio::test]
async fn test_row_cap_on_large_result() {
    // Cross join: 10 orders x 15 line items = 150 rows.
    let answer = ask(
        "SELECT o.order_id FROM orders o, order_items oi",
        DatasetVariant::Relational,
        "everything at once",
    )
    .await;

    let lines: Vec<&str> = answer.result.lines().collect();
    // header + rule + 50 data + notice + summary
    assert_eq!(lines.len(), 54);
    assert_eq!(lines[52], "(100 more rows not shown)");
    assert_eq!(lines[53], "(150 rows total)");
}

// ============================================================================
// Failure paths
// ============================================================================

#[tokio::test]
async fn test_malformed_query_reports_sql_error_and_query() {
    let answer = ask(
        "SELECT favourite_colour FROM customers",
        DatasetVariant::Relational,
        "What are their favourite colours?",
    )
    .await;

    // The attempted query is returned unmodified alongside the error.
    assert_eq!(answer.query, "SELECT favourite_colour FROM customers");
    assert!(answer.result.starts_with("SQL Error: "));
}

#[tokio::test]
async fn test_completion_failure_yields_two_strings() {
    let client = ScriptedCompletion::failing();
    let answer = pipeline::run(&client, DatasetVariant::Relational, "anything").await;

    assert!(answer.query.starts_with("Error: "));
    assert_eq!(answer.result, "(no result)");
}

#[tokio::test]
async fn test_fence_only_completion_is_handled() {
    let answer = ask("```sql\n```", DatasetVariant::Relational, "say nothing").await;

    assert_eq!(answer.query, "");
    // An empty statement produces either an execution error or no rows;
    // either way the contract holds: two strings, no panic.
    assert!(answer.result == "No results." || answer.result.starts_with("SQL Error: "));
}

#[tokio::test]
async fn test_adversarial_question_is_just_text() {
    let answer = ask(
        "SELECT COUNT(*) FROM customers",
        DatasetVariant::Relational,
        "\"; DROP TABLE customers; --",
    )
    .await;

    assert!(answer.result.contains("5"));
}
