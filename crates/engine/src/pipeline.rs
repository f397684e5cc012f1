//! End-to-end question-answering pipeline.
//!
//! Linear, no retries: prompt -> completion -> sanitize -> provision ->
//! execute -> format. Every failure is recovered here and converted into the
//! two-string [`Answer`]; nothing propagates past this boundary. The
//! generated query is carried as an explicit value through every stage so
//! failure arms can always report what was attempted.

use tracing::instrument;

use crate::claude::CompletionClient;
use crate::dataset;
use crate::exec;
use crate::format::format_table;
use crate::prompt::build_prompt;
use crate::sanitize::sanitize_completion;
use crate::schema::DatasetVariant;

/// Result text when the completion failed and no query was generated.
const NOT_GENERATED: &str = "(no result)";

/// The pipeline's two-output contract: the generated query (or the error
/// that prevented generating one) and the rendered result (or the error
/// that prevented producing one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub query: String,
    pub result: String,
}

/// Answer a free-text question against a freshly provisioned dataset.
///
/// Always returns an [`Answer`]; never panics or propagates an error.
#[instrument(skip(client, question))]
pub async fn run<C: CompletionClient>(
    client: &C,
    variant: DatasetVariant,
    question: &str,
) -> Answer {
    let prompt = build_prompt(variant, &variant.descriptor(), question);

    let raw = match client.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "completion failed");
            return Answer {
                query: format!("Error: {e}"),
                result: NOT_GENERATED.to_string(),
            };
        }
    };

    let query = sanitize_completion(&raw);
    tracing::debug!(%query, "generated query");

    let conn = match dataset::provision(variant).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(error = %e, "provisioning failed");
            return Answer {
                result: format!("Error: {e}"),
                query,
            };
        }
    };

    match exec::execute(conn, &query).await {
        Ok(output) => Answer {
            result: format_table(&output),
            query,
        },
        Err(e) => Answer {
            result: format!("SQL Error: {e}"),
            query,
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::claude::ClaudeError;

    /// Scripted completion: either canned text or a canned failure.
    struct FakeCompletion(Result<String, fn() -> ClaudeError>);

    impl FakeCompletion {
        fn text(text: &str) -> Self {
            Self(Ok(text.to_string()))
        }

        fn failing(make: fn() -> ClaudeError) -> Self {
            Self(Err(make))
        }
    }

    impl CompletionClient for FakeCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, ClaudeError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    #[tokio::test]
    async fn test_happy_path_returns_query_and_table() {
        let client = FakeCompletion::text("```sql\nSELECT COUNT(*) AS n FROM orders\n```");
        let answer = run(&client, DatasetVariant::Relational, "How many orders?").await;

        assert_eq!(answer.query, "SELECT COUNT(*) AS n FROM orders");
        let lines: Vec<&str> = answer.result.lines().collect();
        assert_eq!(lines[0], "n");
        assert_eq!(lines[2], "10");
        assert_eq!(lines[3], "(1 row total)");
    }

    #[tokio::test]
    async fn test_completion_failure_surfaces_in_query_slot() {
        let client = FakeCompletion::failing(|| ClaudeError::Unauthorized("bad key".to_string()));
        let answer = run(&client, DatasetVariant::Relational, "anything").await;

        assert!(answer.query.starts_with("Error: unauthorized"));
        assert_eq!(answer.result, "(no result)");
    }

    #[tokio::test]
    async fn test_bad_sql_keeps_query_text() {
        let client = FakeCompletion::text("SELECT no_such_column FROM customers");
        let answer = run(&client, DatasetVariant::Relational, "nonsense").await;

        assert_eq!(answer.query, "SELECT no_such_column FROM customers");
        assert!(answer.result.starts_with("SQL Error: "));
        assert!(answer.result.contains("no_such_column"));
    }

    #[tokio::test]
    async fn test_destructive_statement_only_harms_its_own_copy() {
        // No allow-listing: the statement runs, the dataset is disposable.
        let drop_client = FakeCompletion::text("DROP TABLE order_items");
        let answer = run(&drop_client, DatasetVariant::Relational, "drop it").await;
        assert_eq!(answer.result, "No results.");

        // The next request provisions from scratch and is unaffected.
        let count_client = FakeCompletion::text("SELECT COUNT(*) FROM order_items");
        let answer = run(&count_client, DatasetVariant::Relational, "count items").await;
        assert!(answer.result.contains("15"));
    }
}
