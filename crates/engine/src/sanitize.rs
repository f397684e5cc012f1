//! Sanitization of raw model completions.
//!
//! Models wrap SQL in Markdown code fences despite being told not to. This
//! strips the fence markers and surrounding whitespace and nothing else:
//! whether the remainder is valid SQL is discovered at execution time, and
//! there is deliberately no allow-listing of statement kinds here. The
//! dataset the statement runs against is disposable; a deployment against a
//! shared database would need an allow-list gate before execution.

/// Strip code-fence markers and surrounding whitespace from a completion.
///
/// A completion that is empty or consists only of fence markers yields the
/// empty string, which the executor will reject like any other bad
/// statement.
#[must_use]
pub fn sanitize_completion(raw: &str) -> String {
    raw.replace("```sql", "")
        .replace("```", "")
        .trim()
        .to_string()
}
