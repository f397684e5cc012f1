//! Prompt assembly for SQL generation.
//!
//! The question is embedded verbatim, unescaped. Guarding against prompt
//! injection is the caller's problem by contract; the worst a hostile
//! question can do here is vandalize its own disposable dataset.

use crate::schema::DatasetVariant;

/// Build the completion prompt from the schema descriptor and the question.
///
/// The rule block depends on the variant: the derived-total rule talks about
/// `order_items`, which only exists in the relational dataset.
#[must_use]
pub fn build_prompt(variant: DatasetVariant, schema: &str, question: &str) -> String {
    let mut prompt = format!(
        "Given this database schema:\n\
         \n\
         {schema}\n\
         \n\
         Convert this question to a SQL query:\n\
         \"{question}\"\n\
         \n\
         Rules:\n\
         - Return ONLY the SQL query, no explanations\n\
         - Use proper SQLite syntax\n\
         - Use JOIN when querying multiple tables\n\
         - When the question asks which customer or product, join through to \
         the human-readable name instead of returning a bare id\n"
    );

    if variant == DatasetVariant::Relational {
        prompt.push_str(
            "- orders.total_amount is derived from order_items; compute from line \
             items when the question is about amounts\n",
        );
    }

    prompt
}
