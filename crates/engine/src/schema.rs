//! Table specifications for the sample store.
//!
//! One `TableSpec` value per table is the single source of truth: the
//! provisioner turns it into `CREATE TABLE` DDL and the prompt builder turns
//! it into the plain-text schema descriptor. The two can therefore never
//! drift apart.

use askdb_core::{OrderStatus, ProductCategory};

use crate::dataset::seed;

/// Formula for the derived order total. Used verbatim in the schema
/// descriptor and expanded into the provisioner's recompute statement.
pub const DERIVED_TOTAL_FORMULA: &str = "SUM(order_items.quantity * order_items.unit_price)";

/// Which shape of sample dataset to provision.
///
/// `Flat` is the original three-table shape without foreign keys, where
/// `orders.total_amount` is authoritative. `Relational` is the canonical
/// four-table shape with enforced references and derived totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetVariant {
    Flat,
    #[default]
    Relational,
}

impl DatasetVariant {
    /// Table specifications for this variant, in creation order (parents
    /// before children).
    #[must_use]
    pub fn tables(self) -> Vec<TableSpec> {
        match self {
            Self::Flat => vec![flat_customers(), flat_products(), flat_orders()],
            Self::Relational => vec![customers(), products(), orders(), order_items()],
        }
    }

    /// The plain-text schema descriptor handed to the prompt builder.
    ///
    /// Lists every table with its seed record count and columns, then a
    /// relationships section covering foreign keys and the derived total.
    #[must_use]
    pub fn descriptor(self) -> String {
        let tables = self.tables();
        let mut sections: Vec<String> = tables.iter().map(TableSpec::describe).collect();

        let relationships: Vec<String> = tables
            .iter()
            .flat_map(|table| {
                table.foreign_keys.iter().map(|fk| {
                    format!(
                        "- {}.{} references {}.{} ({})",
                        table.name,
                        fk.column,
                        fk.references_table,
                        fk.references_column,
                        fk.on_delete.describe()
                    )
                })
            })
            .collect();

        if !relationships.is_empty() {
            let mut section = String::from("Relationships:\n");
            section.push_str(&relationships.join("\n"));
            section.push_str(&format!(
                "\n- orders.total_amount is derived per order: {DERIVED_TOTAL_FORMULA}; \
                 do not trust it blindly when line items are available"
            ));
            sections.push(section);
        }

        sections.join("\n\n")
    }
}

/// Behavior when a referenced parent row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    Cascade,
    Restrict,
}

impl OnDelete {
    const fn as_sql(self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::Restrict => "RESTRICT",
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::Cascade => "deleting the parent deletes these rows",
            Self::Restrict => "the parent cannot be deleted while referenced",
        }
    }
}

/// A foreign-key relationship.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
    pub on_delete: OnDelete,
}

/// A single column: its DDL fragment and its descriptor annotation.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub name: &'static str,
    /// Everything after the column name in `CREATE TABLE` (type, constraints).
    decl: String,
    /// Type annotation as shown in the schema descriptor.
    described: String,
}

impl ColumnSpec {
    fn new(name: &'static str, decl: impl Into<String>, described: impl Into<String>) -> Self {
        Self {
            name,
            decl: decl.into(),
            described: described.into(),
        }
    }

    fn is_nullable(&self) -> bool {
        !self.decl.contains("NOT NULL") && !self.decl.contains("PRIMARY KEY")
    }
}

/// Specification of one table.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: Vec<ColumnSpec>,
    pub foreign_keys: Vec<ForeignKey>,
    /// Number of seed rows, advertised in the descriptor.
    pub row_count: usize,
}

impl TableSpec {
    /// The `CREATE TABLE` statement for this table.
    #[must_use]
    pub fn create_sql(&self) -> String {
        let mut parts: Vec<String> = self
            .columns
            .iter()
            .map(|column| format!("    {} {}", column.name, column.decl))
            .collect();

        for fk in &self.foreign_keys {
            parts.push(format!(
                "    FOREIGN KEY ({}) REFERENCES {}({}) ON DELETE {}",
                fk.column,
                fk.references_table,
                fk.references_column,
                fk.on_delete.as_sql()
            ));
        }

        format!("CREATE TABLE {} (\n{}\n)", self.name, parts.join(",\n"))
    }

    /// The descriptor section for this table.
    fn describe(&self) -> String {
        let mut lines = vec![format!("Table: {} ({} records)", self.name, self.row_count)];
        for column in &self.columns {
            if column.is_nullable() {
                lines.push(format!("- {} ({}, nullable)", column.name, column.described));
            } else {
                lines.push(format!("- {} ({})", column.name, column.described));
            }
        }
        lines.join("\n")
    }
}

fn status_values() -> String {
    let names: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
    format!("TEXT: {}", names.join(", "))
}

fn category_values() -> String {
    let names: Vec<&str> = ProductCategory::ALL.iter().map(|c| c.as_str()).collect();
    format!("TEXT: {}", names.join(", "))
}

// =============================================================================
// Relational variant
// =============================================================================

fn customers() -> TableSpec {
    TableSpec {
        name: "customers",
        columns: vec![
            ColumnSpec::new("customer_id", "INTEGER PRIMARY KEY", "INTEGER"),
            ColumnSpec::new("customer_name", "TEXT NOT NULL", "TEXT"),
            ColumnSpec::new("email", "TEXT NOT NULL UNIQUE", "TEXT"),
            ColumnSpec::new("signup_date", "DATE NOT NULL", "DATE"),
            ColumnSpec::new("city", "TEXT", "TEXT"),
            ColumnSpec::new("state", "TEXT", "TEXT"),
        ],
        foreign_keys: vec![],
        row_count: seed::customers().len(),
    }
}

fn products() -> TableSpec {
    TableSpec {
        name: "products",
        columns: vec![
            ColumnSpec::new("product_id", "INTEGER PRIMARY KEY", "INTEGER"),
            ColumnSpec::new("product_name", "TEXT NOT NULL", "TEXT"),
            ColumnSpec::new("category", "TEXT NOT NULL", category_values()),
            ColumnSpec::new(
                "price",
                "DECIMAL NOT NULL CHECK (price >= 0)",
                "DECIMAL",
            ),
            ColumnSpec::new(
                "stock_quantity",
                "INTEGER NOT NULL CHECK (stock_quantity >= 0)",
                "INTEGER",
            ),
        ],
        foreign_keys: vec![],
        row_count: seed::products().len(),
    }
}

fn orders() -> TableSpec {
    TableSpec {
        name: "orders",
        columns: vec![
            ColumnSpec::new("order_id", "INTEGER PRIMARY KEY", "INTEGER"),
            ColumnSpec::new("customer_id", "INTEGER NOT NULL", "INTEGER"),
            ColumnSpec::new("order_date", "DATE NOT NULL", "DATE"),
            ColumnSpec::new(
                "total_amount",
                "DECIMAL NOT NULL CHECK (total_amount >= 0)",
                "DECIMAL, derived from order_items",
            ),
            ColumnSpec::new("status", "TEXT NOT NULL", status_values()),
        ],
        foreign_keys: vec![ForeignKey {
            column: "customer_id",
            references_table: "customers",
            references_column: "customer_id",
            on_delete: OnDelete::Cascade,
        }],
        row_count: seed::orders().len(),
    }
}

fn order_items() -> TableSpec {
    TableSpec {
        name: "order_items",
        columns: vec![
            ColumnSpec::new("order_item_id", "INTEGER PRIMARY KEY", "INTEGER"),
            ColumnSpec::new("order_id", "INTEGER NOT NULL", "INTEGER"),
            ColumnSpec::new("product_id", "INTEGER NOT NULL", "INTEGER"),
            ColumnSpec::new(
                "quantity",
                "INTEGER NOT NULL CHECK (quantity > 0)",
                "INTEGER",
            ),
            ColumnSpec::new(
                "unit_price",
                "DECIMAL NOT NULL CHECK (unit_price >= 0)",
                "DECIMAL, price at time of purchase",
            ),
        ],
        foreign_keys: vec![
            ForeignKey {
                column: "order_id",
                references_table: "orders",
                references_column: "order_id",
                on_delete: OnDelete::Cascade,
            },
            ForeignKey {
                column: "product_id",
                references_table: "products",
                references_column: "product_id",
                on_delete: OnDelete::Restrict,
            },
        ],
        row_count: seed::order_items().len(),
    }
}

// =============================================================================
// Flat variant (original three-table shape, no foreign keys)
// =============================================================================

fn flat_customers() -> TableSpec {
    TableSpec {
        name: "customers",
        columns: vec![
            ColumnSpec::new("customer_id", "INTEGER PRIMARY KEY", "INTEGER"),
            ColumnSpec::new("customer_name", "TEXT NOT NULL", "TEXT"),
            ColumnSpec::new("email", "TEXT NOT NULL UNIQUE", "TEXT"),
            ColumnSpec::new("signup_date", "DATE NOT NULL", "DATE"),
        ],
        foreign_keys: vec![],
        row_count: seed::customers().len(),
    }
}

fn flat_products() -> TableSpec {
    TableSpec {
        name: "products",
        columns: vec![
            ColumnSpec::new("product_id", "INTEGER PRIMARY KEY", "INTEGER"),
            ColumnSpec::new("product_name", "TEXT NOT NULL", "TEXT"),
            ColumnSpec::new("category", "TEXT NOT NULL", category_values()),
            ColumnSpec::new(
                "price",
                "DECIMAL NOT NULL CHECK (price >= 0)",
                "DECIMAL",
            ),
        ],
        foreign_keys: vec![],
        row_count: seed::products().len(),
    }
}

fn flat_orders() -> TableSpec {
    TableSpec {
        name: "orders",
        columns: vec![
            ColumnSpec::new("order_id", "INTEGER PRIMARY KEY", "INTEGER"),
            ColumnSpec::new("customer_id", "INTEGER NOT NULL", "INTEGER"),
            ColumnSpec::new("order_date", "DATE NOT NULL", "DATE"),
            ColumnSpec::new(
                "total_amount",
                "DECIMAL NOT NULL CHECK (total_amount >= 0)",
                "DECIMAL",
            ),
            ColumnSpec::new("status", "TEXT NOT NULL", status_values()),
        ],
        foreign_keys: vec![],
        row_count: seed::orders().len(),
    }
}
