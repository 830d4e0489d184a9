//! Shared SQL rendering functions
//!
//! Identifier quoting, literals, expressions, table and column references.
//! Every statement renderer goes through these so the same node always
//! produces the same text.

pub mod column;
pub mod expr;
pub mod ident;
pub mod literal;
pub mod table;

// Re-export commonly used functions
pub use column::{render_column_definition, render_column_ref, render_data_type};
pub use expr::render_expr;
pub use ident::{quote_ident, quote_qualified};
pub use literal::render_literal;
pub use table::{render_table, render_tables};
