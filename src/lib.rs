//! sqlify renders parsed SQL command statements back into canonical SQL text.
//!
//! ```
//! use sqlify::ast::{Ident, Use};
//!
//! let stmt = Use { action: "use".to_string(), db: Ident::new("shop") };
//! assert_eq!(sqlify::to_sql(&stmt.into()).unwrap(), "USE shop");
//! ```

pub mod ast;
pub mod commands;
pub mod config;
pub mod constants;
pub mod render;

pub use ast::Statement;
pub use config::{Config, RenderSettings};
pub use render::{RenderContext, SqlRenderer, render_program};

use anyhow::Result;

/// Render one statement with default settings
pub fn to_sql(stmt: &Statement) -> Result<String> {
    let settings = RenderSettings::default();
    stmt.to_sql(&RenderContext::new(&settings))
}

/// Render a statement list with default settings, joined by the default separator
pub fn program_to_sql(statements: &[Statement]) -> Result<String> {
    let settings = RenderSettings::default();
    render_program(statements, &RenderContext::new(&settings))
}
