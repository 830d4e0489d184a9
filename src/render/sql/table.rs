use itertools::Itertools;

use super::quote_qualified;
use crate::ast::TableRef;
use crate::config::RenderSettings;
use crate::render::join_non_empty;

/// `[db.][schema.]table [AS alias]`
pub fn render_table(table: &TableRef, settings: &RenderSettings) -> String {
    let name = quote_qualified(
        [table.db.as_ref(), table.schema.as_ref(), Some(&table.table)],
        settings,
    );
    let alias = table
        .alias
        .as_ref()
        .map(|alias| format!("AS {}", super::quote_ident(alias, settings)))
        .unwrap_or_default();
    join_non_empty([name, alias], " ")
}

/// Comma-joined table list
pub fn render_tables(tables: &[TableRef], settings: &RenderSettings) -> String {
    tables
        .iter()
        .map(|table| render_table(table, settings))
        .join(", ")
}
