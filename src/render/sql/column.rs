//! Column references, data types and column definitions

use super::{quote_qualified, render_expr};
use crate::ast::{ColumnDefinition, ColumnRef, DataType};
use crate::config::RenderSettings;
use crate::render::{join_non_empty, to_upper};

/// `[table.]column`
pub fn render_column_ref(column: &ColumnRef, settings: &RenderSettings) -> String {
    quote_qualified([column.table.as_ref(), Some(&column.column)], settings)
}

/// `NAME[(length[, scale])] [SUFFIX ...]`
pub fn render_data_type(data_type: &DataType) -> String {
    let mut type_name = to_upper(&data_type.name);
    match (data_type.length, data_type.scale) {
        (Some(length), Some(scale)) => type_name.push_str(&format!("({}, {})", length, scale)),
        (Some(length), None) => type_name.push_str(&format!("({})", length)),
        _ => {}
    }

    let suffix = data_type.suffix.iter().map(|word| to_upper(word));
    join_non_empty(std::iter::once(type_name).chain(suffix), " ")
}

/// `column TYPE [NOT NULL] [DEFAULT expr] [PRIMARY KEY]`
pub fn render_column_definition(
    definition: &ColumnDefinition,
    settings: &RenderSettings,
) -> String {
    let mut parts = vec![
        super::quote_ident(&definition.column, settings),
        render_data_type(&definition.data_type),
    ];

    if definition.not_null {
        parts.push("NOT NULL".to_string());
    }
    if let Some(ref default) = definition.default {
        parts.push(format!("DEFAULT {}", render_expr(default, settings)));
    }
    if definition.primary_key {
        parts.push("PRIMARY KEY".to_string());
    }

    join_non_empty(parts, " ")
}
