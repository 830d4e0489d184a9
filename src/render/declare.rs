//! SQL rendering for DECLARE statements (variables, cursors, table variables)

use itertools::Itertools;

use crate::ast::{Declaration, DeclarationKind, Declare};
use crate::config::RenderSettings;
use crate::render::sql::{render_column_definition, render_data_type, render_expr};
use crate::render::{RenderContext, join_non_empty, to_upper};

/// `DECLARE @a INT = 1, @c CURSOR, @t TABLE (id INT)`
pub fn render_declare(stmt: &Declare, ctx: &RenderContext) -> String {
    let settings = ctx.settings();
    let entries = stmt
        .declare
        .iter()
        .map(|declaration| render_declaration(declaration, settings))
        .join(", ");

    join_non_empty([to_upper(&stmt.action), entries], " ")
}

fn render_declaration(declaration: &Declaration, settings: &RenderSettings) -> String {
    let mut parts = vec![
        format!("{}{}", declaration.at, declaration.name),
        if declaration.has_as {
            "AS".to_string()
        } else {
            String::new()
        },
    ];

    match &declaration.kind {
        DeclarationKind::Variable { data_type, default } => {
            parts.push(render_data_type(data_type));
            if let Some(default) = default {
                parts.push("=".to_string());
                parts.push(render_expr(default, settings));
            }
        }
        DeclarationKind::Cursor { prefix } => parts.push(to_upper(prefix)),
        DeclarationKind::Table { prefix, definition } => {
            parts.push(to_upper(prefix));
            parts.push(format!(
                "({})",
                definition
                    .iter()
                    .map(|column| render_column_definition(column, settings))
                    .join(", ")
            ));
        }
    }

    join_non_empty(parts, " ")
}
