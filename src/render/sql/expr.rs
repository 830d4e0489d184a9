//! Expression rendering for the clauses statement renderers delegate:
//! procedure invocations, assignments, conditions, privileges and options.

use itertools::Itertools;

use super::{quote_ident, render_column_ref, render_literal};
use crate::ast::{Expr, FunctionCall};
use crate::config::RenderSettings;
use crate::render::to_upper;

pub fn render_expr(expr: &Expr, settings: &RenderSettings) -> String {
    match expr {
        Expr::Identifier(ident) => quote_ident(ident, settings),
        Expr::ColumnRef(column) => render_column_ref(column, settings),
        Expr::Literal(literal) => render_literal(literal),
        Expr::Keyword(word) => to_upper(word),
        Expr::Variable(var) => format!("{}{}", var.prefix, var.name),
        Expr::Function(call) => render_function(call, settings),
        Expr::Binary(binary) => format!(
            "{} {} {}",
            render_expr(&binary.left, settings),
            to_upper(&binary.op),
            render_expr(&binary.right, settings)
        ),
        Expr::Unary(unary) => {
            let operand = render_expr(&unary.expr, settings);
            // Word operators need a space, symbols bind directly: `NOT x`, `-x`
            if unary.op.chars().all(|c| c.is_ascii_alphabetic()) {
                format!("{} {}", to_upper(&unary.op), operand)
            } else {
                format!("{}{}", unary.op, operand)
            }
        }
        Expr::Nested(inner) => format!("({})", render_expr(inner, settings)),
        Expr::List(items) => format!("({})", render_expr_list(items, settings)),
    }
}

fn render_function(call: &FunctionCall, settings: &RenderSettings) -> String {
    let name = call
        .name
        .iter()
        .map(|part| quote_ident(part, settings))
        .join(".");
    format!("{}({})", name, render_expr_list(&call.args, settings))
}

fn render_expr_list(items: &[Expr], settings: &RenderSettings) -> String {
    items
        .iter()
        .map(|item| render_expr(item, settings))
        .join(", ")
}
