use crate::ast::SetVariable;
use crate::render::RenderContext;
use crate::render::sql::render_expr;

/// `SET <assignment>`
pub fn render_set_variable(stmt: &SetVariable, ctx: &RenderContext) -> String {
    format!("SET {}", render_expr(&stmt.expr, ctx.settings()))
}
