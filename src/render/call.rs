//! SQL rendering for CALL statements

use crate::ast::Call;
use crate::render::RenderContext;
use crate::render::sql::render_expr;

/// `CALL <invocation>`
pub fn render_call(stmt: &Call, ctx: &RenderContext) -> String {
    format!("CALL {}", render_expr(&stmt.expr, ctx.settings()))
}
