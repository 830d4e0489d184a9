use crate::ast::Deallocate;
use crate::render::sql::render_expr;
use crate::render::{RenderContext, join_non_empty, opt_upper, to_upper};

/// `DEALLOCATE [PREPARE] <name>`
pub fn render_deallocate(stmt: &Deallocate, ctx: &RenderContext) -> String {
    join_non_empty(
        [
            to_upper(&stmt.action),
            opt_upper(stmt.keyword.as_deref()),
            render_expr(&stmt.expr, ctx.settings()),
        ],
        " ",
    )
}
