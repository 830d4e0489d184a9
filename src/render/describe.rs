use crate::ast::Describe;
use crate::render::sql::quote_ident;
use crate::render::{RenderContext, join_non_empty, to_upper};

/// `DESCRIBE <table>` / `DESC <table>`
pub fn render_describe(stmt: &Describe, ctx: &RenderContext) -> String {
    join_non_empty(
        [to_upper(&stmt.action), quote_ident(&stmt.table, ctx.settings())],
        " ",
    )
}
