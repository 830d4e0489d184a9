use crate::ast::Use;
use crate::render::sql::quote_ident;
use crate::render::{RenderContext, join_non_empty, to_upper};

/// `USE <database>`
pub fn render_use(stmt: &Use, ctx: &RenderContext) -> String {
    join_non_empty(
        [to_upper(&stmt.action), quote_ident(&stmt.db, ctx.settings())],
        " ",
    )
}
