use itertools::Itertools;

use crate::ast::Rename;
use crate::render::sql::render_table;
use crate::render::{RenderContext, join_non_empty, to_upper};

/// `RENAME TABLE a TO b, c TO d`
///
/// An empty group list leaves just `RENAME TABLE`.
pub fn render_rename(stmt: &Rename, ctx: &RenderContext) -> String {
    let settings = ctx.settings();
    let groups = stmt
        .table
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|table| render_table(table, settings))
                .join(" TO ")
        })
        .join(", ");

    join_non_empty([to_upper(&stmt.action), "TABLE".to_string(), groups], " ")
}
