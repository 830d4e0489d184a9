//! SQL rendering for IF/ELSE control blocks
//!
//! Branch bodies are statement lists rendered through the dispatcher, one
//! nesting level deeper than the IF itself.

use anyhow::Result;

use crate::ast::{Branch, IfStatement};
use crate::render::sql::render_expr;
use crate::render::{RenderContext, join_non_empty, opt_upper, render_program};

/// `IF <cond> <body><term> [GO] [ELSE <body><term>]`
pub fn render_if(stmt: &IfStatement, ctx: &RenderContext) -> Result<String> {
    let nested = ctx.nested()?;

    let mut clauses = vec![
        "IF".to_string(),
        render_expr(&stmt.condition, ctx.settings()),
        render_branch(&stmt.then_branch, &nested)?,
        opt_upper(stmt.go.as_deref()),
    ];
    if let Some(ref else_branch) = stmt.else_branch {
        clauses.push("ELSE".to_string());
        clauses.push(render_branch(else_branch, &nested)?);
    }

    Ok(join_non_empty(clauses, " "))
}

/// The terminator is glued to the body: `SELECT 1;`
fn render_branch(branch: &Branch, ctx: &RenderContext) -> Result<String> {
    Ok(format!(
        "{}{}",
        render_program(&branch.body, ctx)?,
        branch.terminator.as_deref().unwrap_or_default()
    ))
}
