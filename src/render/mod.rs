//! Statement renderers
//!
//! One pure function per statement kind turns a borrowed node into a single
//! line of SQL. [`SqlRenderer`] on [`Statement`] is the dispatcher that picks
//! the renderer from the node's kind; [`render_program`] renders statement
//! lists such as IF branch bodies.

use anyhow::{Result, bail};
use itertools::Itertools;
use std::fmt::Display;
use tracing::debug;

use crate::ast::Statement;
use crate::config::RenderSettings;

pub mod sql;

pub mod call;
pub mod command;
pub mod control;
pub mod deallocate;
pub mod declare;
pub mod describe;
pub mod grant;
pub mod lock;
pub mod rename;
pub mod set;
pub mod use_db;

pub use call::render_call;
pub use command::render_common_command;
pub use control::render_if;
pub use deallocate::render_deallocate;
pub use declare::render_declare;
pub use describe::render_describe;
pub use grant::render_grant;
pub use lock::render_lock_unlock;
pub use rename::render_rename;
pub use set::render_set_variable;
pub use use_db::render_use;

/// Settings plus the current IF nesting depth
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    settings: &'a RenderSettings,
    depth: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(settings: &'a RenderSettings) -> Self {
        Self { settings, depth: 0 }
    }

    pub fn settings(&self) -> &'a RenderSettings {
        self.settings
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for a nested statement body, one level deeper
    pub fn nested(&self) -> Result<RenderContext<'a>> {
        if self.depth >= self.settings.max_depth {
            bail!(
                "Statement nesting exceeds the maximum depth of {}",
                self.settings.max_depth
            );
        }
        Ok(RenderContext {
            settings: self.settings,
            depth: self.depth + 1,
        })
    }
}

/// Trait for rendering SQL from statement nodes
pub trait SqlRenderer {
    fn to_sql(&self, ctx: &RenderContext) -> Result<String>;
}

impl SqlRenderer for Statement {
    fn to_sql(&self, ctx: &RenderContext) -> Result<String> {
        debug!(kind = self.kind(), depth = ctx.depth(), "Rendering statement");
        let sql = match self {
            Statement::Call(stmt) => render_call(stmt, ctx),
            Statement::CommonCommand(stmt) => render_common_command(stmt, ctx),
            Statement::Describe(stmt) => render_describe(stmt, ctx),
            Statement::Rename(stmt) => render_rename(stmt, ctx),
            Statement::Use(stmt) => render_use(stmt, ctx),
            Statement::SetVariable(stmt) => render_set_variable(stmt, ctx),
            Statement::LockUnlock(stmt) => render_lock_unlock(stmt, ctx),
            Statement::Deallocate(stmt) => render_deallocate(stmt, ctx),
            Statement::Declare(stmt) => render_declare(stmt, ctx),
            Statement::If(stmt) => render_if(stmt, ctx)?,
            Statement::Grant(stmt) => render_grant(stmt, ctx),
        };
        Ok(sql)
    }
}

/// Render a statement list, joined with the configured separator
pub fn render_program(statements: &[Statement], ctx: &RenderContext) -> Result<String> {
    let rendered = statements
        .iter()
        .map(|stmt| stmt.to_sql(ctx))
        .collect::<Result<Vec<_>>>()?;
    Ok(join_non_empty(rendered, &ctx.settings().statement_separator))
}

/// Drop empty pieces, then join the rest with `separator`
pub fn join_non_empty<I, S>(pieces: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Display,
{
    pieces
        .into_iter()
        .filter(|piece| !piece.as_ref().is_empty())
        .join(separator)
}

/// Keywords are always emitted upper-cased
pub fn to_upper(keyword: &str) -> String {
    keyword.trim().to_uppercase()
}

/// Upper-case an optional keyword; absent keywords become an empty piece
pub fn opt_upper(keyword: Option<&str>) -> String {
    keyword.map(to_upper).unwrap_or_default()
}
