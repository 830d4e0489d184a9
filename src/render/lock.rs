//! SQL rendering for LOCK and UNLOCK statements
//!
//! Covers both MySQL (`LOCK TABLES t1 READ, t2 WRITE`) and PostgreSQL
//! (`LOCK TABLE t1 IN ACCESS EXCLUSIVE MODE NOWAIT`) shapes.

use itertools::Itertools;

use crate::ast::{LockTable, LockType, LockUnlock};
use crate::config::RenderSettings;
use crate::render::sql::render_table;
use crate::render::{RenderContext, join_non_empty, opt_upper, to_upper};

/// `UNLOCK <KEYWORD>` or `LOCK <KEYWORD> <table [lock type]>, ... [MODE] [NOWAIT]`
///
/// UNLOCK never looks at the table list or lock modifiers.
pub fn render_lock_unlock(stmt: &LockUnlock, ctx: &RenderContext) -> String {
    let mut clauses = vec![to_upper(&stmt.action), opt_upper(stmt.keyword.as_deref())];
    if stmt.action.trim().eq_ignore_ascii_case("unlock") {
        return join_non_empty(clauses, " ");
    }

    let settings = ctx.settings();
    clauses.push(
        stmt.tables
            .iter()
            .map(|entry| render_lock_table(entry, settings))
            .join(", "),
    );
    clauses.push(opt_upper(stmt.lock_mode.as_ref().map(|m| m.mode.as_str())));
    clauses.push(opt_upper(stmt.nowait.as_deref()));

    join_non_empty(clauses, " ")
}

fn render_lock_table(entry: &LockTable, settings: &RenderSettings) -> String {
    let lock_type = entry
        .lock_type
        .as_ref()
        .map(render_lock_type)
        .unwrap_or_default();
    join_non_empty([render_table(&entry.table, settings), lock_type], " ")
}

fn render_lock_type(lock_type: &LockType) -> String {
    join_non_empty(
        [
            opt_upper(lock_type.prefix.as_deref()),
            opt_upper(lock_type.lock.as_deref()),
            opt_upper(lock_type.suffix.as_deref()),
        ],
        " ",
    )
}
