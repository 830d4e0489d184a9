//! Statement trees consumed by the renderers
//!
//! Every node is an immutable, serde-friendly record. Statement trees are
//! usually produced by a parser and handed to [`crate::render`] once; they can
//! also be loaded from JSON or YAML documents by the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod command;
pub mod control;
pub mod declare;
pub mod expr;
pub mod grant;
pub mod table;

pub use command::*;
pub use control::*;
pub use declare::*;
pub use expr::*;
pub use grant::*;
pub use table::*;

/// An unquoted identifier. Quoting is applied at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ident(pub String);

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One parsed command, keyed by its `kind` discriminant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    Call(Call),
    CommonCommand(CommonCommand),
    Describe(Describe),
    Rename(Rename),
    Use(Use),
    SetVariable(SetVariable),
    LockUnlock(LockUnlock),
    Deallocate(Deallocate),
    Declare(Declare),
    If(IfStatement),
    Grant(Grant),
}

impl Statement {
    /// The discriminant as it appears in serialized trees
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Call(_) => "call",
            Statement::CommonCommand(_) => "common_command",
            Statement::Describe(_) => "describe",
            Statement::Rename(_) => "rename",
            Statement::Use(_) => "use",
            Statement::SetVariable(_) => "set_variable",
            Statement::LockUnlock(_) => "lock_unlock",
            Statement::Deallocate(_) => "deallocate",
            Statement::Declare(_) => "declare",
            Statement::If(_) => "if",
            Statement::Grant(_) => "grant",
        }
    }
}

macro_rules! impl_into_statement {
    ($($node:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Statement {
                fn from(node: $node) -> Self {
                    Statement::$variant(node)
                }
            }
        )*
    };
}

impl_into_statement! {
    Call => Call,
    CommonCommand => CommonCommand,
    Describe => Describe,
    Rename => Rename,
    Use => Use,
    SetVariable => SetVariable,
    LockUnlock => LockUnlock,
    Deallocate => Deallocate,
    Declare => Declare,
    IfStatement => If,
    Grant => Grant,
}
