use serde::{Deserialize, Serialize};

use super::{Expr, Statement};

/// `IF <condition> <statements>; [GO] [ELSE <statements>;]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub condition: Expr,
    #[serde(rename = "then")]
    pub then_branch: Branch,
    #[serde(default)]
    pub go: Option<String>,
    #[serde(default, rename = "else")]
    pub else_branch: Option<Branch>,
}

/// A nested statement list plus the separator token that closed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub body: Vec<Statement>,
    #[serde(default)]
    pub terminator: Option<String>,
}

impl Branch {
    pub fn new(body: Vec<Statement>) -> Self {
        Self {
            body,
            terminator: Some(";".to_string()),
        }
    }
}
