//! Expression, literal and column nodes

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Ident;

/// A literal value as it appeared in the source text
///
/// Serialized as `{ "type": <variant>, "value": <payload> }`. A YAML `type: null`
/// (an unquoted null tag) reads as [`Literal::Null`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Literal {
    SingleQuoteString(String),
    DoubleQuoteString(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
    /// Bare keyword text such as `table` or `with grant option`
    Origin(String),
}

impl Literal {
    pub fn string(value: impl Into<String>) -> Self {
        Literal::SingleQuoteString(value.into())
    }

    pub fn origin(value: impl Into<String>) -> Self {
        Literal::Origin(value.into())
    }
}

const LITERAL_TYPES: &[&str] = &[
    "single_quote_string",
    "double_quote_string",
    "number",
    "bool",
    "null",
    "origin",
];

#[derive(Deserialize)]
struct RawLiteral {
    #[serde(rename = "type")]
    tag: Value,
    #[serde(default)]
    value: Option<Value>,
}

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawLiteral::deserialize(deserializer)?;
        let tag = match raw.tag {
            Value::Null => return Ok(Literal::Null),
            Value::String(tag) => tag,
            other => {
                return Err(D::Error::custom(format!(
                    "literal type must be a string, found {}",
                    other
                )));
            }
        };

        match (tag.as_str(), raw.value) {
            ("null", _) => Ok(Literal::Null),
            ("single_quote_string", Some(Value::String(s))) => Ok(Literal::SingleQuoteString(s)),
            ("double_quote_string", Some(Value::String(s))) => Ok(Literal::DoubleQuoteString(s)),
            ("origin", Some(Value::String(s))) => Ok(Literal::Origin(s)),
            ("number", Some(Value::Number(n))) => Ok(Literal::Number(n)),
            ("bool", Some(Value::Bool(b))) => Ok(Literal::Bool(b)),
            (tag, value) if LITERAL_TYPES.contains(&tag) => Err(D::Error::custom(format!(
                "invalid value for `{}` literal: {:?}",
                tag, value
            ))),
            (other, _) => Err(D::Error::unknown_variant(other, LITERAL_TYPES)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Identifier(Ident),
    ColumnRef(ColumnRef),
    Literal(Literal),
    /// Keyword-like token, rendered upper-cased (privileges, option words)
    Keyword(String),
    Variable(Variable),
    Function(FunctionCall),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Nested(Box<Expr>),
    List(Vec<Expr>),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(Ident::new(name))
    }

    pub fn keyword(word: impl Into<String>) -> Self {
        Expr::Keyword(word.into())
    }

    pub fn column(column: impl Into<String>) -> Self {
        Expr::ColumnRef(ColumnRef::new(column))
    }

    pub fn number(value: i64) -> Self {
        Expr::Literal(Literal::Number(value.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::string(value))
    }

    /// A user variable such as `@total`
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(Variable {
            prefix: "@".to_string(),
            name: name.into(),
        })
    }

    pub fn binary(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Function(FunctionCall {
            name: vec![Ident::new(name)],
            args,
        })
    }
}

/// `@name` / `@@scope.name`; rendered verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub prefix: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Possibly qualified name, e.g. `["db", "proc"]`
    pub name: Vec<Ident>,
    #[serde(default)]
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: String,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    #[serde(default)]
    pub table: Option<Ident>,
    pub column: Ident,
}

impl ColumnRef {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            table: None,
            column: Ident::new(column),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(Ident::new(table));
        self
    }
}

/// Column data type, e.g. `VARCHAR(20)` or `DECIMAL(10, 2) UNSIGNED`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataType {
    pub name: String,
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default)]
    pub scale: Option<u32>,
    #[serde(default)]
    pub suffix: Vec<String>,
}

impl DataType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length: None,
            scale: None,
            suffix: vec![],
        }
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub column: Ident,
    pub data_type: DataType,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub default: Option<Expr>,
    #[serde(default)]
    pub primary_key: bool,
}

impl ColumnDefinition {
    pub fn new(column: impl Into<String>, data_type: DataType) -> Self {
        Self {
            column: Ident::new(column),
            data_type,
            not_null: false,
            default: None,
            primary_key: false,
        }
    }
}
