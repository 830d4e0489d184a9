use crate::ast::Literal;

pub fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::SingleQuoteString(value) => format!("'{}'", value.replace('\'', "''")),
        Literal::DoubleQuoteString(value) => format!("\"{}\"", value.replace('"', "\"\"")),
        Literal::Number(value) => value.to_string(),
        Literal::Bool(true) => "TRUE".to_string(),
        Literal::Bool(false) => "FALSE".to_string(),
        Literal::Null => "NULL".to_string(),
        Literal::Origin(value) => value.trim().to_uppercase(),
    }
}
