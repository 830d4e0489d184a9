use crate::config::types::*;

/// Trait for merging optional configuration values
pub trait Merge<T> {
    fn merge(self, other: T) -> T;
}

impl<T> Merge<Option<T>> for Option<T> {
    fn merge(self, other: Option<T>) -> Option<T> {
        other.or(self)
    }
}

impl Merge<ConfigInput> for ConfigInput {
    fn merge(self, other: ConfigInput) -> ConfigInput {
        ConfigInput {
            render: match (self.render, other.render) {
                (None, None) => None,
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (Some(a), Some(b)) => Some(a.merge_with(b)),
            },
        }
    }
}

impl RenderInput {
    pub fn merge_with(self, other: RenderInput) -> RenderInput {
        RenderInput {
            quote_style: self.quote_style.merge(other.quote_style),
            quote_policy: self.quote_policy.merge(other.quote_policy),
            max_depth: self.max_depth.merge(other.max_depth),
            statement_separator: self.statement_separator.merge(other.statement_separator),
        }
    }
}
