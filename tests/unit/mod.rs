pub mod properties;
pub mod statements;
