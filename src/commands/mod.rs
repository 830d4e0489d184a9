pub mod config;
pub mod render;

// Re-export all command functions
pub use config::cmd_config;
pub use render::cmd_render;
