pub mod config;
pub mod create;
pub mod knowledge;
pub mod mcp;
pub mod plan;
pub mod templates;
