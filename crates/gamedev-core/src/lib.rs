pub mod catalog;
pub mod config;
pub mod error;
pub mod io;
pub mod knowledge;
pub mod linear;
pub mod paths;
pub mod pipeline;
pub mod plan;
pub mod sprint;
pub mod template;
pub mod tracker;
pub mod types;

pub use error::{GameDevError, Result};
