pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::engine::PipelineEngine;
pub use crate::core::pipeline::RecipePipeline;
pub use crate::utils::error::{Result, ScoutError};
