pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CatArgs, StreamArgs};

pub use adapters::storage::LocalStorage;
pub use config::{Mode, RuntimeConfig};
pub use core::{engine::PipelineEngine, pipeline::StreamPipeline};
pub use utils::error::{PipeError, Result};
