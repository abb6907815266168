pub mod engine;
pub mod pipeline;
pub mod planner;
pub mod stages;

pub use crate::domain::model::{
    ExecutionMode, PipelineOptions, PipelinePlan, RunReport, SinkKind, SourceKind, StageKind,
};
pub use crate::domain::ports::{ByteSink, ByteSource, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
