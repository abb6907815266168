use crate::core::ConfigProvider;
use crate::domain::model::{
    ExecutionMode, PipelineOptions, PipelinePlan, SinkKind, SourceKind, StageKind,
};

/// Stage order for the streaming tool.
///
/// Uppercase is always present. Compression is checked before
/// decompression, so passing both flags yields the compress shape.
pub fn stage_order(options: PipelineOptions) -> Vec<StageKind> {
    if options.compress {
        vec![StageKind::Uppercase, StageKind::GzipCompress]
    } else if options.decompress {
        vec![StageKind::GzipDecompress, StageKind::Uppercase]
    } else {
        vec![StageKind::Uppercase]
    }
}

pub fn sink_for<C: ConfigProvider>(options: PipelineOptions, config: &C) -> SinkKind {
    if options.to_stdout {
        SinkKind::Stdout
    } else if options.compress {
        SinkKind::File(config.base_path().join(config.compressed_output_name()))
    } else {
        SinkKind::File(config.base_path().join(config.output_name()))
    }
}

pub fn plan_stream<C: ConfigProvider>(
    source: SourceKind,
    options: PipelineOptions,
    config: &C,
) -> PipelinePlan {
    let plan = PipelinePlan {
        source,
        stages: stage_order(options),
        sink: sink_for(options, config),
        mode: ExecutionMode::Streamed,
    };

    if options.compress && options.decompress {
        tracing::warn!("Both --compress and --decompress given; --compress takes precedence");
    }
    tracing::debug!(
        "Planned pipeline: {} -> [{}] -> {}",
        plan.source,
        describe_stages(&plan.stages),
        plan.sink
    );
    plan
}

/// Zero-stage plan: read everything, print it unchanged to stdout.
pub fn plan_passthrough(source: SourceKind) -> PipelinePlan {
    PipelinePlan {
        source,
        stages: Vec::new(),
        sink: SinkKind::Stdout,
        mode: ExecutionMode::ReadWhole,
    }
}

pub fn describe_stages(stages: &[StageKind]) -> String {
    stages
        .iter()
        .map(|stage| stage.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
