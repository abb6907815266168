use crate::core::{Pipeline, RunReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct PipelineEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PipelineEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Opens the source, wires the stages and drains into the sink.
    ///
    /// Nothing is printed on success; the report only goes to the log.
    pub async fn run(&self) -> Result<RunReport> {
        tracing::debug!("Starting pipeline");
        self.monitor.log_stats("Start");

        let source = self.pipeline.extract().await?;
        let chain = self.pipeline.transform(source);

        let report = self.pipeline.load(chain).await?;
        self.monitor.log_stats("Load");

        tracing::info!(
            "Pipeline finished: {} bytes in, {} bytes out to {}",
            report.bytes_read,
            report.bytes_written,
            report.sink
        );
        self.monitor.log_final_stats();

        Ok(report)
    }
}
