use crate::core::stages::{build_chain, untag, CountingReader, Origin};
use crate::core::{
    ByteSink, ByteSource, ExecutionMode, Pipeline, PipelinePlan, RunReport, Storage,
};
use crate::utils::error::{PipeError, Result};
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const CHUNK_SIZE: usize = 16 * 1024;

pub struct StreamPipeline<S: Storage> {
    storage: S,
    plan: PipelinePlan,
    bytes_read: Arc<AtomicU64>,
}

impl<S: Storage> StreamPipeline<S> {
    pub fn new(storage: S, plan: PipelinePlan) -> Self {
        Self {
            storage,
            plan,
            bytes_read: Arc::new(AtomicU64::new(0)),
        }
    }

    fn read_failure(&self, error: io::Error) -> PipeError {
        match untag(error) {
            (Origin::Source, source) => PipeError::SourceUnavailable {
                source_kind: self.plan.source.clone(),
                source,
            },
            (Origin::Stage(stage), source) => PipeError::StageFailure { stage, source },
        }
    }

    fn write_failure(&self, error: io::Error) -> PipeError {
        PipeError::SinkUnavailable {
            sink: self.plan.sink.clone(),
            source: error,
        }
    }

    async fn copy_streamed(&self, mut input: ByteSource, sink: &mut ByteSink) -> Result<u64> {
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut written = 0u64;

        loop {
            let n = match input.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => return Err(self.read_failure(e)),
            };
            sink.write_all(&buf[..n])
                .await
                .map_err(|e| self.write_failure(e))?;
            written += n as u64;
        }

        Ok(written)
    }

    async fn copy_whole(&self, mut input: ByteSource, sink: &mut ByteSink) -> Result<u64> {
        let mut data = Vec::new();
        input
            .read_to_end(&mut data)
            .await
            .map_err(|e| self.read_failure(e))?;

        sink.write_all(&data)
            .await
            .map_err(|e| self.write_failure(e))?;
        Ok(data.len() as u64)
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for StreamPipeline<S> {
    async fn extract(&self) -> Result<ByteSource> {
        tracing::debug!("Opening source: {}", self.plan.source);
        let source = self.storage.open_source(&self.plan.source).await?;
        Ok(Box::new(CountingReader::new(source, self.bytes_read.clone())))
    }

    fn transform(&self, input: ByteSource) -> ByteSource {
        build_chain(input, &self.plan.stages)
    }

    async fn load(&self, input: ByteSource) -> Result<RunReport> {
        tracing::debug!("Opening sink: {}", self.plan.sink);
        let mut sink = self.storage.open_sink(&self.plan.sink).await?;

        // 失敗時不清除已寫入的部分輸出
        let bytes_written = match self.plan.mode {
            ExecutionMode::Streamed => self.copy_streamed(input, &mut sink).await?,
            ExecutionMode::ReadWhole => self.copy_whole(input, &mut sink).await?,
        };

        sink.shutdown().await.map_err(|e| self.write_failure(e))?;

        Ok(RunReport {
            bytes_read: self.bytes_read.load(Ordering::Relaxed),
            bytes_written,
            sink: self.plan.sink.to_string(),
        })
    }
}
