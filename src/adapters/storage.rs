use crate::core::{ByteSink, ByteSource, SinkKind, SourceKind, Storage};
use crate::utils::error::{PipeError, Result};
use tokio::fs::File;

/// Local filesystem plus the process's standard streams.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn open_source(&self, source: &SourceKind) -> Result<ByteSource> {
        match source {
            SourceKind::File(path) => {
                let file = File::open(path)
                    .await
                    .map_err(|e| PipeError::SourceUnavailable {
                        source_kind: source.clone(),
                        source: e,
                    })?;
                Ok(Box::new(file))
            }
            SourceKind::Stdin => Ok(Box::new(tokio::io::stdin())),
        }
    }

    async fn open_sink(&self, sink: &SinkKind) -> Result<ByteSink> {
        match sink {
            SinkKind::Stdout => Ok(Box::new(tokio::io::stdout())),
            // 每次執行都會截斷既有的輸出檔
            SinkKind::File(path) => {
                let file = File::create(path)
                    .await
                    .map_err(|e| PipeError::SinkUnavailable {
                        sink: sink.clone(),
                        source: e,
                    })?;
                Ok(Box::new(file))
            }
        }
    }
}
