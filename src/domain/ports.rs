use crate::domain::model::{RunReport, SinkKind, SourceKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncWrite};

pub type ByteSource = Box<dyn AsyncRead + Send + Unpin>;
pub type ByteSink = Box<dyn AsyncWrite + Send + Unpin>;

pub trait Storage: Send + Sync {
    fn open_source(
        &self,
        source: &SourceKind,
    ) -> impl std::future::Future<Output = Result<ByteSource>> + Send;
    fn open_sink(
        &self,
        sink: &SinkKind,
    ) -> impl std::future::Future<Output = Result<ByteSink>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_path(&self) -> &Path;
    fn output_name(&self) -> &str;
    fn compressed_output_name(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ByteSource>;
    fn transform(&self, input: ByteSource) -> ByteSource;
    async fn load(&self, input: ByteSource) -> Result<RunReport>;
}
