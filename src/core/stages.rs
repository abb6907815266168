//! Streaming stage adapters.
//!
//! Every stage is an `AsyncRead` wrapping its upstream reader, so the chain
//! is pulled from the sink end: a stage only reads from upstream when its
//! own caller asks for more bytes. A slow sink therefore throttles the
//! whole chain and memory stays bounded by the per-stage buffers.

use crate::core::ByteSource;
use crate::domain::model::StageKind;
use async_compression::tokio::bufread::{GzipDecoder, GzipEncoder};
use std::fmt;
use std::io;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{ready, Context, Poll};
use tokio::io::{AsyncRead, BufReader, ReadBuf};

/// Where in the chain an I/O error was first raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Source,
    Stage(StageKind),
}

/// Carried inside an `io::Error` so the copy loop can attribute a failure
/// after it has bubbled through the downstream stages.
#[derive(Debug)]
pub struct StageFault {
    pub origin: Origin,
    pub error: io::Error,
}

impl fmt::Display for StageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for StageFault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

fn is_tagged(error: &io::Error) -> bool {
    error
        .get_ref()
        .is_some_and(|inner| inner.is::<StageFault>())
}

fn tag(error: io::Error, origin: Origin) -> io::Error {
    if is_tagged(&error) {
        return error;
    }
    io::Error::new(error.kind(), StageFault { origin, error })
}

/// Splits a chain error back into its origin and the original error.
pub fn untag(error: io::Error) -> (Origin, io::Error) {
    if !is_tagged(&error) {
        return (Origin::Source, error);
    }

    let kind = error.kind();
    match error.into_inner().map(|inner| inner.downcast::<StageFault>()) {
        Some(Ok(fault)) => (fault.origin, fault.error),
        Some(Err(other)) => (Origin::Source, io::Error::new(kind, other)),
        None => (Origin::Source, io::Error::from(kind)),
    }
}

pub struct TaggedReader<R> {
    inner: R,
    origin: Origin,
}

impl<R> TaggedReader<R> {
    pub fn new(inner: R, origin: Origin) -> Self {
        Self { inner, origin }
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for TaggedReader<R> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let origin = self.origin;
        Pin::new(&mut self.inner)
            .poll_read(cx, buf)
            .map_err(|e| tag(e, origin))
    }
}

/// ASCII-only uppercasing; every other byte passes through untouched, so
/// multi-byte UTF-8 sequences split across chunks stay intact.
pub struct UppercaseReader<R> {
    inner: R,
}

impl<R> UppercaseReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for UppercaseReader<R> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let start = buf.filled().len();
        ready!(Pin::new(&mut self.inner).poll_read(cx, buf))?;
        buf.filled_mut()[start..].make_ascii_uppercase();
        Poll::Ready(Ok(()))
    }
}

pub struct CountingReader<R> {
    inner: R,
    count: Arc<AtomicU64>,
}

impl<R> CountingReader<R> {
    pub fn new(inner: R, count: Arc<AtomicU64>) -> Self {
        Self { inner, count }
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for CountingReader<R> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let start = buf.filled().len();
        ready!(Pin::new(&mut self.inner).poll_read(cx, buf))?;
        let read = (buf.filled().len() - start) as u64;
        self.count.fetch_add(read, Ordering::Relaxed);
        Poll::Ready(Ok(()))
    }
}

pub fn apply_stage(input: ByteSource, stage: StageKind) -> ByteSource {
    match stage {
        StageKind::Uppercase => Box::new(UppercaseReader::new(input)),
        StageKind::GzipCompress => Box::new(GzipEncoder::new(BufReader::new(input))),
        StageKind::GzipDecompress => {
            let mut decoder = GzipDecoder::new(BufReader::new(input));
            // 支援串接的多個 gzip member
            decoder.multiple_members(true);
            Box::new(decoder)
        }
    }
}

/// Wraps the source and each stage in order; an empty stage list leaves the
/// source bytes untouched.
pub fn build_chain(source: ByteSource, stages: &[StageKind]) -> ByteSource {
    let mut reader: ByteSource = Box::new(TaggedReader::new(source, Origin::Source));
    for &stage in stages {
        tracing::debug!("Attaching stage: {}", stage);
        reader = Box::new(TaggedReader::new(
            apply_stage(reader, stage),
            Origin::Stage(stage),
        ));
    }
    reader
}
