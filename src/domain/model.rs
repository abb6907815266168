use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// 資料來源：具名檔案或標準輸入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    File(PathBuf),
    Stdin,
}

/// 資料輸出端：標準輸出或固定路徑的輸出檔
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinkKind {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageKind {
    Uppercase,
    GzipCompress,
    GzipDecompress,
}

/// How the source is drained.
///
/// `Streamed` pulls chunk by chunk through the stage chain; `ReadWhole`
/// loads the entire source before handing it to the sink, which is what the
/// zero-stage `textcat` tool does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionMode {
    Streamed,
    ReadWhole,
}

/// Flags decoded from the command line that shape the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub to_stdout: bool,
    pub compress: bool,
    pub decompress: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelinePlan {
    pub source: SourceKind,
    pub stages: Vec<StageKind>,
    pub sink: SinkKind,
    pub mode: ExecutionMode,
}

/// Pipeline 執行結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub sink: String,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::File(path) => write!(f, "{}", path.display()),
            SourceKind::Stdin => f.write_str("<stdin>"),
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::File(path) => write!(f, "{}", path.display()),
            SinkKind::Stdout => f.write_str("<stdout>"),
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageKind::Uppercase => "uppercase",
            StageKind::GzipCompress => "gzip-compress",
            StageKind::GzipDecompress => "gzip-decompress",
        };
        f.write_str(name)
    }
}
