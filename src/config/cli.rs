use crate::config::Mode;
use crate::domain::model::PipelineOptions;
use clap::Parser;
use serde::{Deserialize, Serialize};

// clap 內建的 --help 關閉，改印固定的 usage 文字

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "textpipe", disable_help_flag = true)]
#[command(about = "Uppercase a file or stdin, optionally through gzip")]
pub struct StreamArgs {
    #[arg(long)]
    pub help: bool,

    #[arg(long, value_name = "FILENAME")]
    pub file: Option<String>,

    #[arg(long = "in")]
    pub stdin: bool,

    #[arg(long)]
    pub out: bool,

    #[arg(long)]
    pub compress: bool,

    #[arg(long)]
    pub decompress: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long)]
    pub monitor: bool,

    /// Leftover arguments; a lone `-` selects stdin.
    pub positionals: Vec<String>,
}

impl StreamArgs {
    pub fn mode(&self) -> Mode {
        Mode::select(
            self.help,
            self.file.as_deref(),
            self.stdin,
            &self.positionals,
        )
    }

    pub fn options(&self) -> PipelineOptions {
        PipelineOptions {
            to_stdout: self.out,
            compress: self.compress,
            decompress: self.decompress,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "textcat", disable_help_flag = true)]
#[command(about = "Print a file or stdin unchanged")]
pub struct CatArgs {
    #[arg(long)]
    pub help: bool,

    #[arg(long, value_name = "FILENAME")]
    pub file: Option<String>,

    #[arg(long = "in")]
    pub stdin: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    pub positionals: Vec<String>,
}

impl CatArgs {
    pub fn mode(&self) -> Mode {
        Mode::select(
            self.help,
            self.file.as_deref(),
            self.stdin,
            &self.positionals,
        )
    }
}
