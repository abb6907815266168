use anyhow::Context;
use clap::Parser;
use textpipe::config::usage::{print_help, print_usage_error, TEXTCAT_USAGE};
use textpipe::core::planner::plan_passthrough;
use textpipe::core::SourceKind;
use textpipe::utils::logger;
use textpipe::{CatArgs, LocalStorage, Mode, PipeError, PipelineEngine, RuntimeConfig, StreamPipeline};

fn exit_with(e: PipeError) -> ! {
    e.report();
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let args = CatArgs::parse();

    logger::init_cli_logger(args.verbose, false);

    let source = match args.mode() {
        Mode::Help => {
            print_help(TEXTCAT_USAGE);
            return Ok(());
        }
        Mode::Invalid => {
            print_usage_error("Incorrect usage.", TEXTCAT_USAGE);
            exit_with(PipeError::UsageError {
                message: "no input selected".to_string(),
            });
        }
        Mode::File(file) => {
            let config = RuntimeConfig::load().unwrap_or_else(|e| exit_with(e));
            SourceKind::File(config.resolve(&file))
        }
        Mode::Stdin => SourceKind::Stdin,
    };

    // 零階段：整份讀入後原樣輸出到 stdout
    let pipeline = StreamPipeline::new(LocalStorage::new(), plan_passthrough(source));
    let engine = PipelineEngine::new(pipeline);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the I/O runtime")?;

    let result = runtime.block_on(engine.run());
    if let Err(e) = result {
        runtime.shutdown_background();
        exit_with(e);
    }

    Ok(())
}
