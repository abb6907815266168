use anyhow::Context;
use clap::Parser;
use textpipe::config::usage::{print_help, print_usage_error, TEXTPIPE_USAGE};
use textpipe::core::planner::plan_stream;
use textpipe::core::SourceKind;
use textpipe::utils::logger;
use textpipe::{
    LocalStorage, Mode, PipeError, PipelineEngine, RuntimeConfig, StreamArgs, StreamPipeline,
};

fn exit_with(e: PipeError) -> ! {
    e.report();
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let args = StreamArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose, args.monitor);
    tracing::debug!("CLI args: {:?}", args);

    let (config, source) = match args.mode() {
        Mode::Help => {
            print_help(TEXTPIPE_USAGE);
            return Ok(());
        }
        Mode::Invalid => {
            print_usage_error("Incorrect usage.", TEXTPIPE_USAGE);
            exit_with(PipeError::UsageError {
                message: "no input selected".to_string(),
            });
        }
        Mode::File(file) => {
            let config = RuntimeConfig::load().unwrap_or_else(|e| exit_with(e));
            let source = SourceKind::File(config.resolve(&file));
            (config, source)
        }
        Mode::Stdin => {
            let config = RuntimeConfig::load().unwrap_or_else(|e| exit_with(e));
            (config, SourceKind::Stdin)
        }
    };
    tracing::debug!("Base path: {}", config.base_path.display());

    let plan = plan_stream(source, args.options(), &config);
    let pipeline = StreamPipeline::new(LocalStorage::new(), plan);
    let engine = PipelineEngine::new_with_monitoring(pipeline, args.monitor);

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
