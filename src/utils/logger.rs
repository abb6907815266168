use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// stdout 可能是資料輸出端，日誌一律寫到 stderr
pub fn init_cli_logger(verbose: bool, monitor: bool) {
    let filter = build_filter(verbose, monitor);

    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .json(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}

/// `RUST_LOG` wins over the defaults; `--monitor` always lets the stats through.
pub fn build_filter(verbose: bool, monitor: bool) -> EnvFilter {
    let mut filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("textpipe=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("textpipe=warn"))
    };

    if monitor {
        if let Ok(directive) = "textpipe::utils::monitor=info".parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}
