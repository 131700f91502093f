use anyhow::Context;
use dumps_kernel::config::load_config;
use dumps_kernel::domain::config::{AppConfig, LoggingConfig};
use dumps_logger::{LevelFilter, LogFormat, Logger};
use dumps_server::Server;

#[cfg(feature = "profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[dumps_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    #[cfg(feature = "profiling")]
    let _profiler = dhat::Profiler::new_heap();

    // First argument overrides the default `server.*` config file.
    let cfg: AppConfig = load_config(std::env::args_os().nth(1))
        .context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.logging)?;

    Server::builder().config(cfg).build().await?.run().await
}

fn init_logger(cfg: &LoggingConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Invalid logging.level '{}'", cfg.level))?;
    let format: LogFormat = cfg.format.parse()?;

    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).format(format);
    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &cfg.dir {
        Some(dir) => builder.path(dir).json_files().init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
