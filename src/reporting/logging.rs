use crate::config::Config;
use log::{debug, error, info, warn};
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let (width, height) = config.chart_size();

    info!("Configuration: log_file={}", config.log_file_path().display());
    debug!("Charts: {width}x{height}px");
    if let Some(ref output) = config.output_path {
        debug!("Output: {output}");
    }
}

/// Log where the dashboard is served
pub fn log_server_start(addr: &SocketAddr) {
    info!("logsight dashboard: http://{addr}/");
}

/// Log how many records a file produced
pub fn log_extraction<P: AsRef<Path>>(path: P, record_count: usize) {
    debug!(
        "Extracted {record_count} record(s) from {}",
        path.as_ref().display()
    );
}

/// Log dashboard rendering completion
pub fn log_render_complete(record_count: usize, chart_count: usize, duration_ms: u128) {
    info!("Rendered {chart_count} chart(s) from {record_count} record(s) ({duration_ms}ms)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
