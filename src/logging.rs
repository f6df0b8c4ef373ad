use log::{debug, error, info};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the effective generator settings
pub fn log_generator_info(base_url: &str, url_path: &str, prefix: &str) {
    info!("Generator: base_url={base_url}, url_path={url_path:?}, prefix={prefix}");
}

/// Log the start of a directory scan
pub fn log_scan_start(dir: &Path) {
    info!("Scanning {}", dir.display());
}

/// Log scan completion with the record count
pub fn log_scan_complete(record_count: usize) {
    info!("Collected {record_count} record(s)");
}

/// Log an individual mapping record for debugging
pub fn log_record(key: &str, url: &str) {
    debug!("{key} -> {url}");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
