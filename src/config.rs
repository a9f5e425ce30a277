//! Build-time Configuration
//!
//! Values baked into the wasm bundle. Override the API origin and log level
//! with `DIECAST_API_BASE` / `DIECAST_LOG` when running `trunk build`.

use log::LevelFilter;

/// Origin prefixed to every `/api/...` path (empty = same origin)
pub fn api_base() -> &'static str {
    option_env!("DIECAST_API_BASE").unwrap_or("")
}

/// Console log level
pub fn log_level() -> LevelFilter {
    match option_env!("DIECAST_LOG") {
        Some(level) => parse_level(level),
        None => LevelFilter::Info,
    }
}

fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// localStorage key for the sidebar collapse flag
pub const SIDEBAR_STORAGE_KEY: &str = "sidebarCollapsed";

/// Longest accepted column name
pub const FIELD_NAME_MAX_LEN: usize = 50;

/// Characters a column name may not contain
pub const FORBIDDEN_FIELD_CHARS: &[char] = &['/', '\\', '?', '*', '[', ']', ':', ';'];

/// Delay before the add-field page re-reads the column list
pub const FIELD_RELOAD_DELAY_MS: u32 = 1_000;

/// How long success banners stay up
pub const SUCCESS_BANNER_MS: u32 = 5_000;

/// Exported CSV files are named `<prefix><YYYY-MM-DD>.csv`
pub const CSV_FILENAME_PREFIX: &str = "diecast_collection_";
