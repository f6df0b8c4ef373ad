/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the default CLI values, the image extension
/// allow-list and the deny-list of sensitive filesystem paths.
use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    /// Default CDN base URL for generated links
    pub const BASE_URL: &str = "https://cdn.jsdelivr.net/gh/NiHiLine/CDN/img";
    /// Default URL path segment inserted between base URL and file name
    pub const URL_PATH: &str = "C";
    /// Default key prefix, joined to the file stem with an underscore
    pub const KEY_PREFIX: &str = "Celeste";
    /// Default output file path for the JSON mapping
    pub const OUTPUT_FILE: &str = "output.json";
}

/// Image file extension allow-list
pub mod extensions {
    /// Extensions recognized as images, compared case-insensitively
    pub const IMAGE: [&str; 4] = ["jpg", "jpeg", "png", "gif"];
}

/// JSON output constants
pub mod json {
    /// Indent used when pretty-printing the mapping
    pub const INDENT: &[u8] = b"    ";
}

/// Directory prefixes the tool refuses to scan. The filesystem root is
/// handled separately as an exact match by the safety validator.
pub static DEFAULT_DENY_PATHS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    let mut paths: Vec<PathBuf> = [
        "/etc", "/usr", "/bin", "/sbin", "/lib", "/boot", "/sys", "/proc", "/dev",
        "C:\\Windows", "C:\\Program Files", "C:\\Program Files (x86)",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    if let Some(home) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
        paths.push(PathBuf::from(home).join("Desktop"));
    }

    paths
});
