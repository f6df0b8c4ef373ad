use std::fmt;

/// Comprehensive error types for cdnmap operations
#[derive(Debug)]
pub enum CdnMapError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Input path matches the deny-list of sensitive system paths
    UnsafePath(String),

    /// Input path is not an existing directory
    NotADirectory(String),

    /// File walking/ignore error
    FileWalking(ignore::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),
}

impl fmt::Display for CdnMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CdnMapError::Io(err) => write!(f, "IO error: {err}"),
            CdnMapError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CdnMapError::UnsafePath(path) => {
                write!(f, "Unsafe input path: refusing to scan '{path}'")
            }
            CdnMapError::NotADirectory(path) => write!(f, "Not a directory: {path}"),
            CdnMapError::FileWalking(err) => write!(f, "File walking error: {err}"),
            CdnMapError::Json(err) => write!(f, "JSON error: {err}"),
            CdnMapError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
        }
    }
}

impl std::error::Error for CdnMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CdnMapError::Io(err) => Some(err),
            CdnMapError::FileWalking(err) => Some(err),
            CdnMapError::Json(err) => Some(err),
            CdnMapError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CdnMapError {
    fn from(err: std::io::Error) -> Self {
        CdnMapError::Io(err)
    }
}

impl From<ignore::Error> for CdnMapError {
    fn from(err: ignore::Error) -> Self {
        CdnMapError::FileWalking(err)
    }
}

impl From<serde_json::Error> for CdnMapError {
    fn from(err: serde_json::Error) -> Self {
        CdnMapError::Json(err)
    }
}

impl From<toml::de::Error> for CdnMapError {
    fn from(err: toml::de::Error) -> Self {
        CdnMapError::TomlParsing(err)
    }
}

/// Type alias for Results using CdnMapError
pub type Result<T> = std::result::Result<T, CdnMapError>;
