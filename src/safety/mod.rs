//! Input path safety validation
//!
//! Refuses to scan the filesystem root or well-known system directories.
//! The deny-list is an immutable set of path prefixes handed to the
//! validator at construction, so alternative lists can come from
//! configuration without any global mutable state.

use std::path::{Path, PathBuf};

use crate::core::constants::DEFAULT_DENY_PATHS;
use crate::core::error::{CdnMapError, Result};

#[derive(Debug, Clone)]
pub struct SafetyValidator {
    deny_prefixes: Vec<PathBuf>,
}

impl SafetyValidator {
    pub fn new(deny_prefixes: Vec<PathBuf>) -> Self {
        Self { deny_prefixes }
    }

    /// Validator with the built-in deny-list.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_DENY_PATHS.clone())
    }

    /// Check a resolved absolute path against the deny-list and require it
    /// to be an existing directory.
    ///
    /// The filesystem root is rejected as an exact match. Prefix matching is
    /// component-wise, so `/etcetera` does not match the `/etc` prefix.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if path.parent().is_none() {
            return Err(CdnMapError::UnsafePath(path.display().to_string()));
        }

        for prefix in &self.deny_prefixes {
            if path.starts_with(prefix) {
                return Err(CdnMapError::UnsafePath(path.display().to_string()));
            }
        }

        if !path.is_dir() {
            return Err(CdnMapError::NotADirectory(path.display().to_string()));
        }

        Ok(())
    }
}
