//! cdnmap - map image files in a directory tree to CDN URLs
//!
//! Scans an input directory recursively for image files and builds an
//! ordered key -> URL mapping that is serialized as pretty-printed JSON.
//! The scan never reads file contents, only directory entries and names.

pub mod config;
pub mod core;
pub mod discovery;
pub mod logging;
pub mod mapping;
pub mod output;
pub mod safety;
pub mod ui;

// Re-export commonly used items for convenience
pub use crate::core::error::{CdnMapError, Result};
pub use crate::core::types::Mapping;
pub use crate::mapping::MappingGenerator;
pub use crate::safety::SafetyValidator;
