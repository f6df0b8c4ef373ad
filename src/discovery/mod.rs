//! File discovery
//!
//! Recursive directory walking and image extension filtering.

pub mod walker;

pub use walker::{collect_image_files, has_image_extension};
