use std::path::{Path, PathBuf};

use crate::core::constants::extensions;
use crate::core::error::Result;

/// Whether a path carries an extension from the image allow-list.
///
/// The comparison is case-insensitive; files without an extension never
/// match. Non-UTF-8 extensions never match either.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            extensions::IMAGE.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Recursively collect every image file under `dir`, sorted by path.
///
/// Every regular file is visited, hidden files included; ignore files like
/// .gitignore have no effect on an asset scan. Sorting pins the traversal
/// order so duplicate-key resolution and output bytes are deterministic
/// across runs. A directory that cannot be listed propagates as an error.
pub fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(dir);
    builder.standard_filters(false);

    let mut paths = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let entry_path = entry.path();

        let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
        if is_file && has_image_extension(entry_path) {
            paths.push(entry_path.to_path_buf());
        }
    }

    paths.sort();
    Ok(paths)
}
