//! Mapping generation
//!
//! The computational core: walks the input directory, derives a key and a
//! CDN URL for every image file, and accumulates them into a [`Mapping`].

use std::path::Path;

use crate::core::error::Result;
use crate::core::types::Mapping;
use crate::discovery::collect_image_files;

/// Builds the key -> URL mapping for an asset directory.
///
/// Inputs are normalized once at construction: the base URL loses any
/// trailing slash, the URL path segment loses surrounding slashes and is
/// omitted from URLs entirely when empty. The key prefix is used verbatim.
#[derive(Debug, Clone)]
pub struct MappingGenerator {
    base_url: String,
    url_path: String,
    prefix: String,
}

impl MappingGenerator {
    pub fn new(base_url: &str, url_path: &str, prefix: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            url_path: url_path.trim_matches('/').to_string(),
            prefix: prefix.to_string(),
        }
    }

    /// Scan `input_dir` recursively and build the complete mapping.
    ///
    /// The caller must have validated that `input_dir` exists and is a
    /// directory. File contents are never read. Files whose name is not
    /// valid UTF-8 are skipped. When two files share a stem, the
    /// lexicographically last path wins (traversal is sorted).
    pub fn generate(&self, input_dir: &Path) -> Result<Mapping> {
        let mut mapping = Mapping::new();

        for path in collect_image_files(input_dir)? {
            let stem = path.file_stem().and_then(|s| s.to_str());
            let file_name = path.file_name().and_then(|n| n.to_str());
            if let (Some(stem), Some(file_name)) = (stem, file_name) {
                mapping.insert(self.key_for(stem), self.url_for(file_name));
            }
        }

        Ok(mapping)
    }

    /// `"{prefix}_{stem}"`, original casing and non-ASCII preserved.
    pub fn key_for(&self, stem: &str) -> String {
        format!("{}_{stem}", self.prefix)
    }

    /// `"{base}/{segment}/{file_name}"`, the segment omitted when empty.
    pub fn url_for(&self, file_name: &str) -> String {
        if self.url_path.is_empty() {
            format!("{}/{file_name}", self.base_url)
        } else {
            format!("{}/{}/{file_name}", self.base_url, self.url_path)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn generator() -> MappingGenerator {
        MappingGenerator::new("https://cdn.example.com/img", "C", "Celeste")
    }

    #[test]
    fn test_key_format() {
        let generator = generator();
        assert_eq!(generator.key_for("photo"), "Celeste_photo");
        assert_eq!(generator.key_for("Photo Of Me"), "Celeste_Photo Of Me");
        assert_eq!(generator.key_for("图片"), "Celeste_图片");
    }

    #[test]
    fn test_url_format__with_segment() {
        let generator = generator();
        assert_eq!(
            generator.url_for("photo.PNG"),
            "https://cdn.example.com/img/C/photo.PNG"
        );
    }

    #[test]
    fn test_url_format__without_segment() {
        let generator = MappingGenerator::new("https://cdn.example.com/img", "", "Celeste");
        assert_eq!(
            generator.url_for("photo.png"),
            "https://cdn.example.com/img/photo.png"
        );
    }

    #[test]
    fn test_normalization__trailing_and_surrounding_slashes() {
        let generator = MappingGenerator::new("https://cdn.example.com/img/", "/C/", "P");
        let url = generator.url_for("a.gif");
        assert_eq!(url, "https://cdn.example.com/img/C/a.gif");
        // No double slashes past the scheme
        assert!(!url["https://".len()..].contains("//"));
    }

    #[test]
    fn test_normalization__segment_of_only_slashes_is_omitted() {
        let generator = MappingGenerator::new("https://cdn.example.com", "///", "P");
        assert_eq!(generator.url_for("a.jpg"), "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn test_generate__end_to_end_example() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::write(base.join("photo.PNG"), "")?;
        fs::write(base.join("notes.txt"), "")?;

        let generator = MappingGenerator::new("https://cdn.example.com/img", "", "Celeste");
        let mapping = generator.generate(base)?;

        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.get("Celeste_photo"),
            Some("https://cdn.example.com/img/photo.PNG")
        );
        Ok(())
    }

    #[test]
    fn test_generate__one_entry_per_image_file() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("sub"))?;
        fs::write(base.join("a.jpg"), "")?;
        fs::write(base.join("b.JPEG"), "")?;
        fs::write(base.join("sub/c.gif"), "")?;
        fs::write(base.join("sub/d.webp"), "")?;
        fs::write(base.join("README"), "")?;

        let mapping = generator().generate(base)?;

        assert_eq!(mapping.len(), 3);
        assert_eq!(
            mapping.get("Celeste_a"),
            Some("https://cdn.example.com/img/C/a.jpg")
        );
        // Original casing of the file name is preserved in the URL
        assert_eq!(
            mapping.get("Celeste_b"),
            Some("https://cdn.example.com/img/C/b.JPEG")
        );
        assert_eq!(
            mapping.get("Celeste_c"),
            Some("https://cdn.example.com/img/C/c.gif")
        );
        Ok(())
    }

    #[test]
    fn test_generate__duplicate_stems_last_path_wins() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("a"))?;
        fs::create_dir_all(base.join("b"))?;
        fs::write(base.join("a/x.PNG"), "")?;
        fs::write(base.join("b/x.png"), "")?;

        let mapping = generator().generate(base)?;

        assert_eq!(mapping.len(), 1);
        // Sorted traversal visits a/x.PNG then b/x.png; the later file's
        // name (lowercase extension) must be the one in the URL.
        assert_eq!(
            mapping.get("Celeste_x"),
            Some("https://cdn.example.com/img/C/x.png")
        );
        Ok(())
    }

    #[test]
    fn test_generate__non_ascii_file_names() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::write(base.join("图片.png"), "")?;
        fs::write(base.join("café.JPG"), "")?;

        let mapping = generator().generate(base)?;

        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping.get("Celeste_图片"),
            Some("https://cdn.example.com/img/C/图片.png")
        );
        assert_eq!(
            mapping.get("Celeste_café"),
            Some("https://cdn.example.com/img/C/café.JPG")
        );
        Ok(())
    }

    #[test]
    fn test_generate__multi_dot_names_split_on_last_dot() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::write(base.join("photo.v2.png"), "")?;

        let mapping = generator().generate(base)?;

        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.get("Celeste_photo.v2"),
            Some("https://cdn.example.com/img/C/photo.v2.png")
        );
        Ok(())
    }

    #[test]
    fn test_generate__empty_directory() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let mapping = generator().generate(temp_dir.path())?;
        assert!(mapping.is_empty());
        Ok(())
    }

    #[test]
    fn test_generate__idempotent() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("sub"))?;
        fs::write(base.join("z.png"), "")?;
        fs::write(base.join("a.jpg"), "")?;
        fs::write(base.join("sub/m.gif"), "")?;

        let generator = generator();
        let first = generator.generate(base)?;
        let second = generator.generate(base)?;

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first)?,
            serde_json::to_string(&second)?
        );
        Ok(())
    }

    #[test]
    fn test_generate__nonexistent_directory_errors() {
        let result = generator().generate(Path::new("/definitely/nonexistent/path/12345"));
        assert!(result.is_err());
    }
}
