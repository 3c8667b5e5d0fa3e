//! Single-level directory listing filtered by file extension.

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

/// An image found on disk, identified by its file name and base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageFile {
    /// File name including extension, e.g. `home-icon.png`.
    pub file_name: String,
    /// File name without its final extension, e.g. `home-icon`.
    pub stem: String,
}

impl ImageFile {
    fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        let stem = path.file_stem()?.to_string_lossy().into_owned();
        Some(Self { file_name, stem })
    }
}

/// Lists regular files in `dir` whose extension is exactly `extension`,
/// sorted by file name. Sub-directories are not descended into.
///
/// Fails if `dir` does not exist, is not a directory, or cannot be read.
pub fn list_images(dir: &Path, extension: &str) -> Result<Vec<ImageFile>> {
    let metadata = std::fs::metadata(dir)
        .with_context(|| format!("Failed to access image directory {}", dir.display()))?;
    anyhow::ensure!(
        metadata.is_dir(),
        "Image path {} is not a directory",
        dir.display()
    );

    let mut images = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to read image directory {}", dir.display()))?;
        let path = entry.path();

        if path.extension() != Some(OsStr::new(extension)) {
            continue;
        }
        // Follows symlinks; dangling links and directories named `*.png` are skipped.
        if !path.is_file() {
            log::debug!("Skipping non-file entry {}", path.display());
            continue;
        }
        if let Some(image) = ImageFile::from_path(path) {
            images.push(image);
        }
    }

    log::debug!(
        "Found {} .{} files in {}",
        images.len(),
        extension,
        dir.display()
    );
    Ok(images)
}

/// Like [`list_images`], but a missing or unreadable directory yields an
/// empty list instead of an error.
pub fn list_images_if_present(dir: &Path, extension: &str) -> Vec<ImageFile> {
    match list_images(dir, extension) {
        Ok(images) => images,
        Err(e) => {
            log::warn!("No .{} files available: {:#}", extension, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"").unwrap();
    }

    fn file_names(images: &[ImageFile]) -> Vec<&str> {
        images.iter().map(|i| i.file_name.as_str()).collect()
    }

    #[test]
    fn test_list_images_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "settings.png");
        touch(dir.path(), "home-icon.png");
        touch(dir.path(), "readme.txt");
        touch(dir.path(), "upper.PNG");
        touch(dir.path(), "archive.png.bak");
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();
        touch(&dir.path().join("nested.png"), "deep.png");

        let images = list_images(dir.path(), "png").unwrap();
        assert_eq!(file_names(&images), vec!["home-icon.png", "settings.png"]);
        assert_eq!(images[0].stem, "home-icon");
    }

    #[test]
    fn test_stem_keeps_inner_dots() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "logo.dark.png");

        let images = list_images(dir.path(), "png").unwrap();
        assert_eq!(
            images,
            vec![ImageFile {
                file_name: "logo.dark.png".to_string(),
                stem: "logo.dark".to_string(),
            }]
        );
    }

    #[test]
    fn test_list_images_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(list_images(dir.path(), "png").unwrap().is_empty());
    }

    #[test]
    fn test_list_images_missing_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("png");
        let err = list_images(&missing, "png").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to access image directory"));
    }

    #[test]
    fn test_list_images_file_instead_of_dir_is_error() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "png");
        assert!(list_images(&dir.path().join("png"), "png").is_err());
    }

    #[test]
    fn test_list_images_if_present_tolerates_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(list_images_if_present(&dir.path().join("svg"), "svg").is_empty());
    }
}
