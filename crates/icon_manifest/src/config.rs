//! Fixed settings for a manifest run.
//!
//! The tool takes no flags and reads no config file. Everything it needs is
//! collected here so the builder can be pointed at any directory tree.

use std::path::{Path, PathBuf};

/// Prefix for every published asset URL. Assets live under `png/` and `svg/`.
pub const CDN_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/lsimply/icons@refs/heads/main/";

pub const PNG_DIR: &str = "png";
pub const SVG_DIR: &str = "svg";
pub const OUTPUT_FILE: &str = "icons.json";

/// Descriptive header copied into the top of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub source: String,
}

impl Default for LibraryInfo {
    fn default() -> Self {
        Self {
            name: "Lsimply Icons".to_string(),
            version: "1.0.0".to_string(),
            description: "A collection of icons for Lsimply dashboard".to_string(),
            source: "https://github.com/Lsimply/icons".to_string(),
        }
    }
}

/// Where to read icons from, where to write the manifest, and how to link assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    pub library: LibraryInfo,

    /// Must end with `/`; format subpaths are appended verbatim.
    pub cdn_base_url: String,

    /// Directory scanned for `*.png`. Required.
    pub png_dir: PathBuf,

    /// Directory checked for `*.svg` counterparts. May be missing.
    pub svg_dir: PathBuf,

    /// Manifest destination, overwritten on every run.
    pub output_path: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self::rooted_at(Path::new("."))
    }
}

impl ManifestConfig {
    /// Default layout (`png/`, `svg/`, `icons.json`) under `root`.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            library: LibraryInfo::default(),
            cdn_base_url: CDN_BASE_URL.to_string(),
            png_dir: root.join(PNG_DIR),
            svg_dir: root.join(SVG_DIR),
            output_path: root.join(OUTPUT_FILE),
        }
    }

    pub fn png_url(&self, file_name: &str) -> String {
        format!("{}{}/{}", self.cdn_base_url, PNG_DIR, file_name)
    }

    pub fn svg_url(&self, file_name: &str) -> String {
        format!("{}{}/{}", self.cdn_base_url, SVG_DIR, file_name)
    }
}
