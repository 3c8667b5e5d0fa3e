//! icon_manifest — publishes a PNG/SVG icon library as a JSON manifest.
//!
//! Every `*.png` in the PNG directory becomes one manifest entry, linked to
//! its CDN URL. An `*.svg` with the same base name in the SVG directory adds
//! an SVG link to that entry. The manifest also carries per-format counts.

mod config;
mod icon;
mod manifest;
mod scan;

pub use config::*;
pub use icon::*;
pub use manifest::*;
pub use scan::*;

use anyhow::Result;

/// Builds the manifest for `config` and writes it to `config.output_path`.
///
/// Nothing is written if the PNG directory cannot be listed.
pub fn generate(config: &ManifestConfig) -> Result<Manifest> {
    let manifest = Manifest::build(config)?;
    manifest.write_to(&config.output_path)?;
    Ok(manifest)
}
