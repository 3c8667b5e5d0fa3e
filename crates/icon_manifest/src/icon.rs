//! Per-icon manifest entries.

use crate::config::ManifestConfig;
use crate::scan::ImageFile;
use serde::{Deserialize, Serialize};

/// Asset formats an icon can be published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFormat {
    Png,
    Svg,
}

impl IconFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            IconFormat::Png => "png",
            IconFormat::Svg => "svg",
        }
    }
}

/// One icon in the manifest. Every icon has a PNG; the SVG is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "png")]
    pub png_url: String,
    /// Serialized as `null` when the icon has no SVG counterpart.
    #[serde(rename = "svg")]
    pub svg_url: Option<String>,
    /// `png` first, then `svg` if present.
    pub formats: Vec<IconFormat>,
}

impl IconRecord {
    pub fn new(png: &ImageFile, has_svg: bool, config: &ManifestConfig) -> Self {
        let svg_url = has_svg.then(|| {
            config.svg_url(&format!("{}.{}", png.stem, IconFormat::Svg.extension()))
        });

        let mut formats = vec![IconFormat::Png];
        if svg_url.is_some() {
            formats.push(IconFormat::Svg);
        }

        Self {
            name: png.stem.clone(),
            display_name: display_name(&png.stem),
            png_url: config.png_url(&png.file_name),
            svg_url,
            formats,
        }
    }

    pub fn has_svg(&self) -> bool {
        self.svg_url.is_some()
    }
}

/// Human-readable name for an icon: hyphens become spaces and the result is
/// title-cased. A letter is upper-cased when it follows a character that is
/// not a letter, and lower-cased otherwise, so `usb-2x-DRIVE` becomes
/// `Usb 2X Drive`.
pub fn display_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut previous_is_cased = false;

    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        if is_cased(c) {
            if previous_is_cased {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_cased = true;
        } else {
            result.push(c);
            previous_is_cased = false;
        }
    }

    result
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}
