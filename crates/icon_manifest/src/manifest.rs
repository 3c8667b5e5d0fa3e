//! The `icons.json` document: assembly from disk, statistics, and output.

use crate::config::ManifestConfig;
use crate::icon::{IconFormat, IconRecord};
use crate::scan;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

/// Aggregate counts over a manifest's icons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestStatistics {
    #[serde(rename = "png")]
    pub png_count: usize,
    /// Every SVG in the SVG directory, including ones without a PNG.
    #[serde(rename = "svg")]
    pub svg_count: usize,
    #[serde(rename = "pngOnly")]
    pub png_only_count: usize,
    #[serde(rename = "bothFormats")]
    pub both_formats_count: usize,
}

impl ManifestStatistics {
    pub fn from_icons(icons: &[IconRecord], svg_count: usize) -> Self {
        let both_formats_count = icons.iter().filter(|icon| icon.has_svg()).count();
        Self {
            png_count: icons.len(),
            svg_count,
            png_only_count: icons.len() - both_formats_count,
            both_formats_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub source: String,
    #[serde(with = "iso_timestamp")]
    pub generated_at: NaiveDateTime,
    pub total_icons: usize,
    pub statistics: ManifestStatistics,
    /// Sorted by PNG file name.
    pub icons: Vec<IconRecord>,
}

impl Manifest {
    /// Scans the configured directories and builds a manifest stamped with
    /// the current local time.
    pub fn build(config: &ManifestConfig) -> Result<Self> {
        let now = Local::now().naive_local();
        // Timestamps are written with microsecond precision.
        let now = now
            .with_nanosecond(now.nanosecond() / 1_000 * 1_000)
            .unwrap_or(now);
        Self::build_at(config, now)
    }

    /// Scans the configured directories and builds a manifest stamped with
    /// `generated_at`.
    ///
    /// Fails only if the PNG directory cannot be listed. A missing SVG
    /// directory means no icon has an SVG.
    pub fn build_at(config: &ManifestConfig, generated_at: NaiveDateTime) -> Result<Self> {
        let pngs = scan::list_images(&config.png_dir, IconFormat::Png.extension())?;
        let svgs = scan::list_images_if_present(&config.svg_dir, IconFormat::Svg.extension());

        let svg_stems: BTreeSet<&str> = svgs.iter().map(|svg| svg.stem.as_str()).collect();
        let icons: Vec<IconRecord> = pngs
            .iter()
            .map(|png| IconRecord::new(png, svg_stems.contains(png.stem.as_str()), config))
            .collect();

        let png_stems: BTreeSet<&str> = pngs.iter().map(|png| png.stem.as_str()).collect();
        for svg in svgs.iter().filter(|svg| !png_stems.contains(svg.stem.as_str())) {
            log::warn!(
                "{} has no PNG counterpart in {}",
                svg.file_name,
                config.png_dir.display()
            );
        }

        let statistics = ManifestStatistics::from_icons(&icons, svgs.len());
        log::info!(
            "Built manifest with {} icons ({} with SVG)",
            icons.len(),
            statistics.both_formats_count
        );

        Ok(Self {
            name: config.library.name.clone(),
            version: config.library.version.clone(),
            description: config.library.description.clone(),
            source: config.library.source.clone(),
            generated_at,
            total_icons: icons.len(),
            statistics,
            icons,
        })
    }

    /// Pretty-printed JSON with two-space indentation. Non-ASCII is written as-is.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize icon manifest")
    }

    /// Writes the manifest to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let contents = self.to_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create manifest directory: {}", parent.display())
            })?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write icon manifest to {}", path.display()))?;

        log::info!("Icon manifest written to {}", path.display());
        Ok(())
    }

    /// Human-readable report of a manifest written to `output_path`.
    pub fn summary(&self, output_path: &Path) -> String {
        let stats = &self.statistics;
        let mut summary = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            summary,
            "Generated icon library manifest: {}",
            output_path.display()
        );
        let _ = writeln!(summary, "Statistics:");
        let _ = writeln!(summary, "   - Total icons: {}", stats.png_count);
        let _ = writeln!(summary, "   - PNG format: {}", stats.png_count);
        let _ = writeln!(summary, "   - SVG format: {}", stats.svg_count);
        let _ = writeln!(summary, "   - PNG only: {}", stats.png_only_count);
        let _ = writeln!(summary, "   - Both formats: {}", stats.both_formats_count);
        summary
    }
}

/// `generatedAt` as local ISO-8601 without an offset, e.g. `2024-05-01T09:30:12.345678`.
mod iso_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    const READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(
        timestamp: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&timestamp.format(WRITE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, READ_FORMAT).map_err(de::Error::custom)
    }
}
