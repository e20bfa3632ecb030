//! Configuration
//!
//! Engine options (`[dots]`) and desktop window options (`[window]`), loaded
//! from a TOML file. Every field is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Dot grid appearance and behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    /// Diameter of every dot, CSS pixels
    pub dot_diameter: f32,
    /// Space between adjacent dot cells, CSS pixels
    pub gap: f32,
    /// Color when the pointer is far away (`#rrggbb`)
    pub base_color: String,
    /// Color when the pointer sits on a dot center (`#rrggbb`)
    pub active_color: String,
    /// Distance at which blending begins, CSS pixels
    pub proximity: f32,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            dot_diameter: 3.0,
            gap: 24.0,
            base_color: "#b45309".to_string(),
            active_color: "#fbbf24".to_string(),
            proximity: 120.0,
        }
    }
}

/// Desktop window hosting the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial window width, physical pixels
    pub width: usize,
    /// Initial window height, physical pixels
    pub height: usize,
    /// Physical pixels per CSS pixel
    pub device_pixel_ratio: f32,
    /// Display refresh rate the frame loop is paced to
    pub target_fps: usize,
}

impl WindowConfig {
    /// Configured density, or 1.0 when it is zero, negative or not finite.
    pub fn effective_device_pixel_ratio(&self) -> f32 {
        let ratio = self.device_pixel_ratio;
        if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 }
    }

    /// Window size in CSS pixels at the effective density.
    pub fn css_size(&self) -> (f32, f32) {
        let ratio = self.effective_device_pixel_ratio();
        (self.width as f32 / ratio, self.height as f32 / ratio)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Dot Grid".to_string(),
            width: 960,
            height: 540,
            device_pixel_ratio: 1.0,
            target_fps: 60,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dots: DotConfig,
    pub window: WindowConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let config = DotConfig::default();
        assert_eq!(config.dot_diameter, 3.0);
        assert_eq!(config.gap, 24.0);
        assert_eq!(config.proximity, 120.0);
        assert!(crate::color::parse_hex(&config.base_color).is_some());
        assert!(crate::color::parse_hex(&config.active_color).is_some());
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r##"
            [dots]
            gap = 12.0
            active_color = "#ffffff"

            [window]
            device_pixel_ratio = 2.0
            "##,
        )
        .unwrap();
        assert_eq!(config.dots.gap, 12.0);
        assert_eq!(config.dots.active_color, "#ffffff");
        assert_eq!(config.dots.dot_diameter, 3.0);
        assert_eq!(config.window.device_pixel_ratio, 2.0);
        assert_eq!(config.window.width, 960);
    }

    #[test]
    fn unusable_density_falls_back_to_one() {
        for ratio in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let window = WindowConfig { device_pixel_ratio: ratio, ..WindowConfig::default() };
            assert_eq!(window.effective_device_pixel_ratio(), 1.0, "ratio {ratio}");
            assert_eq!(window.css_size(), (960.0, 540.0));
        }

        let retina = WindowConfig { device_pixel_ratio: 2.0, ..WindowConfig::default() };
        assert_eq!(retina.effective_device_pixel_ratio(), 2.0);
        assert_eq!(retina.css_size(), (480.0, 270.0));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = AppConfig::from_toml("[dots]\ngap = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dots]\nproximity = 64.0").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.dots.proximity, 64.0);

        let err = AppConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
