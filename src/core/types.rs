//! Core types for converter settings and results.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::utils::{ConverterError, ConverterResult};

/// Directory scanned by the binary, relative to the working directory
pub const DEFAULT_IMAGE_DIR: &str = "images";
/// Lossy WebP quality used for every conversion
pub const DEFAULT_WEBP_QUALITY: u32 = 80;

/// libwebp compression method (0 = fast, 6 = slowest / smallest)
const WEBP_METHOD_DEFAULT: i32 = 4;
const WEBP_METHOD_OPTIMIZED: i32 = 6;

/// Configuration for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Directory whose direct entries are converted in place
    #[serde(rename = "imageDir")]
    pub image_dir: PathBuf,
    /// WebP encoder settings
    pub webp: WebpSettings,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            webp: WebpSettings::default(),
        }
    }
}

impl ConverterConfig {
    /// Default settings pointed at another directory.
    pub fn for_dir(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            ..Self::default()
        }
    }
}

/// WebP encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebpSettings {
    /// Lossy quality (1-100)
    pub quality: u32,
    /// Spend extra encoder effort for a smaller file
    pub optimize: bool,
}

impl Default for WebpSettings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_WEBP_QUALITY,
            optimize: true,
        }
    }
}

impl WebpSettings {
    pub fn validate(&self) -> ConverterResult<()> {
        if self.quality == 0 || self.quality > 100 {
            return Err(ConverterError::settings(format!(
                "Invalid quality value: {}. Must be between 1 and 100",
                self.quality
            )));
        }
        Ok(())
    }

    /// libwebp `method` for these settings.
    pub fn method(&self) -> i32 {
        if self.optimize {
            WEBP_METHOD_OPTIMIZED
        } else {
            WEBP_METHOD_DEFAULT
        }
    }
}

/// Result of converting one file.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    /// File name of the source image, lossily converted for display
    #[serde(rename = "sourceName")]
    pub source_name: String,
    /// File name of the written WebP image
    #[serde(rename = "webpName")]
    pub webp_name: String,
    /// Full path of the written WebP image
    #[serde(rename = "outputPath")]
    pub output_path: PathBuf,
    /// Source file size in bytes
    #[serde(rename = "originalSize")]
    pub original_size: u64,
    /// WebP file size in bytes
    #[serde(rename = "webpSize")]
    pub webp_size: u64,
    /// Bytes saved (negative if the WebP is larger)
    #[serde(rename = "savedBytes")]
    pub saved_bytes: i64,
    /// Saved bytes as a percentage of the original size
    #[serde(rename = "compressionRatio")]
    pub compression_ratio: f64,
}

impl ConversionResult {
    pub(crate) fn from_sizes(
        source_name: String,
        webp_name: String,
        output_path: PathBuf,
        original_size: u64,
        webp_size: u64,
    ) -> Self {
        let saved_bytes = original_size as i64 - webp_size as i64;
        let compression_ratio = if original_size > 0 {
            saved_bytes as f64 / original_size as f64 * 100.0
        } else {
            0.0
        };

        Self {
            source_name,
            webp_name,
            output_path,
            original_size,
            webp_size,
            saved_bytes,
            compression_ratio,
        }
    }

    /// Confirmation line printed for each converted file.
    pub fn message(&self) -> String {
        format!("Converted {} to {}", self.source_name, self.webp_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_behaviour() {
        let config = ConverterConfig::default();
        assert_eq!(config.image_dir, PathBuf::from("images"));
        assert_eq!(config.webp.quality, 80);
        assert!(config.webp.optimize);
        assert_eq!(config.webp.method(), 6);
        assert!(config.webp.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_quality() {
        for quality in [0, 101] {
            let settings = WebpSettings { quality, optimize: true };
            assert!(matches!(settings.validate(), Err(ConverterError::Settings(_))));
        }
    }

    #[test]
    fn ratio_handles_growth_and_empty_input() {
        let grown = ConversionResult::from_sizes(
            "a.png".into(),
            "a.webp".into(),
            "a.webp".into(),
            100,
            150,
        );
        assert_eq!(grown.saved_bytes, -50);
        assert_eq!(grown.compression_ratio, -50.0);

        let empty =
            ConversionResult::from_sizes("b.jpg".into(), "b.webp".into(), "b.webp".into(), 0, 10);
        assert_eq!(empty.compression_ratio, 0.0);
        assert_eq!(empty.message(), "Converted b.jpg to b.webp");
    }

    #[test]
    fn config_round_trips_through_json() {
        let json = r#"{"imageDir":"shots","webp":{"quality":75,"optimize":false}}"#;
        let config: ConverterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.image_dir, PathBuf::from("shots"));
        assert_eq!(config.webp.method(), 4);
    }
}
