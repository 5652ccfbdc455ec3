// src/processing/convert/executor.rs

//! Blocking per-file conversion: decode, encode as WebP, write.
//!
//! Everything here runs on tokio's blocking pool; the batch converter awaits
//! each call before starting the next one.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::core::{ConversionResult, ConversionTask, WebpSettings};
use crate::utils::{ConverterError, ConverterResult, file_size_or_zero};

use super::formats::encode_webp;

/// Opens and decodes the image at `path`.
///
/// The real format is sniffed from the file contents; the extension only got
/// the file selected.
pub fn decode_image(path: &Path) -> ConverterResult<DynamicImage> {
    ImageReader::open(path)
        .map_err(|e| ConverterError::decode(path, e))?
        .with_guessed_format()
        .map_err(|e| ConverterError::decode(path, e))?
        .decode()
        .map_err(|e| ConverterError::decode(path, e))
}

/// Converts one task synchronously, overwriting any existing output.
pub fn convert_single(
    task: &ConversionTask,
    settings: &WebpSettings,
) -> ConverterResult<ConversionResult> {
    let original_size = file_size_or_zero(&task.source_path);

    let image = decode_image(&task.source_path)?;
    debug!(
        "Loaded '{}': {}×{}",
        task.source_name.to_string_lossy(),
        image.width(),
        image.height()
    );

    let bytes = encode_webp(&image, settings, &task.source_path)?;
    drop(image);

    std::fs::write(&task.output_path, &bytes)
        .map_err(|e| ConverterError::write(&task.output_path, e))?;

    let result = ConversionResult::from_sizes(
        task.source_name.to_string_lossy().into_owned(),
        task.webp_name.to_string_lossy().into_owned(),
        task.output_path.clone(),
        original_size,
        bytes.len() as u64,
    );

    debug!(
        "'{}' → '{}': {} bytes saved ({:.1}%)",
        result.source_name, result.webp_name, result.saved_bytes, result.compression_ratio
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn converts_png_next_to_source() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]))
            .save(dir.path().join("a.png"))
            .unwrap();

        let task = ConversionTask::new(dir.path(), "a.png");
        let result = convert_single(&task, &WebpSettings::default()).unwrap();

        assert_eq!(result.webp_name, "a.webp");
        assert_eq!(result.webp_size, std::fs::metadata(dir.path().join("a.webp")).unwrap().len());
        assert!(result.original_size > 0);
    }

    #[test]
    fn decodes_by_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("real.png");
        RgbImage::new(3, 3).save(&png_path).unwrap();
        let jpg_named = dir.path().join("mislabelled.jpg");
        std::fs::rename(&png_path, &jpg_named).unwrap();

        let img = decode_image(&jpg_named).unwrap();
        assert_eq!(img.width(), 3);
    }

    #[test]
    fn text_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fake.png"), "not an image").unwrap();

        let task = ConversionTask::new(dir.path(), "fake.png");
        let err = convert_single(&task, &WebpSettings::default()).unwrap_err();

        assert!(matches!(err, ConverterError::Decode { .. }));
        assert!(!dir.path().join("fake.webp").exists());
    }

    #[test]
    fn unwritable_output_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::new(2, 2).save(dir.path().join("a.png")).unwrap();
        // a directory squatting on the output name cannot be overwritten by a file write
        std::fs::create_dir(dir.path().join("a.webp")).unwrap();

        let task = ConversionTask::new(dir.path(), "a.png");
        let err = convert_single(&task, &WebpSettings::default()).unwrap_err();
        assert!(matches!(err, ConverterError::Write { .. }));
    }
}
