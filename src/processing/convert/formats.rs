// src/processing/convert/formats.rs

//! Maps [`WebpSettings`] onto a libwebp encoder configuration.

use std::path::Path;

use image::DynamicImage;
use webp::{Encoder, WebPConfig};

use crate::core::WebpSettings;
use crate::utils::{ConverterError, ConverterResult};

/// Encodes `image` as lossy WebP.
///
/// `path` only labels errors. Images with an alpha channel are encoded from
/// RGBA so transparency survives; everything else goes through RGB.
pub fn encode_webp(
    image: &DynamicImage,
    settings: &WebpSettings,
    path: &Path,
) -> ConverterResult<Vec<u8>> {
    settings.validate()?;

    let mut config = WebPConfig::new()
        .map_err(|_| ConverterError::encode(path, "libwebp rejected the default config"))?;
    config.lossless = 0;
    config.quality = settings.quality as f32;
    config.method = settings.method();

    let (width, height) = (image.width(), image.height());

    let memory = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        Encoder::from_rgba(rgba.as_raw(), width, height).encode_advanced(&config)
    } else {
        let rgb = image.to_rgb8();
        Encoder::from_rgb(rgb.as_raw(), width, height).encode_advanced(&config)
    }
    .map_err(|e| ConverterError::encode(path, format!("{e:?}")))?;

    Ok(memory.to_vec())
}
