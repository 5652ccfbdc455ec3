// src/processing/convert/mod.rs

//! WebP conversion of a single image.
//!
//! - [`executor`]: decodes the source with the `image` crate and writes the result.
//! - [`formats`]: turns [`WebpSettings`](crate::core::WebpSettings) into a libwebp config.

mod executor;
mod formats;

pub use executor::{convert_single, decode_image};
pub use formats::encode_webp;
