//! Core types shared by the converter.
//!
//! - [`ConverterConfig`]: directory and encoder settings for a batch run
//! - [`WebpSettings`]: quality and optimize flag
//! - [`ConversionTask`]: one source/output pair
//! - [`ConversionResult`]: sizes and names of one converted file

mod types;
mod task;

pub use types::{
    ConverterConfig, WebpSettings, ConversionResult,
    DEFAULT_IMAGE_DIR, DEFAULT_WEBP_QUALITY,
};
pub use task::ConversionTask;
