//! Conversion task definition.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::utils::webp_file_name;

/// A single file conversion: one source image and its WebP sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    /// File name of the source image, exactly as listed
    pub source_name: OsString,
    /// File name of the WebP output
    pub webp_name: OsString,
    /// Path to the source image file
    pub source_path: PathBuf,
    /// Path where the WebP image will be written
    pub output_path: PathBuf,
}

impl ConversionTask {
    /// Builds the task for `name` inside `dir`; the output lands in the same directory.
    pub fn new(dir: impl AsRef<Path>, name: impl AsRef<OsStr>) -> Self {
        let dir = dir.as_ref();
        let name = name.as_ref();
        let webp_name = webp_file_name(name);
        Self {
            source_path: dir.join(name),
            output_path: dir.join(&webp_name),
            source_name: name.to_os_string(),
            webp_name,
        }
    }
}
