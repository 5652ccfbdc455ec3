pub mod error;
pub mod formats;
pub mod fs;

pub use error::{ConverterError, ConverterResult};
pub use formats::{SourceFormat, WEBP_EXTENSION, webp_file_name};
pub use fs::{file_size_or_zero, list_dir_names};
