// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;

// Public exports for external consumers
pub use crate::core::{ConverterConfig, WebpSettings, ConversionTask, ConversionResult};
pub use crate::processing::BatchConverter;
pub use crate::utils::{ConverterError, ConverterResult};

// The binary entry point lives in main.rs; this file is the library surface
// used by it and by the integration tests.
