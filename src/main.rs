// Converts every .png / .jpg in ./images to a WebP sibling.
// All logic lives in the library; this file wires logging and the console.

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use webp_batch_lib::{BatchConverter, ConverterConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr) // stdout is reserved for the "Converted" lines
        .compact()
        .init();

    let config = ConverterConfig::default();
    debug!("Config: {}", serde_json::to_string(&config)?);

    let converter = BatchConverter::new(config);
    let results = converter
        .run(|result| println!("{}", result.message()))
        .await
        .with_context(|| {
            format!(
                "batch conversion in '{}' failed",
                converter.config().image_dir.display()
            )
        })?;

    info!("Converted {} image(s)", results.len());
    Ok(())
}
