use tracing::{debug, info, trace, warn};

use crate::core::{ConversionResult, ConversionTask, ConverterConfig};
use crate::processing::convert::convert_single;
use crate::utils::{ConverterError, ConverterResult, SourceFormat, list_dir_names};

/// Converts every `.png` / `.jpg` directly inside a directory to WebP.
pub struct BatchConverter {
    config: ConverterConfig,
}

impl BatchConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Lists the directory and builds one task per matching entry, in
    /// listing order.
    pub async fn collect_tasks(&self) -> ConverterResult<Vec<ConversionTask>> {
        let dir = &self.config.image_dir;
        let names = list_dir_names(dir).await?;

        let tasks = names
            .iter()
            .filter_map(|name| match SourceFormat::from_os_name(name) {
                Some(format) => {
                    trace!("Matched {:?} ({:?})", name, format);
                    Some(ConversionTask::new(dir, name))
                }
                None => {
                    trace!("Skipping {:?}", name);
                    None
                }
            })
            .collect();
        Ok(tasks)
    }

    /// Runs the batch, calling `on_converted` after each file is written.
    ///
    /// Files are converted strictly one at a time. The first failure aborts
    /// the run: outputs already written stay, the remaining files are not
    /// touched.
    pub async fn run(
        &self,
        mut on_converted: impl FnMut(&ConversionResult),
    ) -> ConverterResult<Vec<ConversionResult>> {
        self.config.webp.validate()?;

        let tasks = self.collect_tasks().await?;
        info!(
            "Converting {} image(s) in {}",
            tasks.len(),
            self.config.image_dir.display()
        );

        let mut results = Vec::with_capacity(tasks.len());
        for task in tasks {
            let settings = self.config.webp;

            let result = tokio::task::spawn_blocking(move || convert_single(&task, &settings))
                .await
                .map_err(|e| ConverterError::processing(format!("Task panicked: {e}")))?;

            match result {
                Ok(converted) => {
                    on_converted(&converted);
                    results.push(converted);
                }
                Err(e) => {
                    warn!(
                        "Aborting batch at {} after {} conversion(s): {}",
                        e.path().map_or_else(|| "?".into(), |p| p.display().to_string()),
                        results.len(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        debug!("Batch finished: {} file(s) converted", results.len());
        Ok(results)
    }
}
