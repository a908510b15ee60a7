use crate::core::placeholder::placeholder_png;
use crate::core::resize::resize_to_png;
use crate::domain::model::{GenerationReport, IconOutcome, IconResult, IconSpec, ResizeFilter};
use crate::domain::ports::{ConfigProvider, IconSink};
use crate::utils::error::{IconError, Result};
use crate::utils::monitor::SystemMonitor;
use std::path::{Path, PathBuf};

pub struct IconGenerator<S: IconSink> {
    storage: S,
    source: PathBuf,
    specs: Vec<IconSpec>,
    filter: ResizeFilter,
    placeholder: bool,
    monitor: SystemMonitor,
}

impl<S: IconSink> IconGenerator<S> {
    pub fn new<C: ConfigProvider>(storage: S, config: &C) -> Self {
        Self::new_with_monitoring(storage, config, false)
    }

    pub fn new_with_monitoring<C: ConfigProvider>(
        storage: S,
        config: &C,
        monitor_enabled: bool,
    ) -> Self {
        let specs = config
            .sizes()
            .iter()
            .map(|&size| IconSpec::from_template(config.name_template(), size))
            .collect();

        Self {
            storage,
            source: config.source_path().to_path_buf(),
            specs,
            filter: config.filter(),
            placeholder: config.placeholder(),
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// 列出每個尺寸會寫入的路徑，不觸碰檔案系統
    pub fn plan(&self) -> Vec<(u32, PathBuf)> {
        self.specs
            .iter()
            .map(|spec| (spec.size, self.storage.resolve(&spec.file_name)))
            .collect()
    }

    /// Runs the whole generation.
    ///
    /// The output directory is prepared before the source check, so it exists even when
    /// the source is missing. A missing source is the only failure that aborts the run;
    /// per-size failures are printed, recorded in the report and skipped. Placeholder
    /// runs never read the source, so they skip that check.
    pub fn run(&mut self) -> Result<GenerationReport> {
        self.storage.prepare()?;

        if self.placeholder {
            tracing::info!("Drawing {} placeholder icons", self.specs.len());
        } else {
            if !self.source.exists() {
                return Err(IconError::SourceNotFound {
                    path: self.source.clone(),
                });
            }
            tracing::info!(
                "Generating {} icons from {} using {}",
                self.specs.len(),
                self.source.display(),
                self.filter
            );
        }

        let mut report = GenerationReport::default();
        for spec in &self.specs {
            println!("Creating {0}x{0} icon...", spec.size);

            let result = match self.create_icon(spec) {
                Ok(path) => {
                    println!("Created {}", path.display());
                    IconResult::Created(path)
                }
                Err(e) => {
                    tracing::warn!(
                        "Icon {} failed (Category: {:?}): {}",
                        spec.size,
                        e.category(),
                        e
                    );
                    println!("Error creating icon: {}", e);
                    IconResult::Failed(e.to_string())
                }
            };

            report.outcomes.push(IconOutcome {
                size: spec.size,
                result,
            });
            self.monitor.log_stats(&format!("icon {}x{}", spec.size, spec.size));
        }

        self.monitor.log_final_stats();
        Ok(report)
    }

    fn create_icon(&self, spec: &IconSpec) -> Result<PathBuf> {
        let png = if self.placeholder {
            placeholder_png(spec.size)?
        } else {
            resize_to_png(&self.source, spec.size, self.filter)?
        };
        self.storage.write_icon(&spec.file_name, &png)
    }
}
