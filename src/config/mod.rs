pub mod toml_config;

use crate::domain::model::{
    ResizeFilter, DEFAULT_NAME_TEMPLATE, DEFAULT_OUTPUT_DIR, DEFAULT_SIZES, DEFAULT_SOURCE,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "icon-gen")]
#[command(about = "Generate square PNG application icons from a single source image")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source image [default: images/books_icon.png]
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory the icons are written to [default: images]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Comma separated icon sizes in pixels [default: 16,48,128]
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<u32>,

    /// Resampling filter: nearest, triangle, catmull-rom, gaussian, lanczos3 [default: lanczos3]
    #[arg(long)]
    pub filter: Option<ResizeFilter>,

    /// Output file name, {size} is replaced by the icon size [default: icon{size}.png]
    #[arg(long)]
    pub name_template: Option<String>,

    #[arg(long, help = "Draw blue placeholder icons instead of resizing the source image")]
    pub placeholder: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each icon")]
    pub monitor: bool,

    #[arg(long, help = "Exit with status 2 if any icon size fails")]
    pub strict: bool,

    #[arg(long, help = "Show what would be generated without writing anything")]
    pub dry_run: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub filter: ResizeFilter,
    pub name_template: String,
    pub placeholder: bool,
    pub monitor: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            filter: ResizeFilter::default(),
            name_template: DEFAULT_NAME_TEMPLATE.to_string(),
            placeholder: false,
            monitor: false,
        }
    }
}

impl GeneratorConfig {
    /// 合併設定：命令列 > TOML 檔案 > 預設值
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let defaults = Self::default();
        let file = file.cloned().unwrap_or_default();
        let monitor = cli.monitor || file.monitoring_enabled();

        let sizes = if !cli.sizes.is_empty() {
            cli.sizes.clone()
        } else {
            file.output.sizes.unwrap_or(defaults.sizes)
        };

        Self {
            source: cli
                .source
                .clone()
                .or(file.source.path)
                .unwrap_or(defaults.source),
            output_dir: cli
                .output_dir
                .clone()
                .or(file.output.directory)
                .unwrap_or(defaults.output_dir),
            sizes,
            filter: cli.filter.or(file.resize.filter).unwrap_or(defaults.filter),
            name_template: cli
                .name_template
                .clone()
                .or(file.output.name_template)
                .unwrap_or(defaults.name_template),
            placeholder: cli.placeholder || file.source.placeholder,
            monitor,
        }
    }

    /// Loads the TOML file named by `--config`, if any, and merges it with the flags.
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };
        Ok(Self::resolve(cli, file.as_ref()))
    }
}

impl ConfigProvider for GeneratorConfig {
    fn source_path(&self) -> &Path {
        &self.source
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    fn filter(&self) -> ResizeFilter {
        self.filter
    }

    fn name_template(&self) -> &str {
        &self.name_template
    }

    fn placeholder(&self) -> bool {
        self.placeholder
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source", &self.source)?;
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_sizes("sizes", &self.sizes)?;
        validation::validate_name_template("name_template", &self.name_template)?;
        Ok(())
    }
}
