pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, CliConfig, GeneratorConfig};
pub use crate::core::{generator::IconGenerator, resize::resize_to_png};
pub use domain::model::{GenerationReport, ResizeFilter};
pub use utils::error::{IconError, Result};
