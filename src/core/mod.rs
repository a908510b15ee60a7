pub mod generator;
pub mod placeholder;
pub mod resize;

pub use crate::domain::model::{GenerationReport, IconOutcome, IconResult, IconSpec, ResizeFilter};
pub use crate::domain::ports::{ConfigProvider, IconSink};
pub use crate::utils::error::Result;
