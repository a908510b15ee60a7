use crate::domain::model::ResizeFilter;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Where encoded icons end up.
pub trait IconSink {
    /// Make the destination ready; a destination that already exists is not an error.
    fn prepare(&self) -> Result<()>;

    /// Write one encoded icon, replacing any previous file. Returns the written path.
    fn write_icon(&self, file_name: &str, data: &[u8]) -> Result<PathBuf>;

    /// Path an icon would be written to, without touching the filesystem.
    fn resolve(&self, file_name: &str) -> PathBuf;
}

pub trait ConfigProvider {
    fn source_path(&self) -> &Path;
    fn output_dir(&self) -> &Path;
    fn sizes(&self) -> &[u32];
    fn filter(&self) -> ResizeFilter;
    fn name_template(&self) -> &str;
    fn placeholder(&self) -> bool;
}
