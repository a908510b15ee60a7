use crate::domain::ports::IconSink;
use crate::utils::error::{IconError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }
}

impl IconSink for LocalStorage {
    fn prepare(&self) -> Result<()> {
        if self.base_path.is_dir() {
            return Ok(());
        }
        tracing::debug!("Creating output directory {}", self.base_path.display());
        fs::create_dir_all(&self.base_path).map_err(|source| IconError::OutputDirError {
            path: self.base_path.clone(),
            source,
        })
    }

    fn write_icon(&self, file_name: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.resolve(file_name);

        // 先寫入同目錄的暫存檔再改名，失敗時只會清掉自己的暫存檔
        let mut staged = NamedTempFile::new_in(&self.base_path)?;
        staged.write_all(data)?;
        staged.as_file().sync_all()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        staged.persist(&full_path).map_err(|e| {
            tracing::debug!("Could not move icon into {}: {}", full_path.display(), e.error);
            e.error
        })?;

        Ok(full_path)
    }

    fn resolve(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }
}
