use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Source image {} not found!", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Cannot create output directory {}: {source}", .path.display())]
    OutputDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Filesystem,
    Image,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IconError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IconError::SourceNotFound { .. } => ErrorCategory::Precondition,
            IconError::OutputDirError { .. } | IconError::IoError(_) => ErrorCategory::Filesystem,
            IconError::ImageError(_) => ErrorCategory::Image,
            IconError::ConfigError { .. }
            | IconError::ConfigValidationError { .. }
            | IconError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 嚴重程度：Low/Medium 只影響單一尺寸，High/Critical 會中止整個流程
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IconError::ImageError(_) => ErrorSeverity::Low,
            IconError::IoError(_) => ErrorSeverity::Medium,
            IconError::SourceNotFound { .. }
            | IconError::ConfigError { .. }
            | IconError::ConfigValidationError { .. }
            | IconError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            IconError::OutputDirError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Fatal errors exit with 1; anything else reaching the top level is only reported.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 0,
            ErrorSeverity::High | ErrorSeverity::Critical => 1,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.exit_code() != 0
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IconError::SourceNotFound { .. } => format!("Error: {}", self),
            IconError::OutputDirError { path, .. } => {
                format!("Error: could not create output directory {}", path.display())
            }
            IconError::ImageError(e) => format!("Could not process image: {}", e),
            IconError::IoError(e) => format!("File system error: {}", e),
            _ => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Precondition => {
                "Place the source image at the configured path or pass --source"
            }
            ErrorCategory::Filesystem => {
                "Check that the output directory is writable and the disk is not full"
            }
            ErrorCategory::Image => "Make sure the source is a valid, supported raster image",
            ErrorCategory::Configuration => {
                "Check the command line flags and the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
