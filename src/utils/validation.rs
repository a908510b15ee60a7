use crate::utils::error::{IconError, Result};
use std::collections::HashSet;
use std::path::Path;

pub const MAX_ICON_SIZE: u32 = 4096;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_sizes(field_name: &str, sizes: &[u32]) -> Result<()> {
    if sizes.is_empty() {
        return Err(IconError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one icon size is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for &size in sizes {
        validate_range(field_name, size, 1, MAX_ICON_SIZE)?;
        if !seen.insert(size) {
            return Err(IconError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: size.to_string(),
                reason: "Duplicate icon size".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_name_template(field_name: &str, template: &str) -> Result<()> {
    let reason = if template.trim().is_empty() {
        Some("Template cannot be empty or whitespace-only")
    } else if !template.contains("{size}") {
        Some("Template must contain the {size} placeholder")
    } else if !template.to_ascii_lowercase().ends_with(".png") {
        Some("Icons are always PNG encoded; template must end with .png")
    } else if template.contains('/') || template.contains('\\') {
        Some("Template is a file name and cannot contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(IconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
