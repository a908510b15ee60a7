use image::imageops::FilterType;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_SOURCE: &str = "images/books_icon.png";
pub const DEFAULT_OUTPUT_DIR: &str = "images";
pub const DEFAULT_NAME_TEMPLATE: &str = "icon{size}.png";
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    pub const NAMES: [&'static str; 5] = ["nearest", "triangle", "catmull-rom", "gaussian", "lanczos3"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Triangle => "triangle",
            ResizeFilter::CatmullRom => "catmull-rom",
            ResizeFilter::Gaussian => "gaussian",
            ResizeFilter::Lanczos3 => "lanczos3",
        }
    }

    pub fn filter_type(&self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "nearest" => Ok(ResizeFilter::Nearest),
            "triangle" => Ok(ResizeFilter::Triangle),
            "catmull-rom" | "catmullrom" => Ok(ResizeFilter::CatmullRom),
            "gaussian" => Ok(ResizeFilter::Gaussian),
            "lanczos3" | "lanczos" => Ok(ResizeFilter::Lanczos3),
            other => Err(format!(
                "unknown filter '{}', expected one of: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl TryFrom<String> for ResizeFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One planned output icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub file_name: String,
}

impl IconSpec {
    pub fn from_template(template: &str, size: u32) -> Self {
        Self {
            size,
            file_name: template.replace("{size}", &size.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconResult {
    Created(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOutcome {
    pub size: u32,
    pub result: IconResult,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<IconOutcome>,
}

impl GenerationReport {
    pub fn created(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            IconResult::Created(path) => Some(path),
            IconResult::Failed(_) => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = (u32, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            IconResult::Failed(reason) => Some((o.size, reason.as_str())),
            IconResult::Created(_) => None,
        })
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn summary_line(&self) -> String {
        if self.all_succeeded() {
            return "All icons created successfully!".to_string();
        }
        let failed = self.failed().count();
        format!(
            "Finished: {} of {} icons created, {} failed",
            self.outcomes.len() - failed,
            self.outcomes.len(),
            failed
        )
    }
}
