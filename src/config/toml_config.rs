use crate::domain::model::ResizeFilter;
use crate::utils::error::{IconError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// 對應設定檔的結構，所有區段皆為選填
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub resize: ResizeSection,
    #[serde(default)]
    pub monitoring: MonitoringSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    pub path: Option<PathBuf>,
    /// 不讀取來源圖片，改為繪製佔位圖示
    #[serde(default)]
    pub placeholder: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub directory: Option<PathBuf>,
    pub name_template: Option<String>,
    pub sizes: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResizeSection {
    pub filter: Option<ResizeFilter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitoringSection {
    #[serde(default)]
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| IconError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| IconError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ICON_SOURCE})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.enabled
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.source.path {
            validation::validate_path("source.path", path)?;
        }
        if let Some(dir) = &self.output.directory {
            validation::validate_path("output.directory", dir)?;
        }
        if let Some(sizes) = &self.output.sizes {
            validation::validate_sizes("output.sizes", sizes)?;
        }
        if let Some(template) = &self.output.name_template {
            validation::validate_name_template("output.name_template", template)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
path = "assets/logo.png"
placeholder = true

[output]
directory = "dist/icons"
name_template = "logo-{size}.png"
sizes = [32, 64]

[resize]
filter = "catmull-rom"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.path, Some(PathBuf::from("assets/logo.png")));
        assert_eq!(config.output.directory, Some(PathBuf::from("dist/icons")));
        assert_eq!(config.output.sizes, Some(vec![32, 64]));
        assert!(config.source.placeholder);
        assert_eq!(config.resize.filter, Some(ResizeFilter::CatmullRom));
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.source.path.is_none());
        assert!(!config.source.placeholder);
        assert!(config.resize.filter.is_none());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ICON_GEN_TEST_SOURCE", "brand/mark.png");

        let toml_content = r#"
[source]
path = "${ICON_GEN_TEST_SOURCE}"

[output]
directory = "${ICON_GEN_TEST_UNSET_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.path, Some(PathBuf::from("brand/mark.png")));
        assert_eq!(
            config.output.directory,
            Some(PathBuf::from("${ICON_GEN_TEST_UNSET_DIR}"))
        );

        std::env::remove_var("ICON_GEN_TEST_SOURCE");
    }

    #[test]
    fn test_config_validation() {
        let bad_sizes = TomlConfig::from_toml_str("[output]\nsizes = [16, 0]\n").unwrap();
        assert!(bad_sizes.validate().is_err());

        let bad_filter = TomlConfig::from_toml_str("[resize]\nfilter = \"bicubic\"\n");
        assert!(matches!(bad_filter, Err(IconError::ConfigValidationError { .. })));

        let alias = TomlConfig::from_toml_str("[resize]\nfilter = \"Catmull_Rom\"\n").unwrap();
        assert_eq!(alias.resize.filter, Some(ResizeFilter::CatmullRom));

        let bad_template =
            TomlConfig::from_toml_str("[output]\nname_template = \"icon.png\"\n").unwrap();
        assert!(bad_template.validate().is_err());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = TomlConfig::from_toml_str("[output]\nformat = \"ico\"\n");
        assert!(matches!(result, Err(IconError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nsizes = [16, 32, 48]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.sizes, Some(vec![16, 32, 48]));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = TomlConfig::from_file("definitely/not/here.toml");
        assert!(matches!(result, Err(IconError::ConfigError { .. })));
    }
}
