use crate::utils::error::{InviteError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file-based configuration. Every section and key may be omitted;
/// command line flags take precedence over anything set here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// `"lat,long"` in decimal degrees.
    pub origin: Option<String>,
    pub within_km: Option<f64>,
    pub earth_radius_km: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| InviteError::io(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InviteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INVITE_ORIGIN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InviteError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
file = "data/customers.txt"

[search]
origin = "53.3381985,-6.2592576"
within_km = 250.0
earth_radius_km = 6371.0

[output]
format = "csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.file.as_deref(), Some("data/customers.txt"));
        assert_eq!(config.search.within_km, Some(250.0));
        assert_eq!(config.output.format.as_deref(), Some("csv"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.input.file.is_none());
        assert!(config.search.origin.is_none());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let toml_content = r#"
[search]
radius = 10
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(InviteError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GEO_INVITE_TEST_ORIGIN", "37.354444,-121.969167");

        let toml_content = r#"
[search]
origin = "${GEO_INVITE_TEST_ORIGIN}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.search.origin.as_deref(), Some("37.354444,-121.969167"));

        std::env::remove_var("GEO_INVITE_TEST_ORIGIN");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[search]\nwithin_km = 42.5\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.search.within_km, Some(42.5));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        assert!(matches!(
            TomlConfig::from_file("/definitely/not/here.toml"),
            Err(InviteError::IoError { .. })
        ));
    }
}
