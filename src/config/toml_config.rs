use crate::core::seo::SITE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"));

const DEFAULT_RELATED_COUNT: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub listings: ListingsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: Option<String>,
    #[serde(default = "default_site_url")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsSection {
    #[serde(default = "default_related_count")]
    pub related_count: usize,
    pub top_count: Option<usize>,
}

fn default_site_url() -> String {
    SITE_URL.to_string()
}

fn default_related_count() -> usize {
    DEFAULT_RELATED_COUNT
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: None,
            url: default_site_url(),
        }
    }
}

impl Default for ListingsSection {
    fn default() -> Self {
        Self {
            related_count: default_related_count(),
            top_count: None,
        }
    }
}

impl SiteConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading site config from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| DirectoryError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("cannot read {}: {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_site_origin("site.url", &self.site.url)?;
        validation::validate_count("listings.related_count", self.listings.related_count)?;

        if let Some(top) = self.listings.top_count {
            validation::validate_count("listings.top_count", top)?;
        }

        Ok(())
    }

    pub fn site_name(&self) -> &str {
        self.site.name.as_deref().unwrap_or("Lawyer Directory")
    }
}

impl ConfigProvider for SiteConfig {
    fn site_url(&self) -> &str {
        &self.site.url
    }

    fn related_count(&self) -> usize {
        self.listings.related_count
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
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
[site]
name = "Car Accident Lawyer Richardson"
url = "https://example.com"

[listings]
related_count = 4
top_count = 10
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site_name(), "Car Accident Lawyer Richardson");
        assert_eq!(config.site_url(), "https://example.com");
        assert_eq!(config.related_count(), 4);
        assert_eq!(config.listings.top_count, Some(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();

        assert_eq!(config.site_url(), SITE_URL);
        assert_eq!(config.related_count(), DEFAULT_RELATED_COUNT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LAWYER_DIRECTORY_TEST_ORIGIN", "https://staging.example.com");

        let config = SiteConfig::from_toml_str(
            r#"
[site]
url = "${LAWYER_DIRECTORY_TEST_ORIGIN}"
"#,
        )
        .unwrap();
        assert_eq!(config.site_url(), "https://staging.example.com");

        std::env::remove_var("LAWYER_DIRECTORY_TEST_ORIGIN");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = SiteConfig::from_toml_str("[site]\nurl = \"not-a-url\"\n").unwrap();
        assert!(bad_url.validate().is_err());

        let zero_related = SiteConfig::from_toml_str("[listings]\nrelated_count = 0\n").unwrap();
        assert!(zero_related.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SiteConfig::from_toml_str("[site\nurl = 1").unwrap_err();

        assert!(matches!(err, DirectoryError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let err = SiteConfig::from_file("/nonexistent/site.toml").unwrap_err();

        assert!(matches!(err, DirectoryError::ConfigValidationError { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[listings]\nrelated_count = 2\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.related_count(), 2);
    }
}
