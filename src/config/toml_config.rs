use crate::adapters::report::{DEFAULT_JSON_FILE, DEFAULT_REPORT_FILE};
use crate::adapters::scaffold::{DEFAULT_BASE_PACKAGE, DEFAULT_SCAFFOLD_DIR};
use crate::core::scoring::ScoringWeights;
use crate::utils::error::{NavigatorError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional policy file. Every table and key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalogue: CatalogueConfig,
    #[serde(default)]
    pub scoring: ScoringWeights,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub report_file: String,
    pub json_file: String,
    pub scaffold_dir: String,
    pub base_package: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_file: DEFAULT_REPORT_FILE.to_string(),
            json_file: DEFAULT_JSON_FILE.to_string(),
            scaffold_dir: DEFAULT_SCAFFOLD_DIR.to_string(),
            base_package: DEFAULT_BASE_PACKAGE.to_string(),
        }
    }
}

impl TomlConfig {
    /// Reads and parses a policy file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NavigatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NavigatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// `${VAR}` is replaced from the environment; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NavigatorError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn catalogue_path(&self) -> Option<&str> {
        self.catalogue.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        for (field, value) in [
            ("scoring.keyword_substring", s.keyword_substring),
            ("scoring.keyword_fuzzy", s.keyword_fuzzy),
            ("scoring.tag_keyword", s.tag_keyword),
            ("scoring.name_substring", s.name_substring),
            ("scoring.name_similarity_factor", s.name_similarity_factor),
            ("scoring.code_substring", s.code_substring),
            ("scoring.min_score", s.min_score),
        ] {
            validation::validate_non_negative(field, value)?;
        }
        validation::validate_range("scoring.fuzzy_cutoff", s.fuzzy_cutoff, 0.0, 1.0)?;

        if let Some(path) = self.catalogue_path() {
            validation::validate_path("catalogue.path", path)?;
        }
        validation::validate_path("output.report_file", &self.output.report_file)?;
        validation::validate_path("output.json_file", &self.output.json_file)?;
        validation::validate_path("output.scaffold_dir", &self.output.scaffold_dir)?;
        validation::validate_non_empty_string("output.base_package", &self.output.base_package)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.scoring.min_score, 0.3);
        assert_eq!(config.output.report_file, "alignment-report.md");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_scoring_override() {
        let toml_content = r#"
[scoring]
min_score = 0.5
keyword_substring = 2.0

[output]
base_package = "org.bank"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.scoring.min_score, 0.5);
        assert_eq!(config.scoring.keyword_substring, 2.0);
        assert_eq!(config.scoring.fuzzy_cutoff, 0.9);
        assert_eq!(config.output.base_package, "org.bank");
        assert_eq!(config.output.scaffold_dir, "microservices");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NAVIGATOR_TEST_CATALOGUE", "/etc/domains.yml");

        let toml_content = r#"
[catalogue]
path = "${NAVIGATOR_TEST_CATALOGUE}"

[output]
json_file = "${NAVIGATOR_TEST_UNSET_VAR}.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalogue_path(), Some("/etc/domains.yml"));
        assert_eq!(config.output.json_file, "${NAVIGATOR_TEST_UNSET_VAR}.json");

        std::env::remove_var("NAVIGATOR_TEST_CATALOGUE");
    }

    #[test]
    fn test_config_validation() {
        let negative = TomlConfig::from_toml_str("[scoring]\ntag_keyword = -1.0\n").unwrap();
        assert!(negative.validate().is_err());

        let cutoff = TomlConfig::from_toml_str("[scoring]\nfuzzy_cutoff = 1.2\n").unwrap();
        assert!(cutoff.validate().is_err());

        let package = TomlConfig::from_toml_str("[output]\nbase_package = \" \"\n").unwrap();
        assert!(package.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = TomlConfig::from_toml_str("[scoring\nmin_score = ").unwrap_err();
        assert!(matches!(err, NavigatorError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalogue]\npath = \"domains.yml\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.catalogue_path(), Some("domains.yml"));
    }
}
