pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

const SPEC_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "domain-navigator"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Align OpenAPI operations to business-capability domains")
)]
pub struct CliConfig {
    /// OpenAPI document to classify (.yaml, .yml or .json)
    #[cfg_attr(feature = "cli", arg(long))]
    pub spec: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "generated"))]
    pub out: String,

    /// Also emit one service skeleton per aligned domain
    #[cfg_attr(feature = "cli", arg(long))]
    pub scaffold: bool,

    /// Domain catalogue YAML; the bundled catalogue is used when omitted
    #[cfg_attr(feature = "cli", arg(long))]
    pub catalogue: Option<String>,

    /// TOML policy file with scoring weights and output names
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<String>,

    /// Override the minimum score an operation needs to leave UNMAPPED
    #[cfg_attr(feature = "cli", arg(long))]
    pub min_score: Option<f64>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn spec_path(&self) -> &str {
        &self.spec
    }

    fn output_path(&self) -> &str {
        &self.out
    }

    fn scaffold_enabled(&self) -> bool {
        self.scaffold
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("spec", &self.spec)?;
        validation::validate_file_extension("spec", &self.spec, &SPEC_EXTENSIONS)?;
        validation::validate_path("out", &self.out)?;
        if let Some(catalogue) = &self.catalogue {
            validation::validate_path("catalogue", catalogue)?;
        }
        if let Some(min_score) = self.min_score {
            validation::validate_non_negative("min_score", min_score)?;
        }
        Ok(())
    }
}
