pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};

pub use core::{
    alignment::Aligner,
    catalogue::DomainCatalogue,
    engine::NavigatorEngine,
    grouping::group_by_domain,
    pipeline::AlignmentPipeline,
    scoring::{JaroWinkler, Scorer, ScoringWeights, Similarity},
};
pub use domain::model::{
    AlignmentPlan, DomainAlignment, DomainEntry, HttpMethod, Operation, OperationAlignment,
};
pub use utils::error::{NavigatorError, Result};
