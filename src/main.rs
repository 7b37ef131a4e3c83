use clap::Parser;
use domain_navigator::utils::error::{ErrorSeverity, NavigatorError};
use domain_navigator::utils::{logger, validation::Validate};
use domain_navigator::{
    Aligner, AlignmentPipeline, CliConfig, DomainCatalogue, LocalStorage, NavigatorEngine,
    TomlConfig,
};
use std::sync::Arc;

fn fail(stage: &str, e: &NavigatorError) -> ! {
    tracing::error!("❌ {}: {}", stage, e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting domain-navigator");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail("Configuration validation failed", &e);
    }

    // CLI flags win over the policy file, which wins over built-in defaults
    let policy = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading policy from: {}", path);
            let policy = TomlConfig::from_file(path).unwrap_or_else(|e| fail("Failed to load config", &e));
            if let Err(e) = policy.validate() {
                fail("Policy validation failed", &e);
            }
            policy
        }
        None => TomlConfig::default(),
    };

    let mut weights = policy.scoring;
    if let Some(min_score) = config.min_score {
        tracing::info!("🔧 Minimum score overridden to: {}", min_score);
        weights.min_score = min_score;
    }

    let catalogue = match config.catalogue.as_deref().or(policy.catalogue_path()) {
        Some(path) => DomainCatalogue::from_file(path),
        None => DomainCatalogue::bundled(),
    };
    tracing::info!("📚 Catalogue holds {} domains", catalogue.len());

    let aligner = Aligner::new(Arc::new(catalogue), weights);
    let storage = LocalStorage::new(config.out.clone());
    let pipeline = AlignmentPipeline::new(storage, config, aligner).with_output(policy.output);
    let engine = NavigatorEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Alignment completed successfully!");
            println!("✅ Alignment completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Alignment failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
