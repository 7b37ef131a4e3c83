use crate::adapters::{OpenApiReader, ReportWriter, ScaffoldGenerator};
use crate::config::toml_config::OutputConfig;
use crate::core::alignment::Aligner;
use crate::core::grouping::group_by_domain;
use crate::core::scoring::{JaroWinkler, Similarity};
use crate::core::{AlignmentPlan, ConfigProvider, Operation, Pipeline, Storage};
use crate::utils::error::Result;
use chrono::Local;

/// Reads the OpenAPI document, aligns and groups its operations, then writes reports
/// (and optionally scaffolds) through `Storage`.
pub struct AlignmentPipeline<S: Storage, C: ConfigProvider, M: Similarity = JaroWinkler> {
    storage: S,
    config: C,
    aligner: Aligner<M>,
    reader: OpenApiReader,
    reports: ReportWriter,
    scaffolder: ScaffoldGenerator,
    output: OutputConfig,
}

impl<S: Storage, C: ConfigProvider, M: Similarity> AlignmentPipeline<S, C, M> {
    pub fn new(storage: S, config: C, aligner: Aligner<M>) -> Self {
        Self {
            storage,
            config,
            aligner,
            reader: OpenApiReader::new(),
            reports: ReportWriter::new(),
            scaffolder: ScaffoldGenerator::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.scaffolder = ScaffoldGenerator::new(output.base_package.clone());
        self.output = output;
        self
    }

    fn resolved_spec_path(&self) -> String {
        let raw = self.config.spec_path();
        std::fs::canonicalize(raw)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| raw.to_string())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, M: Similarity> Pipeline for AlignmentPipeline<S, C, M> {
    async fn extract(&self) -> Result<Vec<Operation>> {
        tracing::info!("Starting alignment for spec {}", self.resolved_spec_path());
        self.reader.read_operations(self.config.spec_path())
    }

    async fn transform(&self, operations: Vec<Operation>) -> Result<AlignmentPlan> {
        if self.aligner.catalogue().is_empty() {
            tracing::warn!("Domain catalogue is empty; every operation will be UNMAPPED");
        }

        let aligned = self.aligner.align(&operations);
        let domains = group_by_domain(aligned);

        for group in &domains {
            tracing::debug!(
                "{} ({}): {} operations",
                group.domain.name,
                group.domain.code,
                group.operations.len()
            );
        }

        Ok(AlignmentPlan {
            spec_path: self.resolved_spec_path(),
            domains,
        })
    }

    async fn load(&self, plan: AlignmentPlan) -> Result<String> {
        let generated_at = Local::now();

        let markdown = self.reports.render_markdown(&plan, generated_at);
        self.storage
            .write_file(&self.output.report_file, markdown.as_bytes())
            .await?;
        tracing::info!("📝 Wrote {}", self.output.report_file);

        let json = self.reports.render_json(&plan, generated_at)?;
        self.storage
            .write_file(&self.output.json_file, json.as_bytes())
            .await?;
        tracing::info!("📝 Wrote {}", self.output.json_file);

        if self.config.scaffold_enabled() {
            let files = self.scaffolder.render(&plan);
            for file in &files {
                let path = format!("{}/{}", self.output.scaffold_dir, file.path);
                self.storage.write_file(&path, file.contents.as_bytes()).await?;
            }
            for group in plan.aligned_domains() {
                tracing::info!("🏗️ Scaffolded microservice for {}", group.domain.name);
            }
        } else {
            tracing::info!("Skipping microservice scaffold generation (use --scaffold to enable).");
        }

        Ok(self.config.output_path().to_string())
    }
}
