use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct NavigatorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> NavigatorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🔎 Reading operations...");
        let operations = self.pipeline.extract().await?;
        tracing::info!("Extracted {} operations", operations.len());

        tracing::info!("🧭 Aligning operations to domains...");
        let plan = self.pipeline.transform(operations).await?;
        let unmapped = plan
            .domains
            .iter()
            .filter(|d| d.is_fallback())
            .map(|d| d.operations.len())
            .sum::<usize>();
        tracing::info!(
            "Aligned {} operations into {} domains ({} unmapped)",
            plan.operation_count(),
            plan.domains.len(),
            unmapped
        );

        tracing::info!("💾 Writing results...");
        let output_path = self.pipeline.load(plan).await?;
        tracing::info!("Alignment complete. Output under {}", output_path);

        Ok(output_path)
    }
}
