use crate::domain::model::{AlignmentPlan, Operation};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn spec_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn scaffold_enabled(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Operation>>;
    async fn transform(&self, operations: Vec<Operation>) -> Result<AlignmentPlan>;
    async fn load(&self, plan: AlignmentPlan) -> Result<String>;
}
