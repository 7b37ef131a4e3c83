pub mod alignment;
pub mod catalogue;
pub mod engine;
pub mod grouping;
pub mod pipeline;
pub mod scoring;

pub use crate::domain::model::{
    AlignmentPlan, DomainAlignment, DomainEntry, HttpMethod, Operation, OperationAlignment,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
