// Adapters layer: readers and writers for formats outside the classification core.

pub mod openapi;
pub mod report;
pub mod scaffold;

pub use openapi::OpenApiReader;
pub use report::ReportWriter;
pub use scaffold::{GeneratedFile, ScaffoldGenerator};
