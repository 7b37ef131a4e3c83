use crate::domain::model::{HttpMethod, Operation};
use crate::utils::error::{NavigatorError, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Path-item keys that carry operations, in the order they are emitted.
const OPERATION_KEYS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Reads the operation list out of an OpenAPI document (YAML or JSON).
#[derive(Debug, Clone, Default)]
pub struct OpenApiReader;

impl OpenApiReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_operations<P: AsRef<Path>>(&self, spec_path: P) -> Result<Vec<Operation>> {
        let spec_path = spec_path.as_ref();
        if !spec_path.exists() {
            return Err(NavigatorError::SpecNotFound {
                path: spec_path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(spec_path)?;
        let operations = self.parse_operations(&content, &spec_path.display().to_string())?;
        tracing::info!("Parsed {} operations from {}", operations.len(), spec_path.display());
        Ok(operations)
    }

    /// `source` is only used in error messages.
    pub fn parse_operations(&self, content: &str, source: &str) -> Result<Vec<Operation>> {
        let document: Value =
            serde_yaml::from_str(content).map_err(|e| NavigatorError::SpecParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let paths = document
            .get("paths")
            .and_then(Value::as_mapping)
            .ok_or_else(|| NavigatorError::SpecParseError {
                path: source.to_string(),
                message: "document has no 'paths' section".to_string(),
            })?;

        let mut operations = Vec::new();
        for (key, item) in paths {
            let (Some(path), Some(item)) = (key.as_str(), item.as_mapping()) else {
                tracing::debug!("Skipping non-object path item {:?}", key);
                continue;
            };
            for method in OPERATION_KEYS {
                if let Some(operation) = item.get(method).and_then(Value::as_mapping) {
                    operations.push(to_operation(path, method, operation));
                }
            }
        }

        Ok(operations)
    }
}

fn to_operation(path: &str, method: &str, operation: &Mapping) -> Operation {
    let text = |key: &str| {
        operation
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    let tags = operation
        .get("tags")
        .and_then(Value::as_sequence)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Operation::new(
        path,
        HttpMethod::from(method),
        text("operationId"),
        text("summary"),
        text("description"),
        tags,
    )
}
