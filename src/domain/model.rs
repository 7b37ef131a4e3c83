use crate::utils::naming;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Other(String),
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Other(other) => other,
        }
    }
}

impl From<&str> for HttpMethod {
    fn from(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            other => HttpMethod::Other(other.to_string()),
        }
    }
}

impl From<String> for HttpMethod {
    fn from(value: String) -> Self {
        HttpMethod::from(value.as_str())
    }
}

impl From<HttpMethod> for String {
    fn from(value: HttpMethod) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One endpoint read from an API description. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    path: String,
    method: HttpMethod,
    operation_id: String,
    summary: Option<String>,
    description: Option<String>,
    tags: Vec<String>,
}

impl Operation {
    /// A blank or missing `operation_id` is replaced by [`default_operation_id`].
    pub fn new(
        path: impl Into<String>,
        method: HttpMethod,
        operation_id: Option<String>,
        summary: Option<String>,
        description: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        let path = path.into();
        let operation_id = match operation_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => default_operation_id(&method, &path),
        };
        Self {
            path,
            method,
            operation_id,
            summary,
            description,
            tags,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &HttpMethod {
        &self.method
    }

    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Lowercased `path summary description tags`, absent fields as empty strings.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.path,
            self.summary.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
            self.tags.join(" ")
        )
        .to_lowercase()
    }
}

/// `post` + `/payments/{id}` becomes `post__payments_id`.
pub fn default_operation_id(method: &HttpMethod, path: &str) -> String {
    format!("{}_{}", method.as_str().to_lowercase(), path.replace('/', "_"))
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl DomainEntry {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        keywords: Vec<String>,
        capabilities: Vec<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            keywords,
            capabilities,
        }
    }

    pub fn fallback() -> Self {
        Self::new(
            naming::FALLBACK_CODE,
            "Unmapped",
            Vec::new(),
            vec!["No aligned domain found".to_string()],
        )
    }

    pub fn is_fallback(&self) -> bool {
        naming::is_fallback_code(&self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationAlignment {
    pub operation: Operation,
    pub domain: Arc<DomainEntry>,
    pub score: f64,
    pub matched_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainAlignment {
    pub domain: Arc<DomainEntry>,
    pub operations: Vec<OperationAlignment>,
}

impl DomainAlignment {
    pub fn is_fallback(&self) -> bool {
        self.domain.is_fallback()
    }
}

/// Everything the report writer and scaffolder need from one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentPlan {
    pub spec_path: String,
    pub domains: Vec<DomainAlignment>,
}

impl AlignmentPlan {
    pub fn operation_count(&self) -> usize {
        self.domains.iter().map(|d| d.operations.len()).sum()
    }

    pub fn aligned_domains(&self) -> impl Iterator<Item = &DomainAlignment> {
        self.domains.iter().filter(|d| !d.is_fallback())
    }
}
