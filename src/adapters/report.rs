use crate::domain::model::AlignmentPlan;
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write;

pub const DEFAULT_REPORT_FILE: &str = "alignment-report.md";
pub const DEFAULT_JSON_FILE: &str = "alignment.json";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDocument<'a> {
    spec_path: &'a str,
    generated_at: String,
    domains: Vec<DomainNode<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DomainNode<'a> {
    code: &'a str,
    name: &'a str,
    capabilities: &'a [String],
    operations: Vec<OperationNode<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OperationNode<'a> {
    path: &'a str,
    http_method: &'a str,
    operation_id: &'a str,
    summary: Option<&'a str>,
    score: f64,
    matched_keywords: &'a [String],
}

/// Human-readable and machine-readable summaries of one alignment plan.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_markdown(&self, plan: &AlignmentPlan, generated_at: DateTime<Local>) -> String {
        let mut out = String::new();
        out.push_str("# Modernisation alignment report\n\n");
        let _ = writeln!(out, "- Source spec: {}", plan.spec_path);
        let _ = writeln!(out, "- Generated at: {}", generated_at.to_rfc3339());
        let _ = writeln!(out, "- Domains discovered: {}\n", plan.domains.len());

        for group in &plan.domains {
            let _ = writeln!(out, "## {} ({})", group.domain.name, group.domain.code);
            if !group.domain.capabilities.is_empty() {
                let _ = writeln!(out, "- Capabilities: {}", group.domain.capabilities.join(", "));
            }
            let _ = writeln!(out, "- Operations: {}\n", group.operations.len());

            for aligned in &group.operations {
                let op = &aligned.operation;
                let _ = write!(
                    out,
                    "  - {} {} | id: {} | score: {:.2}",
                    op.method(),
                    op.path(),
                    op.operation_id(),
                    aligned.score
                );
                if !aligned.matched_keywords.is_empty() {
                    let _ = write!(out, " | keywords: {}", aligned.matched_keywords.join(", "));
                }
                if let Some(summary) = op.summary().filter(|s| !s.trim().is_empty()) {
                    let _ = write!(out, "\n    summary: {}", summary);
                }
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }

    pub fn render_json(&self, plan: &AlignmentPlan, generated_at: DateTime<Local>) -> Result<String> {
        let document = ReportDocument {
            spec_path: &plan.spec_path,
            generated_at: generated_at.to_rfc3339(),
            domains: plan
                .domains
                .iter()
                .map(|group| DomainNode {
                    code: &group.domain.code,
                    name: &group.domain.name,
                    capabilities: &group.domain.capabilities,
                    operations: group
                        .operations
                        .iter()
                        .map(|aligned| OperationNode {
                            path: aligned.operation.path(),
                            http_method: aligned.operation.method().as_str(),
                            operation_id: aligned.operation.operation_id(),
                            summary: aligned.operation.summary(),
                            score: aligned.score,
                            matched_keywords: &aligned.matched_keywords,
                        })
                        .collect(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        DomainAlignment, DomainEntry, HttpMethod, Operation, OperationAlignment,
    };
    use std::sync::Arc;

    fn sample_plan() -> AlignmentPlan {
        let ps = Arc::new(DomainEntry::new(
            "PS",
            "Payment Services",
            vec!["payment".to_string()],
            vec!["Execute payments".to_string()],
        ));
        let fallback = Arc::new(DomainEntry::fallback());

        AlignmentPlan {
            spec_path: "/specs/bank.yaml".to_string(),
            domains: vec![
                DomainAlignment {
                    domain: Arc::clone(&ps),
                    operations: vec![OperationAlignment {
                        operation: Operation::new(
                            "/payments",
                            HttpMethod::Post,
                            Some("createPayment".to_string()),
                            Some("Create a payment".to_string()),
                            None,
                            vec![],
                        ),
                        domain: ps,
                        score: 2.456,
                        matched_keywords: vec!["payment".to_string()],
                    }],
                },
                DomainAlignment {
                    domain: Arc::clone(&fallback),
                    operations: vec![OperationAlignment {
                        operation: Operation::new("/weather", HttpMethod::Get, None, None, None, vec![]),
                        domain: fallback,
                        score: 0.0,
                        matched_keywords: vec![],
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_markdown_report() {
        let md = ReportWriter::new().render_markdown(&sample_plan(), Local::now());

        assert!(md.starts_with("# Modernisation alignment report"));
        assert!(md.contains("- Source spec: /specs/bank.yaml"));
        assert!(md.contains("- Domains discovered: 2"));
        assert!(md.contains("## Payment Services (PS)"));
        assert!(md.contains("- Capabilities: Execute payments"));
        assert!(md.contains(
            "  - POST /payments | id: createPayment | score: 2.46 | keywords: payment\n    summary: Create a payment\n"
        ));
        assert!(md.contains("  - GET /weather | id: get__weather | score: 0.00\n"));
        assert!(md.contains("## Unmapped (UNMAPPED)"));
    }

    #[test]
    fn test_json_report() {
        let json = ReportWriter::new().render_json(&sample_plan(), Local::now()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["specPath"], "/specs/bank.yaml");
        assert!(value["generatedAt"].is_string());
        let domains = value["domains"].as_array().unwrap();
        assert_eq!(domains.len(), 2);
        assert_eq!(domains[0]["code"], "PS");
        assert_eq!(domains[0]["operations"][0]["httpMethod"], "POST");
        assert_eq!(domains[0]["operations"][0]["matchedKeywords"][0], "payment");
        assert_eq!(domains[1]["operations"][0]["summary"], serde_json::Value::Null);
        assert_eq!(domains[1]["operations"][0]["score"], 0.0);
    }
}
