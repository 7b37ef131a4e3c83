use crate::domain::model::{DomainAlignment, OperationAlignment};
use crate::utils::naming;
use std::collections::HashMap;

/// Buckets alignments by normalized domain code, in first-seen order.
///
/// The domain attached to each bucket is the one carried by the first
/// alignment seen for that code; later alignments never replace it.
pub fn group_by_domain(alignments: Vec<OperationAlignment>) -> Vec<DomainAlignment> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut grouped: Vec<DomainAlignment> = Vec::new();

    for alignment in alignments {
        let code = naming::safe_code(&alignment.domain.code);
        match index.get(&code) {
            Some(&slot) => grouped[slot].operations.push(alignment),
            None => {
                index.insert(code, grouped.len());
                grouped.push(DomainAlignment {
                    domain: alignment.domain.clone(),
                    operations: vec![alignment],
                });
            }
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DomainEntry, HttpMethod, Operation};
    use std::sync::Arc;

    fn aligned(path: &str, domain: &Arc<DomainEntry>) -> OperationAlignment {
        OperationAlignment {
            operation: Operation::new(path, HttpMethod::Get, None, None, None, vec![]),
            domain: Arc::clone(domain),
            score: 1.0,
            matched_keywords: vec![],
        }
    }

    fn domain(code: &str, name: &str) -> Arc<DomainEntry> {
        Arc::new(DomainEntry::new(code, name, vec![], vec![]))
    }

    #[test]
    fn test_lowercase_unmapped_joins_fallback_bucket() {
        let ps = domain("PS", "Payment Services");
        let lower = domain("unmapped", "Unmapped");
        let fallback = Arc::new(DomainEntry::fallback());

        let groups = group_by_domain(vec![
            aligned("/a", &ps),
            aligned("/b", &lower),
            aligned("/c", &ps),
            aligned("/d", &fallback),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].domain.code, "PS");
        assert_eq!(groups[0].operations.len(), 2);
        assert!(groups[1].is_fallback());
        assert_eq!(groups[1].operations.len(), 2);
        // first-seen representative keeps its original spelling
        assert_eq!(groups[1].domain.code, "unmapped");
    }

    #[test]
    fn test_blank_code_normalizes_to_unmapped() {
        let blank = domain("  ", "Nameless");
        let fallback = Arc::new(DomainEntry::fallback());

        let groups = group_by_domain(vec![aligned("/x", &blank), aligned("/y", &fallback)]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].domain.name, "Nameless");
        assert_eq!(groups[0].operations.len(), 2);
    }

    #[test]
    fn test_first_seen_domain_is_representative() {
        let first = domain("ps", "First");
        let second = domain("PS ", "Second");

        let groups = group_by_domain(vec![aligned("/a", &first), aligned("/b", &second)]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].domain.name, "First");
        assert_eq!(groups[0].operations[1].domain.name, "Second");
    }

    #[test]
    fn test_every_operation_lands_exactly_once() {
        let codes = ["PS", "CA", "ps", "", "FX", "CA"];
        let domains: Vec<_> = codes.iter().map(|c| domain(c, c)).collect();
        let input: Vec<_> = domains
            .iter()
            .enumerate()
            .map(|(i, d)| aligned(&format!("/op/{}", i), d))
            .collect();

        let groups = group_by_domain(input);

        let mut paths: Vec<_> = groups
            .iter()
            .flat_map(|g| g.operations.iter().map(|a| a.operation.path().to_string()))
            .collect();
        paths.sort();
        let expected: Vec<_> = (0..codes.len()).map(|i| format!("/op/{}", i)).collect();
        assert_eq!(paths, expected);
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_domain(Vec::new()).is_empty());
    }
}
