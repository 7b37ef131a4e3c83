use crate::core::catalogue::DomainCatalogue;
use crate::core::scoring::{JaroWinkler, ScoredMatch, Scorer, ScoringWeights, Similarity};
use crate::domain::model::{DomainEntry, Operation, OperationAlignment};
use std::sync::Arc;

/// Picks the best catalogue entry for each operation.
pub struct Aligner<M: Similarity = JaroWinkler> {
    catalogue: Arc<DomainCatalogue>,
    scorer: Scorer<M>,
}

impl Aligner<JaroWinkler> {
    pub fn new(catalogue: Arc<DomainCatalogue>, weights: ScoringWeights) -> Self {
        Self::with_scorer(catalogue, Scorer::new(weights))
    }
}

impl<M: Similarity> Aligner<M> {
    pub fn with_scorer(catalogue: Arc<DomainCatalogue>, scorer: Scorer<M>) -> Self {
        Self { catalogue, scorer }
    }

    pub fn catalogue(&self) -> &DomainCatalogue {
        &self.catalogue
    }

    /// One alignment per operation, in input order.
    pub fn align(&self, operations: &[Operation]) -> Vec<OperationAlignment> {
        operations.iter().map(|op| self.best_domain_for(op)).collect()
    }

    fn best_domain_for(&self, op: &Operation) -> OperationAlignment {
        let searchable_text = op.searchable_text();
        let mut best: Option<(&Arc<DomainEntry>, ScoredMatch)> = None;

        for domain in self.catalogue.domains() {
            let candidate = self.scorer.score(domain, &searchable_text, op.tags());
            // strict comparison keeps the earliest entry on ties
            let better = match &best {
                Some((_, current)) => candidate.score > current.score,
                None => true,
            };
            if better {
                best = Some((domain, candidate));
            }
        }

        match best {
            Some((domain, matched)) if matched.score >= self.scorer.weights().min_score => {
                tracing::trace!(
                    "{} {} -> {} ({:.2})",
                    op.method(),
                    op.path(),
                    domain.code,
                    matched.score
                );
                OperationAlignment {
                    operation: op.clone(),
                    domain: Arc::clone(domain),
                    score: matched.score,
                    matched_keywords: matched.keywords,
                }
            }
            _ => OperationAlignment {
                operation: op.clone(),
                domain: Arc::clone(self.catalogue.fallback()),
                score: 0.0,
                matched_keywords: Vec::new(),
            },
        }
    }
}
