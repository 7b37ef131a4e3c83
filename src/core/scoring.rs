use crate::domain::model::DomainEntry;
use serde::{Deserialize, Serialize};

pub const KEYWORD_SUBSTRING_WEIGHT: f64 = 1.2;
pub const KEYWORD_FUZZY_WEIGHT: f64 = 0.8;
pub const TAG_KEYWORD_WEIGHT: f64 = 0.8;
pub const NAME_SUBSTRING_WEIGHT: f64 = 1.0;
pub const NAME_SIMILARITY_FACTOR: f64 = 0.5;
pub const CODE_SUBSTRING_WEIGHT: f64 = 0.5;
pub const FUZZY_CUTOFF: f64 = 0.9;
pub const MIN_SCORE: f64 = 0.3;

/// Scoring policy. Every field can be overridden from the `[scoring]`
/// table of the TOML config; missing keys keep the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub keyword_substring: f64,
    pub keyword_fuzzy: f64,
    pub tag_keyword: f64,
    pub name_substring: f64,
    pub name_similarity_factor: f64,
    pub code_substring: f64,
    pub fuzzy_cutoff: f64,
    pub min_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword_substring: KEYWORD_SUBSTRING_WEIGHT,
            keyword_fuzzy: KEYWORD_FUZZY_WEIGHT,
            tag_keyword: TAG_KEYWORD_WEIGHT,
            name_substring: NAME_SUBSTRING_WEIGHT,
            name_similarity_factor: NAME_SIMILARITY_FACTOR,
            code_substring: CODE_SUBSTRING_WEIGHT,
            fuzzy_cutoff: FUZZY_CUTOFF,
            min_score: MIN_SCORE,
        }
    }
}

/// A symmetric string similarity in `0.0..=1.0`, `1.0` meaning identical.
/// `None` means the comparison is undefined and contributes nothing.
pub trait Similarity: Send + Sync {
    fn similarity(&self, left: &str, right: &str) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn similarity(&self, left: &str, right: &str) -> Option<f64> {
        if left.is_empty() || right.is_empty() {
            return None;
        }
        Some(strsim::jaro_winkler(left, right))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoredMatch {
    pub score: f64,
    pub keywords: Vec<String>,
}

pub struct Scorer<M: Similarity = JaroWinkler> {
    weights: ScoringWeights,
    similarity: M,
}

impl Scorer<JaroWinkler> {
    pub fn new(weights: ScoringWeights) -> Self {
        Self::with_similarity(weights, JaroWinkler)
    }
}

impl Default for Scorer<JaroWinkler> {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl<M: Similarity> Scorer<M> {
    pub fn with_similarity(weights: ScoringWeights, similarity: M) -> Self {
        Self {
            weights,
            similarity,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Affinity of one operation for one catalogue entry. `searchable_text`
    /// is expected to be lowercase already (see `Operation::searchable_text`).
    pub fn score(&self, entry: &DomainEntry, searchable_text: &str, tags: &[String]) -> ScoredMatch {
        let w = &self.weights;
        let mut matched = Vec::new();
        let mut score = 0.0;

        for keyword in &entry.keywords {
            let normalized = keyword.to_lowercase();
            if searchable_text.contains(&normalized) {
                matched.push(keyword.clone());
                score += w.keyword_substring;
            } else if self
                .similarity
                .similarity(searchable_text, &normalized)
                .is_some_and(|s| s > w.fuzzy_cutoff)
            {
                matched.push(keyword.clone());
                score += w.keyword_fuzzy;
            }
        }

        // tag hits are additive and may re-record a keyword already matched above
        for tag in tags {
            let tag = tag.to_lowercase();
            for keyword in &entry.keywords {
                if tag.contains(&keyword.to_lowercase()) {
                    matched.push(keyword.clone());
                    score += w.tag_keyword;
                }
            }
        }

        score += self.name_affinity(entry, searchable_text);

        ScoredMatch {
            score,
            keywords: matched,
        }
    }

    fn name_affinity(&self, entry: &DomainEntry, searchable_text: &str) -> f64 {
        let w = &self.weights;
        let mut affinity = 0.0;

        if !entry.name.trim().is_empty() {
            let name = entry.name.to_lowercase();
            if searchable_text.contains(&name) {
                affinity += w.name_substring;
            } else if let Some(similarity) = self.similarity.similarity(searchable_text, &name) {
                affinity += similarity * w.name_similarity_factor;
            }
        }

        if !entry.code.trim().is_empty() && searchable_text.contains(&entry.code.to_lowercase()) {
            affinity += w.code_substring;
        }

        affinity
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Fixed similarity for every pair, so scores are exact.
    pub(crate) struct FixedSimilarity(pub Option<f64>);

    impl Similarity for FixedSimilarity {
        fn similarity(&self, _left: &str, _right: &str) -> Option<f64> {
            self.0
        }
    }

    fn entry(code: &str, name: &str, keywords: &[&str]) -> DomainEntry {
        DomainEntry::new(
            code,
            name,
            keywords.iter().map(|k| k.to_string()).collect(),
            vec![],
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_substring_keywords_and_code() {
        let scorer = Scorer::with_similarity(ScoringWeights::default(), FixedSimilarity(None));
        let ps = entry("PS", "Payment Services", &["payment", "transfer"]);

        let result = scorer.score(&ps, "/payments/transfer   ", &[]);

        // both keywords verbatim, "ps" not present, name absent and similarity undefined
        assert!(approx(result.score, 2.4));
        assert_eq!(result.keywords, vec!["payment", "transfer"]);
    }

    #[test]
    fn test_code_substring_bonus() {
        let scorer = Scorer::with_similarity(ScoringWeights::default(), FixedSimilarity(None));
        let ca = entry("CA", "", &[]);
        let result = scorer.score(&ca, "/accounts/card", &[]);
        assert!(approx(result.score, 0.5));
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_exact_substring_beats_fuzzy_match() {
        let scorer = Scorer::with_similarity(ScoringWeights::default(), FixedSimilarity(Some(0.95)));
        let domain = entry("", "", &["transfer"]);

        let verbatim = scorer.score(&domain, "/transfer", &[]);
        let fuzzy = scorer.score(&domain, "/transfre", &[]);

        assert!(approx(verbatim.score, 1.2));
        assert!(approx(fuzzy.score, 0.8));
        assert!(verbatim.score > fuzzy.score);
        assert_eq!(fuzzy.keywords, vec!["transfer"]);
    }

    #[test]
    fn test_fuzzy_cutoff_is_strict() {
        let scorer = Scorer::with_similarity(ScoringWeights::default(), FixedSimilarity(Some(0.9)));
        let domain = entry("", "", &["transfer"]);
        let result = scorer.score(&domain, "/transfre", &[]);
        assert!(approx(result.score, 0.0));
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_tag_matches_can_duplicate_keywords() {
        let scorer = Scorer::with_similarity(ScoringWeights::default(), FixedSimilarity(None));
        let domain = entry("", "", &["payment"]);
        let tags = vec!["Payments".to_string(), "PaymentOrders".to_string()];

        let result = scorer.score(&domain, "/payments payments paymentorders", &tags);

        assert!(approx(result.score, 1.2 + 0.8 + 0.8));
        assert_eq!(result.keywords, vec!["payment", "payment", "payment"]);
    }

    #[test]
    fn test_name_substring_and_half_similarity() {
        let scorer = Scorer::with_similarity(ScoringWeights::default(), FixedSimilarity(Some(0.6)));
        let domain = entry("", "Current Account", &[]);

        let hit = scorer.score(&domain, "open a current account", &[]);
        assert!(approx(hit.score, 1.0));

        let near = scorer.score(&domain, "/loans", &[]);
        assert!(approx(near.score, 0.3));
    }

    #[test]
    fn test_empty_entry_scores_zero() {
        let scorer = Scorer::with_similarity(ScoringWeights::default(), FixedSimilarity(Some(1.0)));
        let blank = entry(" ", "  ", &[]);
        let result = scorer.score(&blank, "/anything", &["tag".to_string()]);
        assert_eq!(result, ScoredMatch::default());
    }

    #[test]
    fn test_custom_weights_are_applied() {
        let weights = ScoringWeights {
            keyword_substring: 2.0,
            ..ScoringWeights::default()
        };
        let scorer = Scorer::with_similarity(weights, FixedSimilarity(None));
        let result = scorer.score(&entry("", "", &["loan"]), "/loans", &[]);
        assert!(approx(result.score, 2.0));
    }

    #[test]
    fn test_jaro_winkler_similarity() {
        let jw = JaroWinkler;
        assert_eq!(jw.similarity("", "payment"), None);
        assert_eq!(jw.similarity("payment", ""), None);
        assert!(approx(jw.similarity("payment", "payment").unwrap(), 1.0));

        let forward = jw.similarity("payment", "paymnet").unwrap();
        let backward = jw.similarity("paymnet", "payment").unwrap();
        assert!(approx(forward, backward));
        assert!(forward > 0.9);
    }
}
