use crate::domain::model::DomainEntry;
use crate::utils::error::Result;
use crate::utils::naming;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

const BUNDLED_CATALOGUE: &str = include_str!("../../catalogue/domains.yml");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogueFile {
    #[serde(default)]
    domains: Vec<RawDomain>,
    #[serde(default)]
    capabilities_by_domain: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawDomain {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    keywords: Option<Vec<String>>,
    #[serde(default)]
    capabilities: Option<Vec<String>>,
}

/// Read-only taxonomy for one run, plus the `UNMAPPED` fallback entry.
/// Entry order is the tie-break order used by the aligner.
#[derive(Debug, Clone)]
pub struct DomainCatalogue {
    domains: Vec<Arc<DomainEntry>>,
    fallback: Arc<DomainEntry>,
}

impl DomainCatalogue {
    /// Builds a catalogue from already-normalized entries. Any entry carrying
    /// the fallback code is left out.
    pub fn new(domains: Vec<DomainEntry>) -> Self {
        let domains = domains
            .into_iter()
            .filter(|d| {
                if d.is_fallback() && !d.code.trim().is_empty() {
                    tracing::warn!("Ignoring catalogue entry with reserved code '{}'", d.code);
                    false
                } else {
                    true
                }
            })
            .map(Arc::new)
            .collect();

        Self {
            domains,
            fallback: Arc::new(DomainEntry::fallback()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn bundled() -> Self {
        Self::from_yaml_or_empty(BUNDLED_CATALOGUE, "bundled catalogue")
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::empty());
        }
        let file: Option<CatalogueFile> = serde_yaml::from_str(content)?;
        Ok(Self::new(normalize(file.unwrap_or_default())))
    }

    /// Load failures never abort a run: they degrade to an empty catalogue.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml_or_empty(&content, &path.display().to_string()),
            Err(e) => {
                tracing::warn!(
                    "Failed to read domain catalogue from {}: {}. Proceeding with empty set.",
                    path.display(),
                    e
                );
                Self::empty()
            }
        }
    }

    fn from_yaml_or_empty(content: &str, source: &str) -> Self {
        match Self::from_yaml_str(content) {
            Ok(catalogue) if catalogue.is_empty() => {
                tracing::warn!("No domains loaded from {}. Add entries under 'domains:'.", source);
                catalogue
            }
            Ok(catalogue) => {
                tracing::debug!("Loaded {} domains from {}", catalogue.len(), source);
                catalogue
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse domain catalogue from {}: {}. Proceeding with empty set.",
                    source,
                    e
                );
                Self::empty()
            }
        }
    }

    pub fn domains(&self) -> &[Arc<DomainEntry>] {
        &self.domains
    }

    pub fn fallback(&self) -> &Arc<DomainEntry> {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

fn normalize(file: CatalogueFile) -> Vec<DomainEntry> {
    let extra: HashMap<String, Vec<String>> = file
        .capabilities_by_domain
        .into_iter()
        .map(|(code, caps)| (naming::safe_code(&code), caps))
        .collect();

    file.domains
        .into_iter()
        .map(|raw| {
            let code = raw.code.unwrap_or_default();
            let code = if code.trim().is_empty() {
                String::new()
            } else {
                code.trim().to_uppercase()
            };

            let mut seen = HashSet::new();
            let keywords = raw
                .keywords
                .unwrap_or_default()
                .into_iter()
                .filter(|k| !k.trim().is_empty() && seen.insert(k.to_lowercase()))
                .collect();

            let mut capabilities = raw.capabilities.unwrap_or_default();
            if !code.is_empty() {
                if let Some(more) = extra.get(&code) {
                    capabilities.extend(more.iter().cloned());
                }
            }

            DomainEntry::new(code, raw.name.unwrap_or_default(), keywords, capabilities)
        })
        .collect()
}
