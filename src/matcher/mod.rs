//! Template label → data key matching
//!
//! A label is matched against the available data keys with three strategies,
//! tried in order:
//!
//! 1. exact match of normalized forms
//! 2. substring match in either direction, first key in list order wins
//! 3. synonym table lookup, in table declaration order
//!
//! All comparisons happen on [`normalize_key`] output.

mod synonyms;

pub use synonyms::{SynonymEntry, SynonymTable};

use std::fmt;

/// Canonical form of a label or key: lowercase, `_`/`-` as spaces, trimmed
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
        .replace(['_', '-'], " ")
        .trim()
        .to_string()
}

/// Which strategy produced a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStrategy {
    Exact,
    Substring,
    Synonym { pattern: String },
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Exact => f.write_str("exact"),
            MatchStrategy::Substring => f.write_str("substring"),
            MatchStrategy::Synonym { pattern } => write!(f, "synonym '{pattern}'"),
        }
    }
}

/// A data key chosen for a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch<'k> {
    pub key: &'k str,
    pub strategy: MatchStrategy,
}

/// Matches template labels to data keys using a fixed synonym table
#[derive(Debug, Clone, Default)]
pub struct FieldMatcher {
    synonyms: SynonymTable,
}

impl FieldMatcher {
    pub fn new(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Best data key for `label`, or `None` when nothing matches.
    ///
    /// `keys` must be in source insertion order; substring ties and synonym
    /// candidates both resolve to the earliest key in that order.
    pub fn find_match<'k, K: AsRef<str>>(
        &self,
        label: &str,
        keys: &'k [K],
    ) -> Option<FieldMatch<'k>> {
        let label = normalize_key(label);
        if label.is_empty() {
            return None;
        }

        let normalized: Vec<String> = keys.iter().map(|k| normalize_key(k.as_ref())).collect();

        if let Some(idx) = normalized.iter().position(|k| *k == label) {
            return Some(FieldMatch {
                key: keys[idx].as_ref(),
                strategy: MatchStrategy::Exact,
            });
        }

        if let Some(idx) = normalized
            .iter()
            .position(|k| !k.is_empty() && (label.contains(k.as_str()) || k.contains(&label)))
        {
            return Some(FieldMatch {
                key: keys[idx].as_ref(),
                strategy: MatchStrategy::Substring,
            });
        }

        for entry in self.synonyms.entries() {
            if !label.contains(entry.pattern.as_str()) {
                continue;
            }
            for candidate in &entry.candidates {
                // containment covers equality
                if let Some(idx) = normalized.iter().position(|k| k.contains(candidate.as_str())) {
                    return Some(FieldMatch {
                        key: keys[idx].as_ref(),
                        strategy: MatchStrategy::Synonym {
                            pattern: entry.pattern.clone(),
                        },
                    });
                }
            }
        }

        None
    }

    /// Like [`find_match`](Self::find_match), returning only the key
    pub fn find_key<'k, K: AsRef<str>>(&self, label: &str, keys: &'k [K]) -> Option<&'k str> {
        self.find_match(label, keys).map(|m| m.key)
    }
}
