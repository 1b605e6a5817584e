//! Streaming frequency counting of extensions.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::ext::Extension;

/// Extension → occurrence count, remembering first-seen order so that views
/// can break ties deterministically. Increment-only.
#[derive(Debug, Default)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl FrequencyMap {
    pub fn new() -> FrequencyMap {
        FrequencyMap::default()
    }

    /// Insert-or-add: unknown keys start at 1.
    pub fn increment(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(n) => *n += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
                self.order.push(key.to_string());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of files observed.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Pairs in first-seen order.
    pub fn pairs(&self) -> Vec<(String, u64)> {
        self.order
            .iter()
            .map(|k| (k.clone(), self.counts[k]))
            .collect()
    }

    /// Descending by frequency; ties keep first-seen order (stable sort).
    pub fn most_common(&self) -> Vec<(String, u64)> {
        let mut pairs = self.pairs();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }

    /// Alphabetical by case-folded token; exact-case variants of the same
    /// token order uppercase first.
    pub fn sorted_alpha(&self) -> Vec<(String, u64)> {
        let mut pairs = self.pairs();
        pairs.sort_by(|a, b| {
            (a.0.to_lowercase(), &a.0).cmp(&(b.0.to_lowercase(), &b.0))
        });
        pairs
    }
}

/// Consume the walk stream once, counting each file's extension token.
/// Memory stays proportional to the number of distinct extensions.
pub fn count_extensions(
    files: impl Iterator<Item = PathBuf>,
    case_sensitive: bool,
) -> FrequencyMap {
    let mut map = FrequencyMap::new();
    for path in files {
        let ext = Extension::extract(&path, case_sensitive);
        map.increment(ext.counter_key());
    }
    map
}
