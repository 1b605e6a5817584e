//! Collecting search matches and their size statistics.

use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Matches in discovery order, plus parallel byte sizes when requested.
/// Zero matches is a normal outcome, not an error.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<u64>>,
}

/// Aggregate size figures over a non-empty result.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SizeSummary {
    pub total: u64,
    /// Full precision; display layers truncate as they see fit.
    pub average: f64,
    pub min: u64,
    pub max: u64,
}

impl SearchResult {
    pub fn count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// `None` when sizes were not collected or nothing matched.
    pub fn size_summary(&self) -> Option<SizeSummary> {
        let sizes = self.sizes.as_ref()?;
        if sizes.is_empty() {
            return None;
        }
        let total: u64 = sizes.iter().sum();
        Some(SizeSummary {
            total,
            average: total as f64 / sizes.len() as f64,
            min: *sizes.iter().min().unwrap(),
            max: *sizes.iter().max().unwrap(),
        })
    }
}

/// Drain the filtered stream into a result. With `want_sizes`, each file is
/// stat'd as it arrives; a file that vanished between walk and stat counts as
/// size zero rather than failing the whole collection.
pub fn collect(files: impl Iterator<Item = PathBuf>, want_sizes: bool) -> SearchResult {
    let mut out = SearchResult {
        files: Vec::new(),
        sizes: want_sizes.then(Vec::new),
    };
    for path in files {
        if let Some(sizes) = out.sizes.as_mut() {
            sizes.push(fs::metadata(&path).map(|m| m.len()).unwrap_or(0));
        }
        out.files.push(path);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn empty_result_is_explicit() {
        let res = collect(std::iter::empty(), true);
        assert!(res.is_empty());
        assert_eq!(res.count(), 0);
        assert!(res.size_summary().is_none());
    }

    #[test]
    fn preserves_discovery_order() {
        let input = vec![PathBuf::from("/z/one.txt"), PathBuf::from("/a/two.txt")];
        let res = collect(input.clone().into_iter(), false);
        assert_eq!(res.files, input);
        assert!(res.sizes.is_none());
    }

    #[test]
    fn vanished_file_counts_as_zero() {
        let res = collect(
            vec![PathBuf::from("/definitely/not/there.txt")].into_iter(),
            true,
        );
        assert_eq!(res.sizes.as_deref(), Some(&[0][..]));
    }

    #[test]
    fn size_summary_over_real_files() {
        let dir = tempfile::Builder::new()
            .prefix("tally-search")
            .tempdir()
            .unwrap();
        let p1 = dir.path().join("a.bin");
        let p2 = dir.path().join("b.bin");
        let p3 = dir.path().join("c.bin");
        fs::write(&p1, vec![0u8; 10]).unwrap();
        fs::write(&p2, vec![0u8; 30]).unwrap();
        fs::write(&p3, vec![0u8; 20]).unwrap();

        let res = collect(vec![p1, p2, p3].into_iter(), true);
        let s = res.size_summary().unwrap();
        assert_eq!(s.total, 60);
        assert_eq!(s.min, 10);
        assert_eq!(s.max, 30);
        assert!((s.average - 20.0).abs() < f64::EPSILON);
    }
}
