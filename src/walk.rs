//! Lazy directory traversal yielding regular-file paths.

use ignore::WalkBuilder;
use std::path::PathBuf;

use crate::hidden::HiddenDetector;

/// A single-pass, pull-based stream of regular-file paths under a root.
///
/// Directories are never yielded. Unless `include_hidden` was set, every
/// candidate path is tested with the platform detector, so a visible file
/// below a hidden directory is excluded too. Unreadable subtrees are skipped
/// rather than aborting the walk.
///
/// The caller is responsible for checking that the root exists before
/// building a `Walk`.
pub struct Walk {
    inner: ignore::Walk,
    detector: HiddenDetector,
    include_hidden: bool,
}

/// Build the file stream for `root`. Non-recursive mode lists only direct
/// children. Traversal order is whatever the underlying walker produces.
pub fn walk(
    root: &std::path::Path,
    recursive: bool,
    include_hidden: bool,
    detector: HiddenDetector,
) -> Walk {
    let mut wb = WalkBuilder::new(root);
    // No gitignore/ignore-file semantics here: hidden filtering is our own
    // platform policy, applied per yielded path.
    wb.standard_filters(false);
    wb.follow_links(false);
    if !recursive {
        wb.max_depth(Some(1));
    }
    Walk {
        inner: wb.build(),
        detector,
        include_hidden,
    }
}

impl Iterator for Walk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let ent = match self.inner.next()? {
                Ok(e) => e,
                // permission denied, vanished entries: skip and keep going
                Err(_) => continue,
            };
            if !ent.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                continue;
            }
            if !self.include_hidden && self.detector.is_hidden(ent.path()) {
                continue;
            }
            return Some(ent.into_path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;

    fn touch(p: &Path) {
        fs::write(p, b"x").unwrap();
    }

    // tempfile's default dir prefix is ".tmp", which the UnixLike detector
    // would treat as a hidden root.
    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::Builder::new().prefix("tally-walk").tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.txt"));
        touch(&root.join("readme"));
        touch(&root.join(".env"));
        fs::create_dir(root.join("sub")).unwrap();
        touch(&root.join("sub").join("b.rs"));
        fs::create_dir(root.join(".git")).unwrap();
        touch(&root.join(".git").join("config"));
        dir
    }

    fn names(w: Walk) -> BTreeSet<String> {
        w.map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn recursive_walk_with_hidden() {
        let dir = fixture();
        let got = names(walk(dir.path(), true, true, HiddenDetector::UnixLike));
        let want: BTreeSet<String> = ["a.txt", "readme", ".env", "b.rs", "config"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    #[cfg(unix)]
    fn recursive_walk_excludes_hidden_and_their_children() {
        let dir = fixture();
        let got = names(walk(dir.path(), true, false, HiddenDetector::UnixLike));
        let want: BTreeSet<String> = ["a.txt", "readme", "b.rs"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn non_recursive_lists_direct_children_only() {
        let dir = fixture();
        let got = names(walk(dir.path(), false, true, HiddenDetector::UnixLike));
        let want: BTreeSet<String> = ["a.txt", "readme", ".env"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn non_recursive_is_subset_of_recursive() {
        let dir = fixture();
        let flat: BTreeSet<PathBuf> =
            walk(dir.path(), false, true, HiddenDetector::UnixLike).collect();
        let deep: BTreeSet<PathBuf> =
            walk(dir.path(), true, true, HiddenDetector::UnixLike).collect();
        assert!(flat.is_subset(&deep));
    }

    #[test]
    #[cfg(unix)]
    fn hidden_exclusion_is_idempotent() {
        let dir = fixture();
        let first: BTreeSet<PathBuf> =
            walk(dir.path(), true, false, HiddenDetector::UnixLike).collect();
        let second: BTreeSet<PathBuf> =
            walk(dir.path(), true, false, HiddenDetector::UnixLike).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn unspecified_platform_includes_everything() {
        let dir = fixture();
        let filtered = names(walk(dir.path(), true, false, HiddenDetector::Unspecified));
        let all = names(walk(dir.path(), true, true, HiddenDetector::Unspecified));
        assert_eq!(filtered, all);
    }

    #[test]
    fn directories_are_never_yielded() {
        let dir = fixture();
        for p in walk(dir.path(), true, true, HiddenDetector::UnixLike) {
            assert!(p.is_file(), "{} is not a file", p.display());
        }
    }
}
