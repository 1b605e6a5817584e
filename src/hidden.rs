//! Platform-specific hidden-file detection.

use std::path::Path;

/// Which hidden-file convention applies to the running platform.
///
/// Selected once at startup; the detector itself is stateless and re-examines
/// the filesystem on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenDetector {
    /// Dot-prefixed names hide a file and everything beneath it.
    UnixLike,
    /// FILE_ATTRIBUTE_HIDDEN on the entry or any ancestor below the drive.
    Windows,
    /// No notion of hidden; filtering becomes a no-op.
    Unspecified,
}

impl HiddenDetector {
    /// Pick the detector for the platform this binary was built for.
    pub fn current() -> HiddenDetector {
        if cfg!(windows) {
            HiddenDetector::Windows
        } else if cfg!(unix) {
            HiddenDetector::UnixLike
        } else {
            HiddenDetector::Unspecified
        }
    }

    /// Whether `path` is hidden, counting ancestors: a visible file below a
    /// hidden directory is itself hidden.
    pub fn is_hidden(&self, path: &Path) -> bool {
        match self {
            HiddenDetector::UnixLike => unix_hidden(path),
            HiddenDetector::Windows => windows_hidden(path),
            HiddenDetector::Unspecified => false,
        }
    }
}

/// Any normal path component starting with `.` marks the whole suffix hidden.
/// `.` and `..` as literal components are navigation, not names, and the
/// `Component` breakdown already excludes them from `Normal`.
fn unix_hidden(path: &Path) -> bool {
    use std::path::Component;
    path.components().any(|c| match c {
        Component::Normal(name) => name
            .to_str()
            .map(|n| n.starts_with('.'))
            .unwrap_or(false),
        _ => false,
    })
}

/// Checks the hidden attribute on the final component and every ancestor with
/// a directory separator; the bare drive prefix (`C:`) is skipped. Attribute
/// lookups that fail count as not hidden for that component.
#[cfg(windows)]
fn windows_hidden(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;
    use std::path::Component;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

    let mut probe = std::path::PathBuf::new();
    for comp in path.components() {
        probe.push(comp.as_os_str());
        if matches!(comp, Component::Prefix(_)) {
            continue;
        }
        let hidden = std::fs::metadata(&probe)
            .map(|m| m.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
            .unwrap_or(false);
        if hidden {
            return true;
        }
    }
    false
}

#[cfg(not(windows))]
fn windows_hidden(_path: &Path) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn unix_dot_file_is_hidden() {
        let d = HiddenDetector::UnixLike;
        assert!(d.is_hidden(Path::new("/home/user/.env")));
        assert!(d.is_hidden(Path::new(".bashrc")));
    }

    #[test]
    fn unix_hidden_ancestor_taints_children() {
        let d = HiddenDetector::UnixLike;
        assert!(d.is_hidden(Path::new("/home/user/.git/config")));
        assert!(d.is_hidden(Path::new(".cache/visible.txt")));
    }

    #[test]
    fn unix_visible_paths() {
        let d = HiddenDetector::UnixLike;
        assert!(!d.is_hidden(Path::new("/home/user/notes.txt")));
        assert!(!d.is_hidden(Path::new("src/main.rs")));
    }

    #[test]
    fn unix_relative_navigation_is_not_hidden() {
        let d = HiddenDetector::UnixLike;
        assert!(!d.is_hidden(Path::new("./src/lib.rs")));
        assert!(!d.is_hidden(Path::new("../sibling/file.c")));
    }

    #[test]
    fn unspecified_never_hides() {
        let d = HiddenDetector::Unspecified;
        assert!(!d.is_hidden(Path::new("/home/user/.env")));
        assert!(!d.is_hidden(Path::new(".git/config")));
    }

    #[test]
    fn current_platform_picks_a_variant() {
        let d = HiddenDetector::current();
        if cfg!(unix) {
            assert_eq!(d, HiddenDetector::UnixLike);
        } else if cfg!(windows) {
            assert_eq!(d, HiddenDetector::Windows);
        } else {
            assert_eq!(d, HiddenDetector::Unspecified);
        }
    }
}
