//! Path utility functions for normalization and resolution.

use anyhow::Result;
use std::path::{Component, Path, PathBuf};

use super::Runtime;

/// Normalize a path by processing `.` and `..` components lexically.
/// This does not access the filesystem and does not follow symlinks.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push(component);
                }
            }
            _ => {
                result.push(component);
            }
        }
    }
    result
}

/// Anchor a relative path at the current working directory.
pub fn absolutize<R: Runtime + ?Sized>(runtime: &R, path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(runtime.current_dir()?.join(path))
    }
}

/// Resolve a path that may not exist yet.
///
/// The longest prefix that exists on disk is canonicalized as written, so
/// symlinks are followed before any `..` after them is applied. The
/// missing tail is then appended with `.` and `..` handled lexically.
pub fn resolve_lenient<R: Runtime + ?Sized>(runtime: &R, path: &Path) -> PathBuf {
    let components: Vec<Component> = path.components().collect();

    for split in (1..=components.len()).rev() {
        let prefix: PathBuf = components[..split].iter().collect();
        if !runtime.exists(&prefix) {
            continue;
        }

        let mut resolved = runtime
            .canonicalize(&prefix)
            .unwrap_or_else(|_| normalize_path(&prefix));
        for component in &components[split..] {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                other => resolved.push(other),
            }
        }
        return resolved;
    }

    normalize_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_normalize_path_simple() {
        assert_eq!(
            normalize_path(Path::new("/out/windows/x86_64")),
            PathBuf::from("/out/windows/x86_64")
        );
    }

    #[test]
    fn test_normalize_path_with_dot() {
        assert_eq!(
            normalize_path(Path::new("/out/./linux/./x86_64")),
            PathBuf::from("/out/linux/x86_64")
        );
    }

    #[test]
    fn test_normalize_path_with_parent_dir() {
        assert_eq!(
            normalize_path(Path::new("/out/build/../ios")),
            PathBuf::from("/out/ios")
        );
    }

    #[test]
    fn test_normalize_path_trailing_empty_segment() {
        assert_eq!(
            normalize_path(Path::new("/out/macos/")),
            PathBuf::from("/out/macos")
        );
    }

    #[test]
    fn test_normalize_path_relative_parent_kept() {
        assert_eq!(
            normalize_path(Path::new("../vendor")),
            PathBuf::from("../vendor")
        );
    }

    #[test]
    fn test_absolutize_relative() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_current_dir()
            .returning(|| Ok(PathBuf::from("/work")));

        assert_eq!(
            absolutize(&runtime, Path::new("vendor/litecore")).unwrap(),
            PathBuf::from("/work/vendor/litecore")
        );
    }

    #[test]
    fn test_absolutize_absolute_skips_cwd() {
        // No expectations: current_dir must not be called
        let runtime = MockRuntime::new();
        assert_eq!(
            absolutize(&runtime, Path::new("/opt/out")).unwrap(),
            PathBuf::from("/opt/out")
        );
    }

    #[test]
    fn test_resolve_lenient_nothing_exists() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| false);

        assert_eq!(
            resolve_lenient(&runtime, Path::new("/out/./windows/x86_64")),
            PathBuf::from("/out/windows/x86_64")
        );
    }

    #[test]
    fn test_resolve_lenient_canonicalizes_existing_prefix() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .returning(|p| p == Path::new("/out"));
        runtime
            .expect_canonicalize()
            .returning(|_| Ok(PathBuf::from("/mnt/real-out")));

        assert_eq!(
            resolve_lenient(&runtime, Path::new("/out/android/x86")),
            PathBuf::from("/mnt/real-out/android/x86")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_lenient_follows_symlinked_base() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        std::fs::create_dir(&real).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let resolved = resolve_lenient(&crate::runtime::RealRuntime, &link.join("linux/x86_64"));
        assert_eq!(
            resolved,
            std::fs::canonicalize(&real).unwrap().join("linux/x86_64")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_lenient_parent_dir_after_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let root = std::fs::canonicalize(dir.path()).unwrap();
        let nested = root.join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        let link = root.join("link");
        std::os::unix::fs::symlink(&nested, &link).unwrap();

        // link/.. is a/, not root/
        let resolved = resolve_lenient(
            &crate::runtime::RealRuntime,
            &link.join("..").join("linux/x86_64"),
        );
        assert_eq!(resolved, root.join("a/linux/x86_64"));
    }

    #[test]
    fn test_resolve_lenient_parent_dir_in_missing_tail() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .returning(|p| p == Path::new("/out"));
        runtime
            .expect_canonicalize()
            .returning(|_| Ok(PathBuf::from("/mnt/real-out")));

        assert_eq!(
            resolve_lenient(&runtime, Path::new("/out/missing/../ios")),
            PathBuf::from("/mnt/real-out/ios")
        );
    }
}
