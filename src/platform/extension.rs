use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::layout::{DefaultLayout, SubdirectoryLayout};
use crate::error::Error;
use crate::runtime::{Runtime, path::absolutize};

/// Name of the extension file looked up inside `--ext-path`.
pub const EXTENSION_FILE: &str = "platform_fetch.json";

/// Project-specific subdirectory naming loaded from `platform_fetch.json`.
///
/// ```json
/// {
///   "template": "{os}-{abi}",
///   "overrides": { "macos": "apple/macos", "windows/arm64": "win-arm64" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformExtension {
    /// Pattern with `{os}` and `{abi}` placeholders.
    #[serde(default)]
    pub template: Option<String>,

    /// Keyed by `os/abi` or by `os` alone; the pair wins.
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

impl PlatformExtension {
    /// Reads and parses `<dir>/platform_fetch.json`.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime + ?Sized>(runtime: &R, dir: &Path) -> Result<Self> {
        let file = dir.join(EXTENSION_FILE);
        debug!("Loading platform extension from {:?}", file);
        let content = runtime
            .read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let extension: PlatformExtension = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", file.display()))?;
        Ok(extension)
    }
}

impl SubdirectoryLayout for PlatformExtension {
    fn subdirectory_for(&self, os: &str, abi: &str) -> String {
        if let Some(dir) = self.overrides.get(&format!("{}/{}", os, abi)) {
            return dir.clone();
        }
        if let Some(dir) = self.overrides.get(os) {
            return dir.clone();
        }
        match &self.template {
            Some(template) => template.replace("{os}", os).replace("{abi}", abi),
            None => DefaultLayout.subdirectory_for(os, abi),
        }
    }
}

/// Resolves the directory holding the extension file. Relative paths are
/// anchored at the current working directory; the directory must exist.
pub fn locate_extension_dir<R: Runtime + ?Sized>(runtime: &R, path: &Path) -> Result<PathBuf> {
    let dir = absolutize(runtime, path)?;
    if !runtime.exists(&dir) {
        return Err(Error::PathResolution(dir).into());
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    fn extension(json: &str) -> PlatformExtension {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_pair_override_wins_over_os_override() {
        let ext = extension(
            r#"{"overrides": {"windows": "win", "windows/arm64": "win-arm64"}}"#,
        );
        assert_eq!(ext.subdirectory_for("windows", "arm64"), "win-arm64");
        assert_eq!(ext.subdirectory_for("windows", "x86_64"), "win");
    }

    #[test]
    fn test_template_substitution() {
        let ext = extension(r#"{"template": "runtimes/{os}-{abi}/native"}"#);
        assert_eq!(
            ext.subdirectory_for("android", "arm64-v8a"),
            "runtimes/android-arm64-v8a/native"
        );
    }

    #[test]
    fn test_empty_extension_uses_default_layout() {
        let ext = extension("{}");
        assert_eq!(ext.subdirectory_for("linux", "x86_64"), "linux/x86_64");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<PlatformExtension, _> =
            serde_json::from_str(r#"{"subdirectory_for_variant": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_reads_extension_file() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .with(eq(Path::new("/ext").join(EXTENSION_FILE)))
            .returning(|_| Ok(r#"{"overrides": {"ios": "apple/ios"}}"#.to_string()));

        let ext = PlatformExtension::load(&runtime, Path::new("/ext")).unwrap();
        assert_eq!(ext.subdirectory_for("ios", ""), "apple/ios");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Err(anyhow::anyhow!("No such file or directory")));

        let err = PlatformExtension::load(&runtime, Path::new("/ext")).unwrap_err();
        assert!(err.to_string().contains(EXTENSION_FILE));
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("not json".to_string()));

        assert!(PlatformExtension::load(&runtime, Path::new("/ext")).is_err());
    }

    #[test]
    fn test_locate_extension_dir_relative() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_current_dir()
            .returning(|| Ok(PathBuf::from("/work")));
        runtime
            .expect_exists()
            .with(eq(PathBuf::from("/work/ext")))
            .returning(|_| true);

        assert_eq!(
            locate_extension_dir(&runtime, Path::new("ext")).unwrap(),
            PathBuf::from("/work/ext")
        );
    }

    #[test]
    fn test_locate_extension_dir_missing() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| false);

        let err = locate_extension_dir(&runtime, Path::new("/nowhere")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::PathResolution(p)) if p == Path::new("/nowhere")
        ));
    }
}
