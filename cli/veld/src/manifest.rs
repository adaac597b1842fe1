//! `veld.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Output root used when the manifest does not name one.
pub const DEFAULT_OUT_DIR: &str = "build-target";

/// Raw target names bundled when the manifest lists none.
const DEFAULT_TARGETS: [&str; 2] = ["web", "native"];

/// Directory names never copied into a bundle.
const BUILTIN_IGNORES: [&str; 2] = ["node_modules", ".git"];

/// The top-level manifest structure for a Veld project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeldManifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Bundling configuration.
    #[serde(default)]
    pub bundle: BundleConfig,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required).
    pub name: String,
    /// Project version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Bundling configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BundleConfig {
    /// Source root, relative to the project directory (default: the
    /// project directory itself).
    #[serde(default)]
    pub src: Option<String>,
    /// Output root, relative to the project directory.
    #[serde(default)]
    pub out: Option<String>,
    /// Raw platform names to bundle for; normalized at build time.
    #[serde(default)]
    pub targets: Vec<String>,
    /// Extra directory names skipped during the walk.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Platform descriptor module to stamp per target, relative to src.
    #[serde(default)]
    pub descriptor_file: Option<String>,
}

impl VeldManifest {
    /// Search upward from `start_dir` for a `veld.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("veld.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: VeldManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing veld.toml")
    }

    /// Resolved source root.
    pub fn src_dir(&self, project_dir: &Path) -> PathBuf {
        match self.bundle.src.as_deref() {
            Some(src) => project_dir.join(src),
            None => project_dir.to_path_buf(),
        }
    }

    /// Resolved output root.
    pub fn out_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.bundle.out.as_deref().unwrap_or(DEFAULT_OUT_DIR))
    }

    /// Raw target names to bundle for.
    pub fn targets(&self) -> Vec<&str> {
        if self.bundle.targets.is_empty() {
            DEFAULT_TARGETS.to_vec()
        } else {
            self.bundle.targets.iter().map(String::as_str).collect()
        }
    }

    /// Directory names the walk skips: built-ins, the output root's own
    /// name (so a bundle never swallows earlier bundles), and any extras
    /// from the manifest.
    pub fn ignored_dirs(&self) -> Vec<String> {
        let mut dirs: Vec<String> = BUILTIN_IGNORES.iter().map(|s| s.to_string()).collect();
        dirs.push(
            self.bundle
                .out
                .as_deref()
                .unwrap_or(DEFAULT_OUT_DIR)
                .to_string(),
        );
        for extra in &self.bundle.ignore {
            if !dirs.contains(extra) {
                dirs.push(extra.clone());
            }
        }
        dirs
    }

    /// Descriptor module path, relative to the source root.
    pub fn descriptor_file(&self) -> Option<PathBuf> {
        self.bundle.descriptor_file.as_deref().map(PathBuf::from)
    }

    /// Generate the default template for `veld init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"
version = "0.1.0"

[bundle]
out = "{DEFAULT_OUT_DIR}"
targets = ["web", "native"]
ignore = []
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[project]
name = "my-app"
version = "1.2.0"
description = "A universal app"

[bundle]
src = "app"
out = "dist"
targets = ["web", "macos", "ios"]
ignore = ["vendor"]
descriptor-file = "src/platform.ts"
"#;
        let manifest = VeldManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.project.name, "my-app");
        assert_eq!(manifest.project.version, "1.2.0");
        assert_eq!(manifest.targets(), vec!["web", "macos", "ios"]);
        assert_eq!(
            manifest.src_dir(Path::new("/p")),
            PathBuf::from("/p/app")
        );
        assert_eq!(
            manifest.out_dir(Path::new("/p")),
            PathBuf::from("/p/dist")
        );
        assert_eq!(
            manifest.descriptor_file(),
            Some(PathBuf::from("src/platform.ts"))
        );
        let ignored = manifest.ignored_dirs();
        assert!(ignored.contains(&"node_modules".to_string()));
        assert!(ignored.contains(&"dist".to_string()));
        assert!(ignored.contains(&"vendor".to_string()));
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = VeldManifest::from_str("[project]\nname = \"minimal\"\n").unwrap();
        assert_eq!(manifest.project.name, "minimal");
        assert_eq!(manifest.project.version, "0.1.0");
        assert_eq!(manifest.targets(), vec!["web", "native"]);
        assert_eq!(
            manifest.out_dir(Path::new("/p")),
            PathBuf::from("/p/build-target")
        );
        assert_eq!(manifest.src_dir(Path::new("/p")), PathBuf::from("/p"));
        assert!(manifest.descriptor_file().is_none());
        assert!(manifest
            .ignored_dirs()
            .contains(&"build-target".to_string()));
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(VeldManifest::from_str("this is not valid toml [[[").is_err());
    }

    #[test]
    fn template_is_valid_toml() {
        let template = VeldManifest::template("test-app");
        let manifest = VeldManifest::from_str(&template).unwrap();
        assert_eq!(manifest.project.name, "test-app");
        assert_eq!(manifest.targets(), vec!["web", "native"]);
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("veld.toml"), "[project]\nname = \"here\"\n").unwrap();

        let (manifest, found_dir) = VeldManifest::find_and_load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.project.name, "here");
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("veld.toml"),
            "[project]\nname = \"parent\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = VeldManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.project.name, "parent");
        assert_eq!(found_dir, dir.path());
    }
}
