//! Per-target tree bundling.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use veld_platform::{BuildDescriptor, PlatformTag};
use walkdir::WalkDir;

use crate::directive::{filter_source, is_component_file};
use crate::error::{BundleError, Result};
use crate::stamp::stamp_descriptor_file;

/// Everything needed to bundle one source tree for one target.
#[derive(Debug, Clone)]
pub struct BundlePlan {
    /// Root of the universal app source tree.
    pub src_dir: PathBuf,
    /// Output root; the bundle lands in a per-target subdirectory.
    pub out_dir: PathBuf,
    /// Build target.
    pub target: PlatformTag,
    /// Directory names skipped wholesale during the walk.
    pub ignored_dirs: Vec<String>,
    /// Descriptor module to stamp, relative to `src_dir`. Stamping is
    /// skipped when `None` or when the file is absent from the bundle.
    pub descriptor_file: Option<PathBuf>,
}

/// Counts from one bundling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BundleReport {
    /// Files copied verbatim.
    pub files_copied: usize,
    /// Component files passed through directive filtering.
    pub files_filtered: usize,
    /// Directories skipped by the ignore list.
    pub dirs_skipped: usize,
}

/// Filesystem-safe directory name for a target's bundle.
///
/// Canonical tag spellings carry `:` (and the wildcard is `*`), neither
/// of which belongs in a path component.
pub fn target_dir_name(target: PlatformTag) -> String {
    match target {
        PlatformTag::Any => "any".to_string(),
        tag => tag.as_str().replace(':', "-"),
    }
}

/// Mirror the plan's source tree into `<out>/<target>/`.
///
/// Ignored directories are skipped with their entire subtree. Component
/// sources are filtered through the directive scanner, everything else
/// is copied byte for byte. When the plan names a descriptor file, the
/// bundled copy is stamped with the target's identity afterwards.
pub fn bundle(plan: &BundlePlan) -> Result<BundleReport> {
    if !plan.src_dir.is_dir() {
        return Err(BundleError::SourceDirMissing {
            path: plan.src_dir.clone(),
        });
    }
    let bundle_root = plan.out_dir.join(target_dir_name(plan.target));
    fs::create_dir_all(&bundle_root)?;

    let mut report = BundleReport::default();
    let mut walker = WalkDir::new(&plan.src_dir).into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_dir() && is_ignored(entry.file_name(), &plan.ignored_dirs) {
            report.dirs_skipped += 1;
            walker.skip_current_dir();
            continue;
        }

        // Every entry sits under src_dir, so the prefix always strips.
        let Ok(rel) = path.strip_prefix(&plan.src_dir) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            continue;
        }

        let dest = bundle_root.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else if is_component_file(path) {
            let content = fs::read_to_string(path)?;
            let filtered = filter_source(&content, plan.target, path)?;
            fs::write(&dest, filtered)?;
            report.files_filtered += 1;
        } else {
            fs::copy(path, &dest)?;
            report.files_copied += 1;
        }
    }

    if let Some(rel) = &plan.descriptor_file {
        let descriptor_path = bundle_root.join(rel);
        if descriptor_path.is_file() {
            let descriptor = BuildDescriptor::for_tag(plan.target);
            stamp_descriptor_file(&descriptor_path, &descriptor)?;
        }
    }

    Ok(report)
}

fn is_ignored(name: &std::ffi::OsStr, ignored: &[String]) -> bool {
    name.to_str()
        .map(|n| ignored.iter().any(|i| i == n))
        .unwrap_or(false)
}
