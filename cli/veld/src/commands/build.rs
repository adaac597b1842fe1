//! `veld build`: produce per-target bundles.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use veld_bundle::bundle::{bundle, target_dir_name, BundlePlan, BundleReport};
use veld_platform::PlatformTag;

use crate::manifest::VeldManifest;

/// One bundling run, as reported to the user.
#[derive(Serialize)]
struct BuildRecord {
    target: PlatformTag,
    output_dir: String,
    #[serde(flatten)]
    counts: BundleReport,
}

/// Bundle for an explicit target, or for the manifest's target list.
pub fn run(
    project_dir: &Path,
    manifest: &VeldManifest,
    target: Option<&str>,
    all_targets: bool,
    report: Option<&str>,
) -> Result<()> {
    if target.is_some() && all_targets {
        bail!("--target and --all-targets are mutually exclusive");
    }
    let json = match report {
        None | Some("human") => false,
        Some("json") => true,
        Some(other) => bail!("unknown report format: '{other}' (expected human or json)"),
    };

    let raw_targets: Vec<String> = match target {
        Some(raw) => vec![raw.to_string()],
        None => manifest.targets().iter().map(|s| s.to_string()).collect(),
    };

    let mut records = Vec::with_capacity(raw_targets.len());
    for raw in &raw_targets {
        let tag = PlatformTag::normalize(raw);
        let plan = BundlePlan {
            src_dir: manifest.src_dir(project_dir),
            out_dir: manifest.out_dir(project_dir),
            target: tag,
            ignored_dirs: manifest.ignored_dirs(),
            descriptor_file: manifest.descriptor_file(),
        };
        let counts = bundle(&plan).with_context(|| format!("bundling for '{raw}'"))?;
        let output_dir = plan.out_dir.join(target_dir_name(tag));
        if !json {
            println!(
                "Bundled {} -> {} ({} copied, {} filtered, {} dirs skipped)",
                tag,
                output_dir.display(),
                counts.files_copied,
                counts.files_filtered,
                counts.dirs_skipped,
            );
        }
        records.push(BuildRecord {
            target: tag,
            output_dir: output_dir.display().to_string(),
            counts,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    Ok(())
}
