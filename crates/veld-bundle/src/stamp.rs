//! Descriptor stamping for bundled output trees.
//!
//! A bundled app must self-identify as the platform it was built for.
//! The app's descriptor module carries a `PLATFORM` block (a property
//! holding mode/name/id); stamping rewrites that block in the output
//! copy while leaving every byte around it alone.

use std::fs;
use std::path::Path;

use veld_platform::BuildDescriptor;

use crate::error::{BundleError, Result};

const PLATFORM_MARKER: &str = "PLATFORM";

/// Rewrite the `PLATFORM` block of `source` to carry `descriptor`.
///
/// The block starts at the first `PLATFORM` occurrence and runs through
/// the next `}`. Returns `None` when the source holds no such block.
pub fn stamp_source(source: &str, descriptor: &BuildDescriptor) -> Option<String> {
    let start = source.find(PLATFORM_MARKER)?;
    let close = source[start..].find('}')?;
    let end = start + close + 1;

    let block = format!(
        r#"PLATFORM: {{ MODE: "{}", NAME: "{}", ID: "{}" }}"#,
        descriptor.mode, descriptor.name, descriptor.id
    );

    let mut out = String::with_capacity(source.len() + block.len());
    out.push_str(&source[..start]);
    out.push_str(&block);
    out.push_str(&source[end..]);
    Some(out)
}

/// Stamp `descriptor` into the module at `path`, in place.
pub fn stamp_descriptor_file(path: &Path, descriptor: &BuildDescriptor) -> Result<()> {
    let source = fs::read_to_string(path)?;
    let stamped =
        stamp_source(&source, descriptor).ok_or_else(|| BundleError::DescriptorNotFound {
            path: path.to_path_buf(),
        })?;
    fs::write(path, stamped)?;
    Ok(())
}
