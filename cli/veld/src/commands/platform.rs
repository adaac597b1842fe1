//! `veld platform`: tag domain listing and normalization.

use anyhow::{bail, Result};
use veld_platform::PlatformTag;

/// List every canonical tag, with the raw short name it normalizes from.
pub fn list() -> Result<()> {
    println!("Platform tags:");
    println!();
    for tag in PlatformTag::ALL {
        match tag.short_name() {
            Some(short) => println!("  {:<26} from '{short}'", tag.as_str()),
            None => println!("  {:<26} (not produced by normalization)", tag.as_str()),
        }
    }
    println!();
    println!("Unrecognized names normalize to 'native'.");
    Ok(())
}

/// Print the canonical tag for a raw platform name.
pub fn normalize(name: &str, format: Option<&str>) -> Result<()> {
    let tag = PlatformTag::normalize(name);
    match format {
        None | Some("human") => println!("{tag}"),
        Some("json") => println!("{}", serde_json::to_string(&tag)?),
        Some(other) => bail!("unknown format: '{other}' (expected human or json)"),
    }
    Ok(())
}
