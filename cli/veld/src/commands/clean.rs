//! `veld clean`: remove the output directory.

use std::fs;
use std::path::Path;

use anyhow::Result;

/// Remove the bundle output directory if it exists.
pub fn run(out_dir: &Path) -> Result<()> {
    if out_dir.exists() {
        fs::remove_dir_all(out_dir)?;
        println!("Removed {}", out_dir.display());
    } else {
        println!("Already clean: {} does not exist", out_dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_removes_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("build-target");
        fs::create_dir_all(out.join("web")).unwrap();
        fs::write(out.join("web/index.html"), "x").unwrap();

        run(&out).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn clean_handles_already_clean() {
        let dir = tempfile::tempdir().unwrap();
        run(&dir.path().join("build-target")).unwrap();
    }
}
