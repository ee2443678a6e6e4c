//! macOS-specific utilities.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Reveal a theme or applied WebClip folder in Finder.
pub fn reveal_in_finder(path: &Path) -> Result<()> {
    if !cfg!(target_os = "macos") {
        return Err(anyhow::anyhow!(
            "Reveal in Finder is supported only on macOS"
        ));
    }
    let p = path
        .canonicalize()
        .with_context(|| format!("Canon {:?}", path))?;
    Command::new("open")
        .arg("-R")
        .arg(p)
        .status()
        .context("Failed to run open -R")?;
    Ok(())
}
