//! `jcp clear-cache` – drop the resolution cache file.

use anyhow::{Context, Result};
use jcp_core::config::JcpConfig;

pub fn run_clear_cache(cfg: &JcpConfig) -> Result<()> {
    let path = cfg.dependency_cache_file()?;
    if path.exists() {
        std::fs::remove_file(&path)
            .with_context(|| format!("remove dependency cache: {}", path.display()))?;
        println!("Removed dependency cache {}", path.display());
    } else {
        println!("No dependency cache at {}", path.display());
    }
    Ok(())
}
