//! Flat-file resolution cache: one `"<key> <classpath>"` line per entry.
//!
//! The file is append-only and human-readable. Duplicate keys are fine: the
//! line appearing later in the file wins, which is what plain appending gives
//! us. No locking is done; concurrent writers race at worst into a partial
//! line, which is unparsable and therefore skipped on load.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::classpath;

/// Cache of previously resolved classpaths, keyed by the joined locator list.
pub struct ResolutionCache {
    path: PathBuf,
}

impl ResolutionCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a previously stored classpath.
    ///
    /// Re-reads the cache file on every call. Returns `None` when the key is
    /// absent, when the file is unreadable (warned and treated as empty), or
    /// when any cached entry no longer exists on disk — a stale entry forces
    /// re-resolution instead of handing out paths that were wiped since.
    pub fn lookup(&self, key: &str) -> Option<String> {
        if !self.path.is_file() {
            return None;
        }
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    "could not access dependency cache {}: {}",
                    self.path.display(),
                    e
                );
                return None;
            }
        };

        let mut hit = None;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // Later lines win on duplicate keys.
            if let Some((k, v)) = line.split_once(' ') {
                if k == key {
                    hit = Some(v.to_string());
                }
            }
        }

        let cached = hit?;
        if all_entries_exist(&cached) {
            Some(cached)
        } else {
            warn!("detected missing dependencies in cache");
            None
        }
    }

    /// Append a freshly resolved classpath, creating the file (and its parent
    /// directory) on first use. The caller treats failure as non-fatal.
    pub fn store(&self, key: &str, classpath: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create cache dir: {}", parent.display()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open dependency cache: {}", self.path.display()))?;
        writeln!(file, "{key} {classpath}")
            .with_context(|| format!("append to dependency cache: {}", self.path.display()))?;
        Ok(())
    }
}

/// True if every classpath entry still exists locally. Quoted entries (paths
/// containing spaces) are unquoted before the check.
fn all_entries_exist(cached: &str) -> bool {
    cached
        .split(classpath::SEPARATOR)
        .all(|entry| Path::new(entry.trim_matches('"')).exists())
}
