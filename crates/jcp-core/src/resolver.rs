//! Batch resolution: cache check, per-locator engine calls, classpath assembly.

use tracing::{error, info};

use crate::cache::ResolutionCache;
use crate::classpath;
use crate::coordinate::ArtifactCoordinate;
use crate::engine::ResolutionEngine;
use crate::error::ResolveError;
use crate::repository::Repository;

/// Orchestrates resolution of a locator batch through the cache and engine.
pub struct DependencyResolver<E> {
    engine: E,
    cache: ResolutionCache,
}

impl<E: ResolutionEngine> DependencyResolver<E> {
    pub fn new(engine: E, cache: ResolutionCache) -> Self {
        Self { engine, cache }
    }

    /// Resolve a batch of dependency locators into a classpath string.
    ///
    /// The batch is cached as a whole, keyed by the locators joined in input
    /// order — same locators in a different order are a different key. A warm,
    /// non-stale cache entry short-circuits the engine entirely. Locators are
    /// processed sequentially; an engine failure on any of them aborts the
    /// whole batch with no partial result. `logging_enabled` only controls
    /// progress output, never the result.
    pub fn resolve_deps(
        &self,
        locators: &[String],
        repositories: &[Repository],
        logging_enabled: bool,
    ) -> Result<String, ResolveError> {
        if locators.is_empty() {
            return Ok(String::new());
        }

        let key = locators.join(&classpath::SEPARATOR.to_string());
        if let Some(cached) = self.cache.lookup(&key) {
            return Ok(cached);
        }

        if logging_enabled {
            info!("resolving dependencies...");
        }

        let repositories = if repositories.is_empty() {
            Repository::default_set()
        } else {
            repositories.to_vec()
        };

        let mut entries = Vec::new();
        for locator in locators {
            let coordinate = ArtifactCoordinate::parse(locator)?;
            if logging_enabled {
                info!("    resolving {}...", locator);
            }
            let artifacts = self
                .engine
                .resolve_transitive(&coordinate, &repositories)
                .map_err(|source| ResolveError::DependencyResolutionFailed {
                    locator: locator.clone(),
                    source,
                })?;
            entries.extend(artifacts.iter().map(|path| classpath::render_entry(path)));
            if logging_enabled {
                info!("    resolving {}: done", locator);
            }
        }

        let resolved = classpath::join(&entries);

        if logging_enabled {
            info!("dependencies resolved");
        }

        if let Err(e) = self.cache.store(&key, &resolved) {
            error!("could not write to dependency cache: {:#}", e);
        }

        Ok(resolved)
    }
}
