//! Resolution engine capability: coordinate + repositories → local files.
//!
//! The orchestrator only depends on this trait and does not know how the
//! transitive graph is computed or fetched; alternative backends slot in
//! without touching the cache or batch logic.

use std::path::PathBuf;

use thiserror::Error;

use crate::coordinate::ArtifactCoordinate;
use crate::repository::Repository;

mod coursier;
pub use coursier::CoursierEngine;

/// Failure classes reported by a resolution engine. The two classes carry
/// different process exit codes (see `ResolveError::exit_code`).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Could not reach a repository: connection, proxy, TLS, credentials.
    #[error("connection failure: {0}")]
    Connection(String),
    /// The engine ran but produced no usable result: unknown artifact,
    /// unsatisfiable version range, bad metadata.
    #[error("{0}")]
    Resolution(String),
}

/// Resolves one coordinate — with full transitive expansion — against an
/// ordered repository list, returning local artifact files in engine order.
pub trait ResolutionEngine {
    fn resolve_transitive(
        &self,
        coordinate: &ArtifactCoordinate,
        repositories: &[Repository],
    ) -> Result<Vec<PathBuf>, EngineError>;
}

impl<E: ResolutionEngine + ?Sized> ResolutionEngine for &E {
    fn resolve_transitive(
        &self,
        coordinate: &ArtifactCoordinate,
        repositories: &[Repository],
    ) -> Result<Vec<PathBuf>, EngineError> {
        (**self).resolve_transitive(coordinate, repositories)
    }
}
