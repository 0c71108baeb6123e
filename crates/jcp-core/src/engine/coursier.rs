//! Engine backed by the coursier launcher (`cs fetch`).
//!
//! Coursier is a Maven-compatible resolver that prints the resolved local
//! file paths on stdout, one per line. All graph computation and network I/O
//! happens inside the subprocess.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{EngineError, ResolutionEngine};
use crate::coordinate::ArtifactCoordinate;
use crate::repository::Repository;

/// Shells out to the `cs` launcher for fetching and transitive expansion.
///
/// Default repositories are disabled so only the supplied list is consulted;
/// the [`Repository::Central`] marker re-enables the built-in central.
pub struct CoursierEngine {
    launcher: PathBuf,
    local_repo: PathBuf,
}

impl CoursierEngine {
    pub fn new(local_repo: impl Into<PathBuf>) -> Self {
        Self {
            launcher: PathBuf::from("cs"),
            local_repo: local_repo.into(),
        }
    }

    /// Override the launcher binary (non-standard installs, tests).
    pub fn with_launcher(mut self, launcher: impl Into<PathBuf>) -> Self {
        self.launcher = launcher.into();
        self
    }

    pub fn local_repo(&self) -> &Path {
        &self.local_repo
    }

    fn fetch_args(
        &self,
        coordinate: &ArtifactCoordinate,
        repositories: &[Repository],
    ) -> Vec<String> {
        let mut args = vec![
            "fetch".to_string(),
            "--no-default".to_string(),
            "--cache".to_string(),
            self.local_repo.to_string_lossy().into_owned(),
        ];
        for repository in repositories {
            args.push("--repository".to_string());
            match repository {
                Repository::Named { url, .. } => args.push(url.clone()),
                Repository::Central => args.push("central".to_string()),
            }
        }
        if let Some(classifier) = &coordinate.classifier {
            args.push("--classifier".to_string());
            args.push(classifier.clone());
        }
        if coordinate.packaging != "jar" {
            args.push("--artifact-type".to_string());
            args.push(coordinate.packaging.clone());
        }
        args.push(format!(
            "{}:{}:{}",
            coordinate.group_id, coordinate.artifact_id, coordinate.version
        ));
        args
    }
}

impl ResolutionEngine for CoursierEngine {
    fn resolve_transitive(
        &self,
        coordinate: &ArtifactCoordinate,
        repositories: &[Repository],
    ) -> Result<Vec<PathBuf>, EngineError> {
        let args = self.fetch_args(coordinate, repositories);
        debug!("running {} {}", self.launcher.display(), args.join(" "));

        let output = Command::new(&self.launcher).args(&args).output().map_err(|e| {
            EngineError::Resolution(format!(
                "could not run resolver '{}': {}",
                self.launcher.display(),
                e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_failure(stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }
}

/// Split launcher failures into the two error classes by looking for the
/// usual network markers in its stderr.
fn classify_failure(stderr: &str) -> EngineError {
    const CONNECTIVITY_MARKERS: [&str; 7] = [
        "connection",
        "connect",
        "timed out",
        "timeout",
        "proxy",
        "unauthorized",
        "forbidden",
    ];
    let lower = stderr.to_lowercase();
    if CONNECTIVITY_MARKERS.iter().any(|m| lower.contains(m)) {
        EngineError::Connection(stderr.to_string())
    } else {
        EngineError::Resolution(stderr.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(locator: &str) -> ArtifactCoordinate {
        ArtifactCoordinate::parse(locator).unwrap()
    }

    #[test]
    fn fetch_args_disable_defaults_and_pass_repositories_in_order() {
        let engine = CoursierEngine::new("/tmp/repo");
        let repos = vec![
            Repository::Named {
                id: Some("corp".into()),
                url: "https://repo.corp.example/m2".into(),
            },
            Repository::Central,
        ];
        let args = engine.fetch_args(&coordinate("com.foo:bar:1.2.3"), &repos);
        assert_eq!(
            args,
            vec![
                "fetch",
                "--no-default",
                "--cache",
                "/tmp/repo",
                "--repository",
                "https://repo.corp.example/m2",
                "--repository",
                "central",
                "com.foo:bar:1.2.3",
            ]
        );
    }

    #[test]
    fn fetch_args_carry_classifier_and_non_jar_type() {
        let engine = CoursierEngine::new("/tmp/repo");
        let args = engine.fetch_args(&coordinate("com.foo:bar:1.0:sources@zip"), &[]);
        assert!(args.windows(2).any(|w| w == ["--classifier", "sources"]));
        assert!(args.windows(2).any(|w| w == ["--artifact-type", "zip"]));
    }

    #[test]
    fn fetch_args_omit_type_flag_for_plain_jars() {
        let engine = CoursierEngine::new("/tmp/repo");
        let args = engine.fetch_args(&coordinate("com.foo:bar:1.0"), &[]);
        assert!(!args.iter().any(|a| a == "--artifact-type"));
    }

    #[test]
    fn classify_failure_detects_connectivity() {
        assert!(matches!(
            classify_failure("Connection refused (Connection refused)"),
            EngineError::Connection(_)
        ));
        assert!(matches!(
            classify_failure("download timed out after 30s"),
            EngineError::Connection(_)
        ));
    }

    #[test]
    fn classify_failure_defaults_to_resolution() {
        assert!(matches!(
            classify_failure("Error: not found: com.foo:bar:9.9.9"),
            EngineError::Resolution(_)
        ));
    }

    #[test]
    fn missing_launcher_is_a_resolution_error() {
        let engine =
            CoursierEngine::new("/tmp/repo").with_launcher("/nonexistent/jcp-test-launcher");
        let err = engine
            .resolve_transitive(&coordinate("com.foo:bar:1.0"), &[])
            .unwrap_err();
        assert!(matches!(err, EngineError::Resolution(_)));
    }
}
