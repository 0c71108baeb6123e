//! Error taxonomy for parsing and resolution.

use thiserror::Error;

use crate::engine::EngineError;

/// Errors surfaced by coordinate/repository parsing and batch resolution.
///
/// Cache failures are deliberately absent: the cache is best-effort, so read
/// problems degrade to an empty cache and write problems are logged without
/// failing the call.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid dependency locator '{0}': expected format is groupId:artifactId:version[:classifier][@type]")]
    InvalidLocatorFormat(String),

    #[error("invalid repository reference '{0}': expected <url> or <id>=<url>")]
    InvalidRepositoryReference(String),

    #[error("could not resolve environment variable {{{{{0}}}}} in repository credentials")]
    MissingEnvironmentVariable(String),

    /// The engine failed on one locator; the whole batch is aborted.
    #[error("could not resolve dependency '{locator}'")]
    DependencyResolutionFailed {
        locator: String,
        #[source]
        source: EngineError,
    },
}

impl ResolveError {
    /// Process exit code for this failure. Connectivity-class engine failures
    /// exit with 0, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ResolveError::DependencyResolutionFailed {
                source: EngineError::Connection(_),
                ..
            } => 0,
            _ => 1,
        }
    }

    /// User-facing hint printed alongside connectivity-class failures.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            ResolveError::DependencyResolutionFailed {
                source: EngineError::Connection(_),
                ..
            } => Some(
                "Failed while connecting to the server. Check the connection \
                 (http/https, port, proxy, credentials, etc.) of your dependency locators.",
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_failures_exit_zero_with_hint() {
        let err = ResolveError::DependencyResolutionFailed {
            locator: "com.foo:bar:1.0".into(),
            source: EngineError::Connection("connection refused".into()),
        };
        assert_eq!(err.exit_code(), 0);
        assert!(err.remediation().unwrap().contains("proxy"));
    }

    #[test]
    fn generic_resolution_failures_exit_one() {
        let err = ResolveError::DependencyResolutionFailed {
            locator: "com.foo:bar:1.0".into(),
            source: EngineError::Resolution("not found".into()),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.remediation().is_none());
    }

    #[test]
    fn missing_env_var_message_keeps_template_delimiters() {
        let err = ResolveError::MissingEnvironmentVariable("NEXUS_TOKEN".into());
        assert!(err.to_string().contains("{{NEXUS_TOKEN}}"));
    }
}
