//! Dependency locator parsing.
//!
//! Supported formats:
//!   `groupId:artifactId:version`
//!   `groupId:artifactId:version:classifier`
//!   `groupId:artifactId:version:classifier@type`
//!   `groupId:artifactId:version@type`

use std::fmt;

use crate::error::ResolveError;

/// A fully parsed artifact coordinate. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    /// Plain version or a Maven range expression. May be empty (the engine
    /// rejects it later); never contains `:` or `@`.
    pub version: String,
    pub classifier: Option<String>,
    /// Packaging type. Defaults to `"jar"`.
    pub packaging: String,
}

impl ArtifactCoordinate {
    /// Parse a dependency locator string.
    ///
    /// # Examples
    /// ```
    /// use jcp_core::coordinate::ArtifactCoordinate;
    /// let c = ArtifactCoordinate::parse("com.foo:bar:1.2.3").unwrap();
    /// assert_eq!(c.group_id, "com.foo");
    /// ```
    pub fn parse(locator: &str) -> Result<Self, ResolveError> {
        // Split off @type first; the remainder is colon-separated.
        let (gav, packaging) = match locator.rsplit_once('@') {
            Some((gav, ty)) if !ty.is_empty() => (gav, ty),
            Some((gav, _)) => (gav, "jar"),
            None => (locator, "jar"),
        };

        let parts: Vec<&str> = gav.split(':').collect();
        let (group_id, artifact_id, version, classifier) = match parts.as_slice() {
            [g, a, v] => (*g, *a, *v, None),
            [g, a, v, c] => (*g, *a, *v, Some(*c)),
            _ => return Err(ResolveError::InvalidLocatorFormat(locator.to_string())),
        };

        if group_id.is_empty() || artifact_id.is_empty() {
            return Err(ResolveError::InvalidLocatorFormat(locator.to_string()));
        }

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: format_version(version),
            classifier: classifier.map(str::to_string),
            packaging: packaging.to_string(),
        })
    }
}

/// Rewrites a trailing `+` as an open-ended version range: `1.2+` → `[1.2,)`.
/// Everything else passes through unchanged.
fn format_version(version: &str) -> String {
    match version.strip_suffix('+') {
        Some(prefix) => format!("[{prefix},)"),
        None => version.to_string(),
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        if self.packaging != "jar" {
            write!(f, "@{}", self.packaging)?;
        }
        Ok(())
    }
}
