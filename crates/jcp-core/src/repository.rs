//! Repository references and descriptors.
//!
//! A reference is either `url` or `id=url`, with a few well-known aliases.
//! The `mavenCentral` alias does not carry a URL of its own: it tells the
//! resolution engine to enable its built-in central repository.

use crate::error::ResolveError;

pub const JCENTER_URL: &str = "https://jcenter.bintray.com/";
pub const GOOGLE_URL: &str = "https://maven.google.com/";

/// A repository the resolution engine should consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repository {
    /// Repository addressed by URL, optionally tagged with an id.
    Named { id: Option<String>, url: String },
    /// Marker: enable the engine's built-in central repository.
    Central,
}

impl Repository {
    fn named(id: Option<&str>, url: &str) -> Self {
        Repository::Named {
            id: id.map(str::to_string),
            url: url.to_string(),
        }
    }

    /// Parse a repository reference string.
    ///
    /// Aliases are matched case-insensitively: `jcenter` and `google` map to
    /// fixed URLs (with a default id when none is given), `mavenCentral` maps
    /// to [`Repository::Central`]. Anything else is taken as a literal URL.
    pub fn parse_reference(reference: &str) -> Result<Self, ResolveError> {
        let parts: Vec<&str> = reference.split('=').collect();
        let (id, target) = match parts.as_slice() {
            [url] => (None, *url),
            [id, url] => (Some(*id), *url),
            _ => {
                return Err(ResolveError::InvalidRepositoryReference(
                    reference.to_string(),
                ))
            }
        };

        if target.eq_ignore_ascii_case("jcenter") {
            Ok(Self::named(Some(id.unwrap_or("jcenter")), JCENTER_URL))
        } else if target.eq_ignore_ascii_case("google") {
            Ok(Self::named(Some(id.unwrap_or("google")), GOOGLE_URL))
        } else if target.eq_ignore_ascii_case("mavencentral") {
            Ok(Repository::Central)
        } else {
            Ok(Self::named(id, target))
        }
    }

    /// Repository set used when a resolution call supplies none.
    pub fn default_set() -> Vec<Repository> {
        vec![Self::named(Some("jcenter"), JCENTER_URL)]
    }
}

/// Decode a `{{NAME}}` template against the process environment.
///
/// Values not wrapped in the delimiter pair pass through unchanged. Used for
/// repository credential fields supplied via the config file.
pub fn decode_env(value: &str) -> Result<String, ResolveError> {
    let Some(name) = value
        .strip_prefix("{{")
        .and_then(|inner| inner.strip_suffix("}}"))
    else {
        return Ok(value.to_string());
    };
    std::env::var(name).map_err(|_| ResolveError::MissingEnvironmentVariable(name.to_string()))
}
