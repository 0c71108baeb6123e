//! Classpath assembly: platform separator, entry rendering, joining.

use std::path::{Path, PathBuf};

/// Platform classpath separator. Also used as the cache key separator.
pub const SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Render one resolved artifact path as a classpath entry.
///
/// The path is made absolute (relative paths are resolved against the current
/// directory) and double-quoted when it contains a space, so the joined
/// classpath survives being handed to a shell or a JVM argument list.
pub fn render_entry(path: &Path) -> String {
    let text = absolutize(path).to_string_lossy().into_owned();
    if text.contains(' ') {
        format!("\"{text}\"")
    } else {
        text
    }
}

/// Join rendered entries with the platform separator.
pub fn join(entries: &[String]) -> String {
    entries.join(&SEPARATOR.to_string())
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_entry_quotes_paths_with_spaces() {
        let entry = render_entry(Path::new("/repo/my lib/lib.jar"));
        assert_eq!(entry, "\"/repo/my lib/lib.jar\"");
    }

    #[test]
    fn render_entry_leaves_plain_paths_unquoted() {
        let entry = render_entry(Path::new("/repo/lib.jar"));
        assert_eq!(entry, "/repo/lib.jar");
    }

    #[test]
    fn render_entry_absolutizes_relative_paths() {
        let entry = render_entry(Path::new("lib.jar"));
        let unquoted = entry.trim_matches('"');
        assert!(Path::new(unquoted).is_absolute());
        assert!(unquoted.ends_with("lib.jar"));
    }

    #[test]
    fn join_uses_platform_separator() {
        let joined = join(&["/a.jar".to_string(), "/b.jar".to_string()]);
        assert_eq!(joined, format!("/a.jar{SEPARATOR}/b.jar"));
    }

    #[test]
    fn join_of_empty_slice_is_empty() {
        assert_eq!(join(&[]), "");
    }
}
