//! Path resolution
//!
//! Turns user-typed paths into normalized absolute paths. Resolution is
//! a total function: any input string maps to some absolute path, and
//! only a later tree lookup decides whether it exists.

/// Resolves user input against a base directory.
///
/// Input starting with `/` is taken as absolute; anything else is joined
/// onto `base`. `.` segments are dropped, `..` pops one segment and is a
/// no-op at the root, repeated slashes collapse.
///
/// # Examples
///
/// ```
/// use vfs::path::resolve;
///
/// assert_eq!(resolve("/home/admin", "documentos"), "/home/admin/documentos");
/// assert_eq!(resolve("/home/admin", "/etc"), "/etc");
/// assert_eq!(resolve("/home/admin", ".."), "/home");
/// assert_eq!(resolve("/", ".."), "/");
/// ```
pub fn resolve(base: &str, input: &str) -> String {
    let candidate = if input.starts_with('/') {
        input.to_string()
    } else {
        format!("{}/{}", base, input)
    };

    let mut resolved: Vec<&str> = Vec::new();
    for segment in candidate.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }

    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Splits a normalized absolute path into its segments.
///
/// The root path yields no segments.
pub fn segments(abs_path: &str) -> impl Iterator<Item = &str> {
    abs_path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_segment() {
        assert_eq!(resolve("/home/admin", "documentos"), "/home/admin/documentos");
    }

    #[test]
    fn test_resolve_absolute_ignores_base() {
        assert_eq!(resolve("/home/admin", "/var/log"), "/var/log");
    }

    #[test]
    fn test_resolve_parent() {
        assert_eq!(resolve("/home/admin", ".."), "/home");
        assert_eq!(resolve("/home/admin", "../.."), "/");
    }

    #[test]
    fn test_resolve_parent_at_root_is_noop() {
        assert_eq!(resolve("/", ".."), "/");
        assert_eq!(resolve("/home", "../../.."), "/");
    }

    #[test]
    fn test_resolve_dot_is_dropped() {
        assert_eq!(resolve("/home/admin", "."), "/home/admin");
        assert_eq!(resolve("/home/admin", "./documentos/."), "/home/admin/documentos");
    }

    #[test]
    fn test_resolve_mixed_dots() {
        assert_eq!(resolve("/home/admin", "../admin/./documentos"), "/home/admin/documentos");
    }

    #[test]
    fn test_resolve_collapses_repeated_slashes() {
        assert_eq!(resolve("/home", "admin//documentos"), "/home/admin/documentos");
        assert_eq!(resolve("/home", "//etc"), "/etc");
    }

    #[test]
    fn test_resolve_trailing_slash() {
        assert_eq!(resolve("/home", "admin/"), "/home/admin");
        assert_eq!(resolve("/home/admin", "/var/"), "/var");
    }

    #[test]
    fn test_resolve_from_root() {
        assert_eq!(resolve("/", "etc"), "/etc");
    }

    #[test]
    fn test_segments_of_root_is_empty() {
        assert_eq!(segments("/").count(), 0);
    }

    #[test]
    fn test_segments_of_nested_path() {
        let parts: Vec<&str> = segments("/home/admin/documentos").collect();
        assert_eq!(parts, vec!["home", "admin", "documentos"]);
    }
}
