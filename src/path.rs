//! Pure path-string utilities.
//!
//! The crate's path model is a UTF-8 string with `/` separators; these
//! helpers slice and join such strings without touching the storage.
//! Nothing here checks that a path exists — validity is checked lazily at
//! the point of use.

/// Returns the final path segment.
///
/// Trailing separators are ignored; the root path `/` has no name.
///
/// # Examples
///
/// ```rust
/// assert_eq!(itemfs::path::name("/Users/some/Rugby"), "Rugby");
/// assert_eq!(itemfs::path::name("notes.txt"), "notes.txt");
/// ```
pub fn name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((_, last)) => last,
        None => trimmed,
    }
}

/// Returns the path extension: the substring after the last `.` of the
/// final segment, or `None` if the segment contains no `.`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(itemfs::path::extension("/a/archive.tar.gz"), Some("gz"));
/// assert_eq!(itemfs::path::extension("/a/Makefile"), None);
/// ```
pub fn extension(path: &str) -> Option<&str> {
    name(path).rsplit_once('.').map(|(_, ext)| ext)
}

/// Returns the final path segment with its extension suffix stripped.
pub fn name_without_extension(path: &str) -> &str {
    let name = name(path);
    match name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => name,
    }
}

/// Returns the path with the final segment removed.
///
/// A single-segment absolute path yields `/`; a single-segment relative
/// path (and the root itself) yields the empty string.
pub fn parent(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some(("", _)) => "/",
        Some((rest, _)) => rest,
        None => "",
    }
}

/// Strips `prefix` (normalized to end with exactly one separator) from the
/// front of `path`.
///
/// Returns the remainder on a match and `path` unchanged otherwise — this is
/// a best-effort strip, not an error; callers must not assume success.
///
/// # Examples
///
/// ```rust
/// use itemfs::path::relative_path;
///
/// assert_eq!(relative_path("/Users/some/Rugby", "/Users/some"), "Rugby");
/// assert_eq!(relative_path("/Users/some/Rugby", "/Users/some/"), "Rugby");
/// assert_eq!(relative_path("/Users/some/Rugby", "/some/"), "/Users/some/Rugby");
/// ```
pub fn relative_path<'a>(path: &'a str, prefix: &str) -> &'a str {
    let prefix = prefix.trim_end_matches('/');
    if let Some(rest) = path.strip_prefix(prefix) {
        if let Some(rest) = rest.strip_prefix('/') {
            return rest;
        }
    }
    path
}

/// Joins a component onto a base path with a single separator.
///
/// Embedded separators inside `component` are not normalized; a trailing
/// separator on `base` is not doubled.
pub fn join(base: &str, component: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{component}")
    } else {
        format!("{base}/{component}")
    }
}

/// Returns `true` if the final path segment starts with a `.`.
pub fn is_hidden(path: &str) -> bool {
    name(path).starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_takes_final_segment() {
        assert_eq!(name("/Users/some/Rugby"), "Rugby");
        assert_eq!(name("/Users/some/Rugby/"), "Rugby");
        assert_eq!(name("relative/file.txt"), "file.txt");
        assert_eq!(name("file.txt"), "file.txt");
        assert_eq!(name("/"), "");
    }

    #[test]
    fn extension_after_last_dot() {
        assert_eq!(extension("/a/file.txt"), Some("txt"));
        assert_eq!(extension("/a/archive.tar.gz"), Some("gz"));
        assert_eq!(extension("/a/Makefile"), None);
        assert_eq!(extension("/a.b/Makefile"), None);
        assert_eq!(extension("/a/.gitignore"), Some("gitignore"));
    }

    #[test]
    fn name_without_extension_strips_suffix() {
        assert_eq!(name_without_extension("/a/file.txt"), "file");
        assert_eq!(name_without_extension("/a/archive.tar.gz"), "archive.tar");
        assert_eq!(name_without_extension("/a/Makefile"), "Makefile");
    }

    #[test]
    fn parent_drops_final_segment() {
        assert_eq!(parent("/Users/some/Rugby"), "/Users/some");
        assert_eq!(parent("/Users"), "/");
        assert_eq!(parent("relative/file.txt"), "relative");
        assert_eq!(parent("file.txt"), "");
        assert_eq!(parent("/"), "");
    }

    #[test]
    fn relative_path_strips_matching_prefix() {
        assert_eq!(relative_path("/Users/some/Rugby", "/Users/some"), "Rugby");
        assert_eq!(relative_path("/Users/some/Rugby", "/Users/some/"), "Rugby");
        assert_eq!(
            relative_path("/Users/some/Rugby/Pods", "/Users/some"),
            "Rugby/Pods"
        );
    }

    #[test]
    fn relative_path_passes_through_on_no_match() {
        assert_eq!(
            relative_path("/Users/some/Rugby", "/some/"),
            "/Users/some/Rugby"
        );
        // Prefix must match a whole segment, not a substring of one.
        assert_eq!(
            relative_path("/Users/some/Rugby", "/Users/som"),
            "/Users/some/Rugby"
        );
        // A path equal to the prefix has no remainder to return.
        assert_eq!(relative_path("/Users/some", "/Users/some"), "/Users/some");
    }

    #[test]
    fn join_uses_single_separator() {
        assert_eq!(join("/a/b", "c.txt"), "/a/b/c.txt");
        assert_eq!(join("/", "c.txt"), "/c.txt");
        assert_eq!(join("a", "b/c"), "a/b/c");
    }

    #[test]
    fn hidden_entries_start_with_dot() {
        assert!(is_hidden("/a/.git"));
        assert!(is_hidden(".profile"));
        assert!(!is_hidden("/a/visible"));
        assert!(!is_hidden("/a/.git/config"));
    }
}
