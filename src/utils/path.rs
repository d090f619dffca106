use std::path::{is_separator, Path, PathBuf};

/// Directory holding `path`, following `dirname` rules: `.` for a bare
/// relative name, the path itself when it has no parent (a root), and the
/// path minus its trailing separators when it ends with one.
pub fn containing_dir(path: &Path) -> PathBuf {
    if path.to_string_lossy().ends_with(is_separator) {
        return path.components().collect();
    }
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None if path.as_os_str().is_empty() => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_of_nested_file() {
        assert_eq!(
            containing_dir(Path::new("/home/user/doc.txt")),
            PathBuf::from("/home/user")
        );
    }

    #[test]
    fn bare_names_live_in_current_dir() {
        assert_eq!(containing_dir(Path::new("doc.txt")), PathBuf::from("."));
        assert_eq!(containing_dir(Path::new("")), PathBuf::from("."));
    }

    #[cfg(unix)]
    #[test]
    fn root_is_its_own_container() {
        assert_eq!(containing_dir(Path::new("/")), PathBuf::from("/"));
    }

    #[cfg(unix)]
    #[test]
    fn trailing_separator_keeps_the_directory() {
        assert_eq!(
            containing_dir(Path::new("/home/user/")),
            PathBuf::from("/home/user")
        );
        assert_eq!(
            containing_dir(Path::new("/home/user//")),
            PathBuf::from("/home/user")
        );
        assert_eq!(containing_dir(Path::new("proj/")), PathBuf::from("proj"));
    }
}
