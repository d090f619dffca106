use crate::error::{ExplorerError, Result};
use crate::features::launcher::PathKind;
use std::path::Path;

pub fn classify_path(path: &Path) -> Result<PathKind> {
    let metadata = std::fs::metadata(path).map_err(|source| ExplorerError::PathAccess {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.is_dir() {
        Ok(PathKind::Directory)
    } else {
        Ok(PathKind::File)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "hello").unwrap();

        assert_eq!(classify_path(dir.path()).unwrap(), PathKind::Directory);
        assert_eq!(classify_path(&file).unwrap(), PathKind::File);
    }

    #[test]
    fn missing_path_is_an_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = classify_path(&missing).unwrap_err();
        match err {
            ExplorerError::PathAccess { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
