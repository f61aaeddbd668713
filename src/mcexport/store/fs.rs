use super::{decode, DatabaseSource};
use crate::error::{ExportError, Result};
use crate::model::Database;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A massCode `db.json` on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Lets a caller report a missing input before doing anything else.
    /// `load` does not depend on it.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl DatabaseSource for FileSource {
    fn load(&self) -> Result<Database> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExportError::FileNotFound(self.path.clone()),
            _ => ExportError::Read(self.path.clone(), e),
        })?;
        decode(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_reported_before_decode() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));

        match source.load() {
            Err(ExportError::FileNotFound(path)) => assert!(path.ends_with("missing.json")),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_decodes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(
            &path,
            r#"{"folders": [], "snippets": [{"id": "s1", "name": "Hi"}], "tags": []}"#,
        )
        .unwrap();

        let db = FileSource::new(&path).load().unwrap();
        assert_eq!(db.snippets.len(), 1);
        assert_eq!(db.snippets[0].name, "Hi");
    }

    #[test]
    fn test_unreadable_input_is_a_read_error() {
        let dir = tempdir().unwrap();

        match FileSource::new(dir.path()).load() {
            Err(ExportError::Read(path, _)) => assert_eq!(path, dir.path()),
            other => panic!("expected Read, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_content_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "not json").unwrap();

        let err = FileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, ExportError::Decode(_)));
    }
}
