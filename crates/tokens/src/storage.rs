//! Reads and writes token documents on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::store::{ThemeMode, TokenError, TokenStore};

/// Reader/writer persisting one JSON document per theme mode.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the document backing one mode.
    #[must_use]
    pub fn document_path(&self, mode: ThemeMode) -> PathBuf {
        self.dir.join(format!("{}.json", mode.as_str()))
    }

    fn ensure_dir(&self) -> Result<(), TokenError> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Writes every registered mode's document, pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Io`] when the directory or a document cannot be
    /// written.
    pub fn save(&self, store: &TokenStore) -> Result<(), TokenError> {
        self.ensure_dir()?;
        for mode in store.modes() {
            let document = store.to_document(mode)?;
            let buffer = serde_json::to_vec_pretty(&document)?;
            fs::write(self.document_path(mode), buffer)?;
        }
        Ok(())
    }

    /// Loads one document per mode and rebuilds a validated store.
    ///
    /// Goes through [`TokenStore::from_documents`], so a truncated or edited
    /// file set fails structural validation before any consumer reads it.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Io`] when a document is unreadable,
    /// [`TokenError::Document`] when one is not valid JSON, or
    /// [`TokenError::StructuralMismatch`] when the documents disagree.
    pub fn load(&self) -> Result<TokenStore, TokenError> {
        let mut documents = Vec::with_capacity(ThemeMode::ALL.len());
        for mode in ThemeMode::ALL {
            let bytes = fs::read(self.document_path(mode))?;
            let document: Value = serde_json::from_slice(&bytes)?;
            documents.push((mode, document));
        }
        TokenStore::from_documents(documents)
    }

    /// Returns the backing directory, primarily used in diagnostics.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn documents_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let documents = DocumentStore::new(dir.path().to_path_buf());
        let store = TokenStore::new();

        documents.save(&store).unwrap();
        let reloaded = documents.load().unwrap();

        assert_eq!(reloaded, store);
        assert_eq!(
            reloaded.tokens(ThemeMode::Light).unwrap().colors.primary.main,
            "#A8D8EA"
        );
    }

    #[test]
    fn load_rejects_truncated_document() {
        let dir = tempdir().unwrap();
        let documents = DocumentStore::new(dir.path().to_path_buf());
        documents.save(&TokenStore::new()).unwrap();

        // Strip the dark document down to colors only.
        let path = documents.document_path(ThemeMode::Dark);
        let mut dark: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        if let Value::Object(map) = &mut dark {
            map.retain(|key, _| key == "colors");
        }
        fs::write(&path, serde_json::to_vec_pretty(&dark).unwrap()).unwrap();

        assert!(matches!(
            documents.load(),
            Err(TokenError::StructuralMismatch { .. })
        ));
    }

    #[test]
    fn load_reports_missing_files_as_io_errors() {
        let dir = tempdir().unwrap();
        let documents = DocumentStore::new(dir.path().to_path_buf());
        assert!(matches!(documents.load(), Err(TokenError::Io(_))));
    }
}
