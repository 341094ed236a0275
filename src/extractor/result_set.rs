use crate::error::{GenEnumError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// Enum declarations pulled out of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub key: String,
    pub source_path: PathBuf,
    pub declarations: Vec<String>,
}

impl ExtractedFile {
    pub fn new(key: String, source_path: PathBuf, declarations: Vec<String>) -> Self {
        Self {
            key,
            source_path,
            declarations,
        }
    }

    pub fn enum_count(&self) -> usize {
        self.declarations.len()
    }
}

/// Every extracted file of a run, keyed by file name without the source suffix.
///
/// Iteration follows insertion order. Keys are unique across the whole tree.
#[derive(Debug, Default)]
pub struct ResultSet {
    files: Vec<ExtractedFile>,
    index: HashMap<String, usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`GenEnumError::DuplicateKey`] when another source already
    /// produced the same key; the set is left unchanged in that case.
    pub fn insert(&mut self, file: ExtractedFile) -> Result<()> {
        if let Some(&existing) = self.index.get(&file.key) {
            return Err(GenEnumError::DuplicateKey {
                key: file.key,
                first: self.files[existing].source_path.clone(),
                second: file.source_path,
            });
        }

        self.index.insert(file.key.clone(), self.files.len());
        self.files.push(file);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&ExtractedFile> {
        self.index.get(key).map(|&i| &self.files[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtractedFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn enum_count(&self) -> usize {
        self.files.iter().map(ExtractedFile::enum_count).sum()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ExtractedFile;
    type IntoIter = std::slice::Iter<'a, ExtractedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
