use crate::config::ScanConfig;
use crate::error::{GenEnumError, Result};
use crate::scanner::file_filter::FileFilter;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// One non-directory entry met while walking the input tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEntry {
    /// Regular file carrying the source suffix, with the key its enums are stored under.
    Source { path: PathBuf, key: String },
    /// Anything else: other files, symlinks, special files.
    Skipped { path: PathBuf, file_name: String },
}

impl ScanEntry {
    pub fn path(&self) -> &Path {
        match self {
            ScanEntry::Source { path, .. } | ScanEntry::Skipped { path, .. } => path,
        }
    }
}

pub struct SourceScanner {
    filter: FileFilter,
    recursive: bool,
}

impl SourceScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            filter: FileFilter::new(config),
            recursive: config.recursive,
        }
    }

    /// Depth-first walk below `root`, yielding entries lazily so a caller can
    /// stop at the first fatal condition.
    ///
    /// Entries of one directory come in file-name order and a subdirectory is
    /// descended into where it appears in that order. Symlinks are not followed.
    pub fn entries<'a>(&'a self, root: &Path) -> impl Iterator<Item = Result<ScanEntry>> + 'a {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| self.should_traverse(e))
            .filter_map(move |entry| match entry {
                Ok(entry) => self.classify(&entry).map(Ok),
                Err(err) => Some(Err(GenEnumError::from(err))),
            })
    }

    fn should_traverse(&self, entry: &DirEntry) -> bool {
        if entry.file_type().is_dir() {
            return self.filter.should_traverse_directory(entry.path());
        }
        true
    }

    fn classify(&self, entry: &DirEntry) -> Option<ScanEntry> {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return None;
        }

        let path = entry.path().to_path_buf();
        let file_name = entry.file_name().to_string_lossy().to_string();

        if file_type.is_file() {
            if let Some(key) = self.filter.result_key(&file_name) {
                return Some(ScanEntry::Source { path, key });
            }
        }

        Some(ScanEntry::Skipped { path, file_name })
    }
}
