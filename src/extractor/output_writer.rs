use crate::config::OutputConfig;
use crate::error::Result;
use crate::extractor::{ExtractedFile, ResultSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const GENERATOR_NAME: &str = "genenum";

/// Comment block every generated file starts with, followed by a blank line.
pub fn generated_header() -> String {
    format!(
        "/*\n\tgenerated by {} v{}\n\tdo not modify by hand\n*/\n\n",
        GENERATOR_NAME,
        env!("CARGO_PKG_VERSION")
    )
}

/// Full content of the generated file for one source: header, then the
/// declarations separated by blank lines.
pub fn render(file: &ExtractedFile) -> String {
    format!("{}{}", generated_header(), file.declarations.join("\n\n"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub input_directory: PathBuf,
    pub output_directory: PathBuf,
    pub recursive: bool,
    pub dry_run: bool,
    pub source_files: usize,
    pub enums_found: usize,
    pub files_without_enums: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationReport {
    pub fn new(input_directory: PathBuf, recursive: bool, dry_run: bool) -> Self {
        Self {
            input_directory,
            output_directory: PathBuf::new(),
            recursive,
            dry_run,
            source_files: 0,
            enums_found: 0,
            files_without_enums: Vec::new(),
            skipped: Vec::new(),
            written: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}

/// Writes one file per [`ExtractedFile`] into `<output_dir>/<subdirectory>`.
pub struct OutputWriter {
    output_dir: PathBuf,
    subdirectory: String,
    file_extension: String,
}

impl OutputWriter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            subdirectory: config.subdirectory.clone(),
            file_extension: config.file_extension.trim_start_matches('.').to_string(),
        }
    }

    /// Absolute directory the generated files go to. Nothing is created.
    pub async fn resolve_enum_dir(&self) -> Result<PathBuf> {
        let output_root = fs::canonicalize(&self.output_dir).await?;
        Ok(output_root.join(&self.subdirectory))
    }

    /// Resolves the enum directory and creates it along with missing parents.
    /// An existing directory is left as is.
    pub async fn prepare(&self) -> Result<PathBuf> {
        let enum_dir = self.resolve_enum_dir().await?;
        fs::create_dir_all(&enum_dir).await?;
        Ok(enum_dir)
    }

    pub fn target_path(&self, enum_dir: &Path, key: &str) -> PathBuf {
        enum_dir.join(format!("{}.{}", key, self.file_extension))
    }

    pub async fn write_file(&self, enum_dir: &Path, file: &ExtractedFile) -> Result<PathBuf> {
        let target = self.target_path(enum_dir, &file.key);
        fs::write(&target, render(file)).await?;
        Ok(target)
    }

    /// Writes every entry in insertion order. Not transactional: files written
    /// before a failure stay on disk.
    pub async fn write_all(
        &self,
        enum_dir: &Path,
        results: &ResultSet,
        on_written: Option<&dyn Fn(&Path)>,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(results.len());

        for file in results {
            let target = self.write_file(enum_dir, file).await?;
            if let Some(callback) = on_written {
                callback(&target);
            }
            written.push(target);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn create_test_config(output_dir: &Path) -> OutputConfig {
        OutputConfig {
            output_dir: output_dir.to_path_buf(),
            ..OutputConfig::default()
        }
    }

    fn lottery() -> ExtractedFile {
        ExtractedFile::new(
            "Lottery".to_string(),
            PathBuf::from("contracts/Lottery.sol"),
            vec![
                "const enum State { Open, Closed }".to_string(),
                "const enum Outcome { Win, Lose }".to_string(),
            ],
        )
    }

    #[test]
    fn test_generated_header() {
        let header = generated_header();
        assert!(header.starts_with("/*\n\tgenerated by genenum v"));
        assert!(header.contains(env!("CARGO_PKG_VERSION")));
        assert!(header.ends_with("\tdo not modify by hand\n*/\n\n"));
    }

    #[test]
    fn test_render_joins_with_blank_lines() {
        let content = render(&lottery());
        let body = content.strip_prefix(&generated_header()).unwrap();

        assert_eq!(
            body,
            "const enum State { Open, Closed }\n\nconst enum Outcome { Win, Lose }"
        );
    }

    #[tokio::test]
    async fn test_prepare_creates_and_reuses_directory() {
        let temp_dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(&create_test_config(temp_dir.path()));

        let enum_dir = writer.prepare().await.unwrap();
        assert!(enum_dir.is_absolute());
        assert!(enum_dir.is_dir());
        assert!(enum_dir.ends_with("enums"));

        let again = writer.prepare().await.unwrap();
        assert_eq!(enum_dir, again);
    }

    #[tokio::test]
    async fn test_resolve_does_not_create() {
        let temp_dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(&create_test_config(temp_dir.path()));

        let enum_dir = writer.resolve_enum_dir().await.unwrap();
        assert!(!enum_dir.exists());
    }

    #[tokio::test]
    async fn test_write_all_reports_each_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(&create_test_config(temp_dir.path()));
        let enum_dir = writer.prepare().await.unwrap();

        let mut results = ResultSet::new();
        results.insert(lottery()).unwrap();
        results
            .insert(ExtractedFile::new(
                "Token".to_string(),
                PathBuf::from("Token.sol"),
                vec!["const enum Kind { A }".to_string()],
            ))
            .unwrap();

        let seen = Mutex::new(Vec::new());
        let callback = |path: &Path| seen.lock().unwrap().push(path.to_path_buf());
        let written = writer
            .write_all(&enum_dir, &results, Some(&callback))
            .await
            .unwrap();

        assert_eq!(written, vec![enum_dir.join("Lottery.ts"), enum_dir.join("Token.ts")]);
        assert_eq!(*seen.lock().unwrap(), written);

        let content = std_fs::read_to_string(enum_dir.join("Token.ts")).unwrap();
        assert_eq!(content, format!("{}const enum Kind {{ A }}", generated_header()));
    }

    #[tokio::test]
    async fn test_custom_extension() {
        let temp_dir = TempDir::new().unwrap();
        let config = OutputConfig {
            output_dir: temp_dir.path().to_path_buf(),
            file_extension: ".d.ts".to_string(),
            ..OutputConfig::default()
        };
        let writer = OutputWriter::new(&config);
        let enum_dir = writer.prepare().await.unwrap();

        let target = writer.write_file(&enum_dir, &lottery()).await.unwrap();

        assert_eq!(target, enum_dir.join("Lottery.d.ts"));
        assert!(target.exists());
    }

    #[tokio::test]
    async fn test_missing_output_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(&create_test_config(&temp_dir.path().join("nope")));

        assert!(writer.prepare().await.is_err());
    }
}
