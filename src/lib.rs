pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, OutputConfig, ScanConfig};
pub use error::{GenEnumError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{EnumExtractor, ExtractedFile, GenerationReport, OutputWriter, ResultSet};
pub use scanner::{FileFilter, ScanEntry, SourceScanner};
pub use ui::{OutputFormatter, OutputMode};

use std::path::{Path, PathBuf};

/// What a traversal of the input tree produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub results: ResultSet,
    pub source_files: usize,
    pub skipped: Vec<PathBuf>,
    pub files_without_enums: Vec<PathBuf>,
}

/// Main library interface: validate, scan, then write.
pub struct GenEnum {
    config: Config,
    output_formatter: OutputFormatter,
}

impl GenEnum {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
        }
    }

    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Runs the whole pipeline. With `dry_run` nothing is created on disk and
    /// the report lists the files that would have been written.
    pub async fn generate(&self, dry_run: bool) -> Result<GenerationReport> {
        self.validate_directories().await?;

        let mut report = GenerationReport::new(
            self.config.scan.input_dir.clone(),
            self.config.scan.recursive,
            dry_run,
        );

        let outcome = self.collect_enums().await?;
        report.source_files = outcome.source_files;
        report.enums_found = outcome.results.enum_count();
        report.skipped = outcome.skipped;
        report.files_without_enums = outcome.files_without_enums;

        let writer = OutputWriter::new(&self.config.output);
        if dry_run {
            let enum_dir = writer.resolve_enum_dir().await?;
            for file in &outcome.results {
                let target = writer.target_path(&enum_dir, &file.key);
                self.output_formatter
                    .info(&format!("Would write {}", target.display()));
                report.written.push(target);
            }
            report.output_directory = enum_dir;
        } else {
            let enum_dir = writer.prepare().await?;
            report.written = self.write_enums(&writer, &enum_dir, &outcome.results).await?;
            report.output_directory = enum_dir;
        }

        Ok(report)
    }

    /// Both configured directories must exist and be directories.
    pub async fn validate_directories(&self) -> Result<()> {
        for dir in [&self.config.scan.input_dir, &self.config.output.output_dir] {
            ensure_directory(dir).await?;
        }
        Ok(())
    }

    /// Walks the input tree and extracts enums from every source file.
    ///
    /// Files are read one at a time in traversal order, so the first duplicate
    /// key found is always the same one and aborts the walk immediately.
    pub async fn collect_enums(&self) -> Result<ScanOutcome> {
        let input_dir = &self.config.scan.input_dir;
        self.output_formatter
            .start_operation(&format!("Scanning {}", input_dir.display()));

        let scanner = SourceScanner::new(&self.config.scan);
        let extractor = EnumExtractor::new(&self.config.output.declaration_prefix)?;
        let mut outcome = ScanOutcome::default();

        for entry in scanner.entries(input_dir) {
            match entry? {
                ScanEntry::Skipped { path, file_name } => {
                    self.output_formatter
                        .warning(&format!("'{}' is not a Solidity file", file_name));
                    outcome.skipped.push(path);
                }
                ScanEntry::Source { path, key } => {
                    outcome.source_files += 1;
                    // Invalid UTF-8 sequences become U+FFFD.
                    let bytes = tokio::fs::read(&path).await?;
                    let content = String::from_utf8_lossy(&bytes);
                    let declarations = extractor.extract(&content);

                    if declarations.is_empty() {
                        self.output_formatter
                            .warning(&format!("'{}' contains no enums", path.display()));
                        outcome.files_without_enums.push(path);
                        continue;
                    }

                    let count = declarations.len();
                    outcome
                        .results
                        .insert(ExtractedFile::new(key, path.clone(), declarations))?;
                    self.output_formatter.success(&format!(
                        "'{}' contains {} enum(s)",
                        path.display(),
                        count
                    ));
                }
            }
        }

        self.output_formatter.debug(&format!(
            "Scanned {} source file(s), {} with enums",
            outcome.source_files,
            outcome.results.len()
        ));

        Ok(outcome)
    }

    async fn write_enums(
        &self,
        writer: &OutputWriter,
        enum_dir: &Path,
        results: &ResultSet,
    ) -> Result<Vec<PathBuf>> {
        self.output_formatter
            .start_operation(&format!("Writing enums to {}", enum_dir.display()));

        let report_written = |path: &Path| {
            self.output_formatter
                .success(&format!("Wrote {}", path.display()));
        };

        writer
            .write_all(enum_dir, results, Some(&report_written))
            .await
    }

    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn handle_error(&self, error: &GenEnumError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

async fn ensure_directory(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        _ => Err(GenEnumError::MissingDirectory {
            path: path.display().to_string(),
        }),
    }
}

pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
