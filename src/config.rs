use crate::error::{GenEnumError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    pub input_dir: PathBuf,
    pub source_extension: String,
    pub recursive: bool,
    pub exclude_dirs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub subdirectory: String,
    pub file_extension: String,
    pub declaration_prefix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            source_extension: "sol".to_string(),
            recursive: true,
            exclude_dirs: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Suffix a file name must end with to be treated as a source file, e.g. `.sol`.
    pub fn source_suffix(&self) -> String {
        format!(".{}", self.source_extension.trim_start_matches('.'))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            subdirectory: "enums".to_string(),
            file_extension: "ts".to_string(),
            declaration_prefix: "const".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(GenEnumError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| GenEnumError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| GenEnumError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["genenum.toml", ".genenum.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref input_dir) = cli_args.input_dir {
            self.scan.input_dir = input_dir.clone();
        }

        if let Some(ref output_dir) = cli_args.output_dir {
            self.output.output_dir = output_dir.clone();
        }

        if let Some(recursive) = cli_args.recursive {
            self.scan.recursive = recursive;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| GenEnumError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| GenEnumError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let extension = self.scan.source_extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(GenEnumError::Config {
                message: "A source file extension must be specified".to_string(),
            });
        }

        if self.output.file_extension.trim_start_matches('.').is_empty() {
            return Err(GenEnumError::Config {
                message: "An output file extension must be specified".to_string(),
            });
        }

        // The subdirectory is joined onto the output path, so it must stay a single component
        let subdirectory = Path::new(&self.output.subdirectory);
        if self.output.subdirectory.is_empty()
            || subdirectory.components().count() != 1
            || subdirectory.is_absolute()
            || self.output.subdirectory == ".."
        {
            return Err(GenEnumError::Config {
                message: format!(
                    "Output subdirectory must be a single directory name, got '{}'",
                    self.output.subdirectory
                ),
            });
        }

        if self.output.declaration_prefix.trim().is_empty() {
            return Err(GenEnumError::Config {
                message: "Declaration prefix must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub recursive: Option<bool>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_dir(mut self, input_dir: Option<PathBuf>) -> Self {
        self.input_dir = input_dir;
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_recursive(mut self, recursive: Option<bool>) -> Self {
        self.recursive = recursive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scan.input_dir, PathBuf::from("."));
        assert_eq!(config.output.output_dir, PathBuf::from("."));
        assert_eq!(config.scan.source_extension, "sol");
        assert!(config.scan.recursive);
        assert_eq!(config.output.subdirectory, "enums");
        assert_eq!(config.output.file_extension, "ts");
        assert_eq!(config.scan.source_suffix(), ".sol");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.scan.source_extension = ".".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.output.subdirectory = "../escape".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.output.declaration_prefix = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_operations() {
        let mut config = Config::default();
        config.scan.recursive = false;
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).unwrap();

        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert!(!loaded_config.scan.recursive);
        assert_eq!(loaded_config.output.subdirectory, "enums");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[scan]\nrecursive = false\n").unwrap();
        assert!(!config.scan.recursive);
        assert_eq!(config.scan.source_extension, "sol");
        assert_eq!(config.output.declaration_prefix, "const");
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load_from_file("definitely/not/here.toml");
        assert!(matches!(result, Err(GenEnumError::Config { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();

        let overrides = CliOverrides::new()
            .with_input_dir(Some(PathBuf::from("contracts")))
            .with_recursive(Some(false));

        config.merge_with_cli_args(&overrides);

        assert_eq!(config.scan.input_dir, PathBuf::from("contracts"));
        assert_eq!(config.output.output_dir, PathBuf::from("."));
        assert!(!config.scan.recursive);
    }

    #[test]
    fn test_sample_config_generation() {
        let sample = Config::create_sample_config();
        assert!(sample.contains("[scan]"));
        assert!(sample.contains("[output]"));
        assert!(sample.contains("source_extension = \"sol\""));
    }
}
