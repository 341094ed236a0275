use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenEnumError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("directory '{path}' does not exist")]
    MissingDirectory { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Duplicate contract filename '{key}': {} and {}", .first.display(), .second.display())]
    DuplicateKey {
        key: String,
        first: PathBuf,
        second: PathBuf,
    },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for GenEnumError {
    fn user_message(&self) -> String {
        match self {
            GenEnumError::MissingDirectory { path } => {
                format!("directory '{}' does not exist", path)
            }
            GenEnumError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            GenEnumError::DuplicateKey { key, first, second } => {
                format!(
                    "Unable to process multiple contracts with the same filename within the same input-dir: \
                     '{}' is produced by both '{}' and '{}'",
                    key,
                    first.display(),
                    second.display()
                )
            }
            GenEnumError::Walk(err) => match err.path() {
                Some(path) => format!("Unable to read directory entry {}: {}", path.display(), err),
                None => format!("Directory traversal failed: {}", err),
            },
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            GenEnumError::MissingDirectory { .. } => Some(
                "Check the --input-dir and --output-dir arguments; both must point to existing directories.".to_string()
            ),
            GenEnumError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config.".to_string()
            ),
            GenEnumError::DuplicateKey { .. } => Some(
                "Rename one of the contracts, or exclude one of the directories with scan.exclude_dirs.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for GenEnumError {
    fn from(error: toml::de::Error) -> Self {
        GenEnumError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenEnumError>;
