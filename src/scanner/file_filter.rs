use crate::config::ScanConfig;
use std::path::Path;

/// Decides which directory entries take part in a scan.
pub struct FileFilter {
    source_suffix: String,
    exclude_dirs: Vec<String>,
}

impl FileFilter {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            source_suffix: config.source_suffix(),
            exclude_dirs: config.exclude_dirs.clone(),
        }
    }

    /// Case-sensitive suffix match on the bare file name.
    pub fn is_source_file(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.source_suffix)
    }

    /// Key a source file is stored under: its name without the source suffix.
    pub fn result_key(&self, file_name: &str) -> Option<String> {
        file_name
            .strip_suffix(&self.source_suffix)
            .map(|stem| stem.to_string())
    }

    pub fn should_traverse_directory(&self, path: &Path) -> bool {
        match path.file_name().and_then(|s| s.to_str()) {
            Some(dir_name) => !self.exclude_dirs.iter().any(|exclude| exclude == dir_name),
            None => true,
        }
    }

}

impl Default for FileFilter {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> ScanConfig {
        ScanConfig {
            exclude_dirs: vec!["node_modules".to_string(), "lib".to_string()],
            ..ScanConfig::default()
        }
    }

    #[test]
    fn test_source_file_detection() {
        let filter = FileFilter::new(&create_test_config());

        assert!(filter.is_source_file("Lottery.sol"));
        assert!(filter.is_source_file("a.b.sol"));

        assert!(!filter.is_source_file("Lottery.SOL"));
        assert!(!filter.is_source_file("Lottery.sol.bak"));
        assert!(!filter.is_source_file("README.md"));
        assert!(!filter.is_source_file("sol"));
    }

    #[test]
    fn test_result_key_strips_only_the_suffix() {
        let filter = FileFilter::default();

        assert_eq!(filter.result_key("Lottery.sol"), Some("Lottery".to_string()));
        assert_eq!(filter.result_key("Token.sol.sol"), Some("Token.sol".to_string()));
        assert_eq!(filter.result_key("solana.sol"), Some("solana".to_string()));
        assert_eq!(filter.result_key("notes.txt"), None);
    }

    #[test]
    fn test_extension_with_leading_dot() {
        let config = ScanConfig {
            source_extension: ".vy".to_string(),
            ..ScanConfig::default()
        };
        let filter = FileFilter::new(&config);

        assert!(filter.is_source_file("Auction.vy"));
        assert!(!filter.is_source_file("Auction.sol"));
    }

    #[test]
    fn test_directory_exclusion() {
        let filter = FileFilter::new(&create_test_config());

        assert!(filter.should_traverse_directory(Path::new("contracts")));
        assert!(filter.should_traverse_directory(Path::new("contracts/libraries")));
        assert!(!filter.should_traverse_directory(Path::new("node_modules")));
        assert!(!filter.should_traverse_directory(Path::new("contracts/lib")));
    }

    #[test]
    fn test_default_filter_traverses_everything() {
        let filter = FileFilter::default();
        assert!(filter.should_traverse_directory(Path::new(".git")));
        assert!(filter.should_traverse_directory(Path::new("node_modules")));
    }
}
