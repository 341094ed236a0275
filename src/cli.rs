use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "genenum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate TypeScript const enums from Solidity sources")]
#[command(
    long_about = "genenum scans a directory for Solidity files, extracts every enum declaration \
                       and writes one TypeScript file of const enums per contract into <output-dir>/enums."
)]
#[command(after_help = "EXAMPLES:\n  \
    genenum --input-dir contracts --output-dir src/types\n  \
    genenum -i contracts -o frontend --flat\n  \
    genenum --config genenum.toml --dry-run")]
pub struct Cli {
    /// Directory scanned for Solidity sources
    #[arg(short, long, value_name = "PATH")]
    pub input_dir: Option<PathBuf>,

    /// Directory under which the enums directory is created
    #[arg(short, long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Only scan the top level of the input directory
    #[arg(long)]
    pub flat: bool,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for status messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are printed)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Scan and report without writing any files
    #[arg(long, help = "Show what would be generated without writing anything")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_input_dir(self.input_dir.clone())
            .with_output_dir(self.output_dir.clone())
            .with_recursive(self.flat.then_some(false))
    }

    /// Default verbosity shows warnings, so `-v` only adds debug lines.
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose + 1
        }
    }
}
