use clap::Parser;
use genenum::{Cli, GenEnum, GenEnumError, OutputFormatter, OutputMode, UserFriendlyError};
use std::process;

#[tokio::main]
async fn main() {
    let exit_code = run().await;
    process::exit(exit_code);
}

async fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let genenum = match GenEnum::from_cli(&cli) {
        Ok(genenum) => genenum,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    match genenum.generate(cli.dry_run).await {
        Ok(report) => {
            genenum.output_formatter().print_generation_report(&report);
            0
        }
        Err(e) => {
            genenum.handle_error(&e);
            1
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "genenum.toml".to_string());

    match GenEnum::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  genenum --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &GenEnumError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 1, false);
    formatter.print_user_friendly_error(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn cli_with_config(config: Option<std::path::PathBuf>) -> Cli {
        Cli {
            input_dir: None,
            output_dir: None,
            flat: false,
            config,
            output_format: genenum::cli::OutputFormat::Plain,
            verbose: 0,
            quiet: true,
            dry_run: false,
            generate_config: true,
        }
    }

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let exit_code = handle_generate_config(&cli_with_config(Some(config_path.clone())));
        assert_eq!(exit_code, 0);

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[scan]"));
    }

    #[test]
    fn test_generate_config_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("missing").join("test.toml");

        let exit_code = handle_generate_config(&cli_with_config(Some(config_path)));
        assert_eq!(exit_code, 1);
    }
}
