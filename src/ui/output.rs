use crate::error::{GenEnumError, UserFriendlyError};
use crate::extractor::GenerationReport;
use console::{style, Emoji, Term};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

static ROCKET: Emoji = Emoji("🚀 ", "> ");
static SPARKLES: Emoji = Emoji("✨ ", "* ");

/// Status line printer shared by every phase of a run.
///
/// All four message kinds go to stdout. `error` lines are printed even in
/// quiet mode; the caller decides whether the process exits.
pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let term = Term::stdout();
        let use_colors = match mode {
            OutputMode::Human => term.features().colors_supported(),
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    pub fn success(&self, message: &str) {
        if self.should_show_message(1) {
            self.print_message(MessageType::Success, message);
        }
    }

    pub fn error(&self, message: &str) {
        self.print_message(MessageType::Error, message);
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(1) {
            self.print_message(MessageType::Warning, message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            self.print_message(MessageType::Info, message);
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  debug {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", ROCKET, style(operation).bold());
                    } else {
                        println!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation_start", operation),
                OutputMode::Plain => println!("STARTING: {}", operation),
            }
        }
    }

    pub fn print_user_friendly_error(&self, error: &GenEnumError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            if self.quiet {
                return;
            }
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}", style(format!("Suggestion: {}", suggestion)).cyan());
                    } else {
                        println!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    println!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    pub fn print_generation_report(&self, report: &GenerationReport) {
        match self.mode {
            OutputMode::Human => {
                if !self.quiet {
                    self.print_human_report(report);
                }
            }
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Plain => {
                if !self.quiet {
                    self.print_plain_report(report);
                }
            }
        }
    }

    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_message(&self, msg_type: MessageType, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(msg_type, message),
            OutputMode::Json => self.print_json_message(msg_type.label(), message),
            OutputMode::Plain => println!("{}: {}", msg_type.label().to_uppercase(), message),
        }
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        if !self.use_colors {
            println!("{} {}", msg_type.label(), message);
            return;
        }

        let label = style(msg_type.label()).bold();
        let (label, message) = match msg_type {
            MessageType::Success => (label.green(), style(message).green()),
            MessageType::Error => (label.red(), style(message).red()),
            MessageType::Warning => (label.yellow(), style(message).yellow()),
            MessageType::Info => (label.cyan(), style(message).cyan()),
        };
        println!("{} {}", label, message);
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_report(&self, report: &GenerationReport) {
        println!();
        let title = if report.dry_run {
            "Dry run completed"
        } else {
            "Enum generation completed"
        };
        if self.use_colors {
            println!("{}{}", SPARKLES, style(title).bold().cyan());
        } else {
            println!("=== {} ===", title);
        }

        println!("  Source files:     {}", report.source_files);
        println!("  Enums found:      {}", report.enums_found);
        println!("  Without enums:    {}", report.files_without_enums.len());
        println!("  Skipped entries:  {}", report.skipped.len());
        if report.dry_run {
            println!("  Would write:      {}", report.written.len());
        } else {
            println!("  Files written:    {}", report.written.len());
        }
        println!("  Output directory: {}", report.output_directory.display());
    }

    fn print_plain_report(&self, report: &GenerationReport) {
        if report.dry_run {
            println!("REPORT: Dry run completed");
        } else {
            println!("REPORT: Enum generation completed");
        }
        println!("Source files: {}", report.source_files);
        println!("Enums: {}", report.enums_found);
        println!("Without enums: {}", report.files_without_enums.len());
        println!("Skipped: {}", report.skipped.len());
        println!("Written: {}", report.written.len());
        println!("Output: {}", report.output_directory.display());
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}

impl MessageType {
    fn label(self) -> &'static str {
        match self {
            MessageType::Success => "success",
            MessageType::Error => "error",
            MessageType::Warning => "warn",
            MessageType::Info => "info",
        }
    }
}
