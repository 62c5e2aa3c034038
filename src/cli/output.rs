//! Output formatting for CLI commands

use serde::Serialize;

use crate::storage::FormatSetting;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<FormatSetting> for OutputFormat {
    fn from(setting: FormatSetting) -> Self {
        match setting {
            FormatSetting::Text => OutputFormat::Text,
            FormatSetting::Json => OutputFormat::Json,
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a result line in text mode, or `data` as JSON
    pub fn result<T: Serialize>(&self, text: &str, data: &T) {
        match self.format {
            OutputFormat::Text => println!("{}", text),
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Returns true if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
