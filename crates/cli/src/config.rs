//! Command-line and environment configuration

use clap::{Parser, ValueEnum};
use sisfila_core::{AppError, Result};
use std::path::PathBuf;

pub const DEFAULT_DEPARTMENT_CODE: &str = "COLEGIADO";
pub const DEFAULT_DEPARTMENT_NAME: &str = "Colegiado";

#[derive(Parser, Debug)]
#[command(name = "sisfila")]
#[command(about = "Department service queue front desk", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Department code (letters only, stored uppercased)
    #[arg(long, env = "SISFILA_DEPARTMENT_CODE", default_value = DEFAULT_DEPARTMENT_CODE)]
    pub code: String,

    /// Department display name
    #[arg(long, env = "SISFILA_DEPARTMENT_NAME", default_value = DEFAULT_DEPARTMENT_NAME)]
    pub name: String,

    /// Read commands from a file instead of stdin
    #[arg(long, env = "SISFILA_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Print one JSON object per command
    #[arg(long, env = "SISFILA_JSON")]
    pub json: bool,

    /// Log output format
    #[arg(long, env = "SISFILA_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable with colors
    Pretty,
    /// Structured JSON lines
    Json,
}

impl Cli {
    /// Reject settings no session can start with
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(AppError::Config(
                "department code must not be empty".to_string(),
            ));
        }

        if let Some(script) = &self.script {
            if script.is_dir() {
                return Err(AppError::Config(format!(
                    "script path {} is a directory",
                    script.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sisfila"]).unwrap();
        assert_eq!(cli.code, DEFAULT_DEPARTMENT_CODE);
        assert_eq!(cli.name, DEFAULT_DEPARTMENT_NAME);
        assert!(cli.script.is_none());
        assert!(!cli.json);
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_explicit_args() {
        let cli = Cli::try_parse_from([
            "sisfila",
            "--code",
            "mat",
            "--name",
            "Matemática",
            "--json",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.code, "mat");
        assert_eq!(cli.name, "Matemática");
        assert!(cli.json);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_code_is_rejected() {
        let cli = Cli::try_parse_from(["sisfila", "--code", "  "]).unwrap();
        let err = cli.validate().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_directory_script_is_rejected() {
        let dir = std::env::temp_dir();
        let cli = Cli::try_parse_from(["sisfila", "--script", dir.to_str().unwrap()]).unwrap();
        assert!(cli.validate().is_err());
    }
}
