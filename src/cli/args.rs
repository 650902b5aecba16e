//! CLI argument definitions for `cgpa-tracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cgpa_tracker::config::ConfigOverrides;
use cgpa_tracker::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `records_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Register a student record from a university email.
    Register {
        /// University-issued student email (uYYDDRRR@student.cuet.ac.bd)
        #[arg(value_name = "EMAIL")]
        email: String,

        /// Display name for the record
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },
    /// Add one course to a semester's results.
    Add {
        /// Student email
        #[arg(value_name = "EMAIL")]
        email: String,

        /// Semester label (e.g., "Level 1 - Term 1")
        #[arg(short, long, value_name = "LABEL")]
        semester: String,

        /// Course code (e.g., CSE-141)
        #[arg(long, value_name = "CODE")]
        course: String,

        /// Credit hours (numeric text; coerced by the engine)
        #[arg(long, value_name = "HOURS")]
        credit: String,

        /// Letter grade (e.g., A+, B-, F)
        #[arg(long, value_name = "GRADE")]
        grade: String,

        /// Mark the course as sessional (lab)
        #[arg(long)]
        sessional: bool,

        /// Attempt type: regular, retake, or improvement
        #[arg(long, value_name = "TYPE", default_value = "regular")]
        course_type: String,
    },
    /// Import a semester's results from a pasted portal table.
    ///
    /// The file holds tab-separated rows copied from the results portal;
    /// the semester's current course list is replaced.
    Import {
        /// Student email
        #[arg(value_name = "EMAIL")]
        email: String,

        /// Semester label (e.g., "Level 1 - Term 1")
        #[arg(short, long, value_name = "LABEL")]
        semester: String,

        /// Path to the pasted result table
        #[arg(value_name = "FILE")]
        input_file: PathBuf,
    },
    /// Delete a semester's results.
    Remove {
        /// Student email
        #[arg(value_name = "EMAIL")]
        email: String,

        /// Semester label to delete
        #[arg(short, long, value_name = "LABEL")]
        semester: String,
    },
    /// Show per-semester and overall standing with the target projection.
    Status {
        /// Student email
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Set or clear the target CGPA and plan length.
    Target {
        /// Student email
        #[arg(value_name = "EMAIL")]
        email: String,

        /// Target overall CGPA (0.00 to 4.00)
        #[arg(long, value_name = "CGPA")]
        cgpa: Option<f64>,

        /// Number of semesters in the degree plan
        #[arg(long, value_name = "COUNT")]
        semesters: Option<u32>,

        /// Clear the target CGPA
        #[arg(long)]
        clear: bool,
    },
    /// Generate a transcript report.
    Report {
        /// Student email
        #[arg(value_name = "EMAIL")]
        email: String,

        /// Output file path (optional; defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "md")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "cgpatrack",
    about = "cgpa-tracker command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config records directory
    #[arg(long = "config-records-dir", value_name = "DIR")]
    pub config_records_dir: Option<PathBuf>,

    /// Override config records directory (short form)
    #[arg(long = "records-dir", value_name = "DIR")]
    pub records_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override the planner's per-semester credit estimate
    #[arg(long = "semester-credits", value_name = "HOURS")]
    pub semester_credits: Option<f64>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--records-dir`) take precedence over
    /// long-form flags (e.g., `--config-records-dir`) when both are
    /// provided. `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            records_dir: self
                .records_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_records_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            semester_credits: self.semester_credits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_records_dir: None,
            records_dir: None,
            config_reports_dir: None,
            reports_dir: None,
            semester_credits: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = base_cli(Command::Config { subcommand: None });

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.records_dir.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.semester_credits.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = base_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.records_dir = Some(PathBuf::from("/records"));
        cli.reports_dir = Some(PathBuf::from("/reports"));
        cli.semester_credits = Some(18.0);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.records_dir, Some("/records".to_string()));
        assert_eq!(overrides.reports_dir, Some("/reports".to_string()));
        assert_eq!(overrides.semester_credits, Some(18.0));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        // Short-form flags should take precedence over long-form
        let mut cli = base_cli(Command::Config { subcommand: None });
        cli.config_records_dir = Some(PathBuf::from("/long/records"));
        cli.records_dir = Some(PathBuf::from("/short/records"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));
        cli.reports_dir = Some(PathBuf::from("/short/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.records_dir, Some("/short/records".to_string()));
        assert_eq!(overrides.reports_dir, Some("/short/reports".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        // Long-form flags should be used when short-form is absent
        let mut cli = base_cli(Command::Config { subcommand: None });
        cli.config_records_dir = Some(PathBuf::from("/long/records"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.records_dir, Some("/long/records".to_string()));
        assert_eq!(overrides.reports_dir, Some("/long/reports".to_string()));
    }
}
