//! Command-line interface entry point for `cgpa-tracker`

mod args;
mod commands;

use args::{Cli, Command};
use cgpa_tracker::config::Config;
use cgpa_tracker::core::store::RecordStore;
use cgpa_tracker::info;
use cgpa_tracker::logger::{
    enable_debug, enable_verbose, init_file_logging, set_level, Level,
};
use clap::Parser;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let store = RecordStore::from_config(&config);

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Register { email, name } => {
            commands::register::run(&store, &email, name);
        }
        Command::Add {
            email,
            semester,
            course,
            credit,
            grade,
            sessional,
            course_type,
        } => {
            commands::record::add(
                &store,
                &email,
                &semester,
                &course,
                &credit,
                &grade,
                sessional,
                &course_type,
            );
        }
        Command::Import {
            email,
            semester,
            input_file,
        } => {
            commands::record::import(&store, &email, &semester, &input_file);
        }
        Command::Remove { email, semester } => {
            commands::record::remove(&store, &email, &semester);
        }
        Command::Status { email } => {
            commands::status::run(&store, &config, &email);
        }
        Command::Target {
            email,
            cgpa,
            semesters,
            clear,
        } => {
            commands::target::run(&store, &config, &email, cgpa, semesters, clear);
        }
        Command::Report {
            email,
            output,
            format,
        } => {
            commands::report::run(&store, &config, &email, output.as_deref(), &format);
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
