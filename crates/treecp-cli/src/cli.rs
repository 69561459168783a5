use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "treecp")]
#[command(version, about = "Copy a directory tree, showing byte-level progress")]
pub struct Cli {
    /// Directory to copy
    pub source: PathBuf,
    /// Where to create the copy (must not exist yet)
    pub destination: PathBuf,
    /// Disable the progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,
    /// Print every copied file
    #[arg(long, short = 'v')]
    pub verbose: bool,
    /// Keep source modification times on copied files and directories
    #[arg(long)]
    pub preserve_times: bool,
    /// Diagnostic log level written to stderr
    #[arg(long, value_enum, value_name = "LEVEL", default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positionals_and_flags() {
        let cli = Cli::try_parse_from([
            "treecp",
            "src",
            "dst",
            "--no-progress",
            "-v",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.source, PathBuf::from("src"));
        assert_eq!(cli.destination, PathBuf::from("dst"));
        assert!(cli.no_progress);
        assert!(cli.verbose);
        assert!(!cli.preserve_times);
        assert_eq!(log::LevelFilter::from(cli.log_level), log::LevelFilter::Debug);
    }

    #[test]
    fn destination_is_required() {
        assert!(Cli::try_parse_from(["treecp", "only-source"]).is_err());
    }
}
