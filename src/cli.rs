//! CLI definitions: argument parsing and help text.

use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
EXAMPLES:
  autoconveyor              Display the about banner
  autoconveyor -v           Display the banner with info logging
  autoconveyor --version    Print the version and exit
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Automation for Streamlining Video processing via Davinci Resolve to Youtube",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
