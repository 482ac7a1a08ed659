//! # AutoConveyor
//!
//! Entry point for the AutoConveyor about banner: parses the CLI surface,
//! initializes logging, then renders the project banner to the terminal.

mod cli;
mod core;
mod run;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();
    run::init_logger(&args);

    // Report failure via Display, not Debug
    if let Err(e) = run::present() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
