//! Command-line interface implementation for the service wizard.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for the wizard.
#[derive(Parser, Debug)]
#[command(author, version, about = "service-wizard: interactive scaffolding wizard for Buildly (micro)services", long_about = None)]
pub struct Args {
    /// Directory under which the generated project will be created
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Location of the template set
    #[arg(short, long, value_name = "DIR", default_value = "templates")]
    pub template_dir: PathBuf,

    /// Read answers as JSON from stdin instead of prompting
    #[arg(short, long)]
    pub stdin: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
