use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Automake Module Generator
///
/// Regenerate the Makemodule.am fragments of a git-tracked C++ source tree
#[derive(Parser, Debug)]
#[command(name = "makemodule")]
#[command(about = "Automake Module Generator", long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preview changes without writing any file (dry-run)
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Run as if started in PATH (must be the top level of the checkout)
    #[arg(
        short = 'C',
        long,
        global = true,
        value_name = "PATH",
        default_value = "."
    )]
    pub directory: PathBuf,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate every Makemodule.am from the current checkout
    Generate,

    /// Fail if any Makemodule.am is missing or out of date
    Check,

    /// Show the active configuration
    Config,
}
