//! CLI command implementations
//!
//! Each subcommand has a run function that owns its logging setup, input
//! resolution, and report rendering. The commands are thin glue over the
//! parser and analyzer services.

pub mod analyze;
pub mod inspect;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch the parsed CLI arguments to the matching command
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Analyze(analyze_args) => analyze::run_analyze(analyze_args),
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
    }
}
