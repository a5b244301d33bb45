use std::path::PathBuf;

use clap::Parser;

/// Start the file search GUI and the local search service as detached processes.
#[derive(Parser, Debug)]
#[command(name = "search-launcher", version, about)]
pub struct Cli {
    /// Interpreter used to run both scripts (default: $SEARCH_LAUNCHER_PYTHON or "python")
    #[arg(long, value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Working directory for both scripts (default: $SEARCH_LAUNCHER_DIR or current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,
}
