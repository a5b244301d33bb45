mod cli;
mod config;
mod launcher;

use clap::Parser;
use cli::Cli;
use config::LauncherConfig;
use launcher::{Launcher, ProcessSpawner};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("search_launcher=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = LauncherConfig::from_env().with_cli(&cli);

    info!(
        interpreter = %config.interpreter,
        dir = ?config.working_dir,
        "starting search launcher"
    );

    // Spawn failures are already logged per target and do not affect the exit code.
    let outcomes = Launcher::new(ProcessSpawner, &config).launch().settle().await;
    let failed: Vec<String> = outcomes
        .iter()
        .filter(|o| o.result.is_err())
        .map(|o| o.target.to_string())
        .collect();

    if failed.is_empty() {
        info!(started = outcomes.len(), "launcher done");
    } else {
        warn!(
            started = outcomes.len() - failed.len(),
            failed = %failed.join(", "),
            "launcher done with failures"
        );
    }
    Ok(())
}
