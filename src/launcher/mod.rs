//! Fire-and-forget launch of the search GUI and the local search service.

pub mod spawner;
pub mod target;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::LauncherConfig;
pub use spawner::{LaunchError, ProcessSpawner, SpawnedChild, Spawner};
pub use target::Target;

/// Result of one control unit: whether its single spawn call succeeded.
#[derive(Debug)]
pub struct SpawnOutcome {
    pub target: Target,
    pub result: Result<SpawnedChild, LaunchError>,
}

/// Starts each target on its own blocking task. Neither spawn waits on the other,
/// and nothing ever waits on a child.
pub struct Launcher<S = ProcessSpawner> {
    spawner: Arc<S>,
    interpreter: String,
    working_dir: Option<PathBuf>,
}

impl<S: Spawner> Launcher<S> {
    pub fn new(spawner: S, config: &LauncherConfig) -> Self {
        Self {
            spawner: Arc::new(spawner),
            interpreter: config.interpreter.clone(),
            working_dir: config.working_dir.clone(),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn start_search_gui(&self) -> JoinHandle<SpawnOutcome> {
        self.start(Target::SearchGui)
    }

    /// Must be called from within a tokio runtime.
    pub fn start_local_search(&self) -> JoinHandle<SpawnOutcome> {
        self.start(Target::LocalSearch)
    }

    /// Kicks off both spawns and returns at once. The returned `Launch` may be
    /// dropped; the spawn calls still run to completion.
    pub fn launch(&self) -> Launch {
        let units = Target::ALL
            .into_iter()
            .map(|target| {
                let handle = match target {
                    Target::SearchGui => self.start_search_gui(),
                    Target::LocalSearch => self.start_local_search(),
                };
                (target, handle)
            })
            .collect();
        Launch { units }
    }

    fn start(&self, target: Target) -> JoinHandle<SpawnOutcome> {
        let spawner = Arc::clone(&self.spawner);
        let command = target.command(&self.interpreter, self.working_dir.as_deref());

        tokio::task::spawn_blocking(move || {
            let result = spawner.spawn(&command);
            match &result {
                Ok(child) => info!(%target, pid = child.pid, "started"),
                Err(e) => warn!(%target, program = %command.program, error = %e, "failed to start"),
            }
            SpawnOutcome { target, result }
        })
    }
}

/// Handles to the in-flight control units of one `Launcher::launch` call.
#[must_use = "dropping a Launch is allowed, but settle() reports spawn failures"]
pub struct Launch {
    units: Vec<(Target, JoinHandle<SpawnOutcome>)>,
}

impl Launch {
    /// Waits for the spawn calls, not the children, and reports one outcome per target.
    pub async fn settle(self) -> Vec<SpawnOutcome> {
        let mut outcomes = Vec::with_capacity(self.units.len());
        for (target, handle) in self.units {
            let outcome = handle.await.unwrap_or_else(|e| {
                warn!(%target, error = %e, "spawn task aborted");
                SpawnOutcome {
                    target,
                    result: Err(LaunchError::Aborted(e.to_string())),
                }
            });
            outcomes.push(outcome);
        }
        outcomes
    }
}
