use std::io;
use std::process::Command;
use std::sync::Arc;

use tracing::debug;

use super::target::LaunchCommand;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("program not found: {program}")]
    NotFound { program: String },

    #[error("permission denied: {program}")]
    PermissionDenied { program: String },

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("spawn task aborted: {0}")]
    Aborted(String),
}

impl LaunchError {
    fn from_io(program: &str, e: io::Error) -> Self {
        let program = program.to_string();
        match e.kind() {
            io::ErrorKind::NotFound => LaunchError::NotFound { program },
            io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied { program },
            _ => LaunchError::Spawn { program, source: e },
        }
    }
}

/// What the process-creation facility hands back. Only logged, never waited on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedChild {
    pub pid: u32,
}

/// Process-creation abstraction. `ProcessSpawner` in production; tests substitute
/// recording or failing implementations.
pub trait Spawner: Send + Sync + 'static {
    /// Blocks only until the OS has created the child, never until it exits.
    fn spawn(&self, command: &LaunchCommand) -> Result<SpawnedChild, LaunchError>;
}

impl<S: Spawner> Spawner for Arc<S> {
    fn spawn(&self, command: &LaunchCommand) -> Result<SpawnedChild, LaunchError> {
        self.as_ref().spawn(command)
    }
}

/// Spawns real OS processes with inherited environment and stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&self, command: &LaunchCommand) -> Result<SpawnedChild, LaunchError> {
        debug!(%command, dir = ?command.working_dir, "spawning");

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = &command.working_dir {
            cmd.current_dir(dir);
        }

        // The Child is dropped here: the process keeps running on its own.
        let child = cmd
            .spawn()
            .map_err(|e| LaunchError::from_io(&command.program, e))?;
        Ok(SpawnedChild { pid: child.id() })
    }
}
