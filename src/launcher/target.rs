use std::fmt;
use std::path::{Path, PathBuf};

/// One of the two programs the launcher starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    SearchGui,
    LocalSearch,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::SearchGui, Target::LocalSearch];

    pub fn script(self) -> &'static str {
        match self {
            Target::SearchGui => "file_search_gui.py",
            Target::LocalSearch => "local_search.py",
        }
    }

    /// Command line for this target: the interpreter followed by the script, nothing else.
    pub fn command(self, interpreter: &str, working_dir: Option<&Path>) -> LaunchCommand {
        LaunchCommand {
            program: interpreter.to_string(),
            args: vec![self.script().to_string()],
            working_dir: working_dir.map(Path::to_path_buf),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::SearchGui => "search-gui",
            Target::LocalSearch => "local-search",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
    /// `None` inherits the launcher's current directory.
    pub working_dir: Option<PathBuf>,
}

impl LaunchCommand {
    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}
