use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

const DEFAULT_INTERPRETER: &str = "python";
const INTERPRETER_VAR: &str = "SEARCH_LAUNCHER_PYTHON";
const DIR_VAR: &str = "SEARCH_LAUNCHER_DIR";

/// How the two targets are launched.
///
/// Resolution order: CLI flag → environment variable → default
/// (`python`, launcher's current directory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub interpreter: String,
    pub working_dir: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            working_dir: None,
        }
    }
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            interpreter: non_empty(INTERPRETER_VAR)
                .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string()),
            working_dir: non_empty(DIR_VAR).map(PathBuf::from),
        }
    }

    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(interpreter) = cli
            .interpreter
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
        {
            self.interpreter = interpreter.to_string();
        }
        if let Some(dir) = cli.dir.as_ref().filter(|d| !d.as_os_str().is_empty()) {
            self.working_dir = Some(dir.clone());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_python_in_current_dir() {
        let config = LauncherConfig::from_vars(vars(&[]));
        assert_eq!(config, LauncherConfig::default());
        assert_eq!(config.interpreter, "python");
        assert_eq!(config.working_dir, None);
    }

    #[test]
    fn env_overrides_defaults() {
        let config = LauncherConfig::from_vars(vars(&[
            ("SEARCH_LAUNCHER_PYTHON", " python3.12 "),
            ("SEARCH_LAUNCHER_DIR", "/opt/search"),
        ]));
        assert_eq!(config.interpreter, "python3.12");
        assert_eq!(config.working_dir, Some(PathBuf::from("/opt/search")));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config = LauncherConfig::from_vars(vars(&[
            ("SEARCH_LAUNCHER_PYTHON", "   "),
            ("SEARCH_LAUNCHER_DIR", ""),
        ]));
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn cli_overrides_env() {
        let cli = Cli::try_parse_from([
            "search-launcher",
            "--interpreter",
            "pypy3",
            "--dir",
            "/tmp/s",
        ])
        .unwrap();
        let config = LauncherConfig::from_vars(vars(&[
            ("SEARCH_LAUNCHER_PYTHON", "python3"),
            ("SEARCH_LAUNCHER_DIR", "/opt/search"),
        ]))
        .with_cli(&cli);
        assert_eq!(config.interpreter, "pypy3");
        assert_eq!(config.working_dir, Some(PathBuf::from("/tmp/s")));
    }

    #[test]
    fn absent_cli_flags_keep_env() {
        let cli = Cli::try_parse_from(["search-launcher"]).unwrap();
        let config = LauncherConfig::from_vars(vars(&[("SEARCH_LAUNCHER_PYTHON", "python3")]))
            .with_cli(&cli);
        assert_eq!(config.interpreter, "python3");
        assert_eq!(config.working_dir, None);
    }

    #[test]
    fn blank_cli_flags_keep_env() {
        let cli =
            Cli::try_parse_from(["search-launcher", "--interpreter", " ", "--dir", ""]).unwrap();
        let config = LauncherConfig::from_vars(vars(&[
            ("SEARCH_LAUNCHER_PYTHON", "python3"),
            ("SEARCH_LAUNCHER_DIR", "/opt/search"),
        ]))
        .with_cli(&cli);
        assert_eq!(config.interpreter, "python3");
        assert_eq!(config.working_dir, Some(PathBuf::from("/opt/search")));
    }
}
