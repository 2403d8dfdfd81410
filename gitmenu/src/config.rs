use gitmenu_types::{GitMenuError, GitMenuResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Per-action command-line overrides, the config-file realization of the
/// platform override hook. Keys are action names; values are full argument
/// vectors with optional `{wd}`, `{name}` and `{branch}` placeholders.
///
/// ```toml
/// [overrides]
/// shell = ["x-terminal-emulator", "-e", "bash"]
/// history = ["tig", "--", "{name}"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub overrides: HashMap<String, Vec<String>>,
}

impl Config {
    /// Loads the config from its default location. A missing file yields
    /// the defaults; a malformed one is an error.
    pub fn load() -> GitMenuResult<Config> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> GitMenuResult<Config> {
        debug!("loading config from {:?}", path);
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|err| GitMenuError::Config(err.to_string()))
    }

    /// `GITMENU_CONFIG` wins over the platform config directory.
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("GITMENU_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("gitmenu").join("config.toml"))
    }

    /// Override command line for an action with placeholders expanded, or
    /// None to use the generic fallback.
    pub fn argv_for(&self, action: &str, vars: &[(&str, &str)]) -> Option<Vec<String>> {
        let argv = self.overrides.get(action)?;
        Some(argv.iter().map(|arg| expand(arg, vars)).collect())
    }
}

/// Replaces `{key}` placeholders. Unknown placeholders pass through
/// verbatim so overrides can target tools with their own brace syntax.
fn expand(arg: &str, vars: &[(&str, &str)]) -> String {
    let mut out = arg.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}
