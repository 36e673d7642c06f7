use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "scaffold.toml";

/// Configuration loaded from `scaffold.toml`. Command-line flags override
/// every value.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Defaults for the `dbcontext` command
    pub scaffold: ScaffoldConfig,

    /// Named connections, referenced as `Name=<key>`
    pub connections: BTreeMap<String, String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    pub output_dir: Option<PathBuf>,
    pub context_dir: Option<PathBuf>,
    pub context: Option<String>,
    pub namespace: Option<String>,
    pub context_namespace: Option<String>,
    pub tables: Vec<String>,
    pub schemas: Vec<String>,
    pub use_database_names: bool,
    pub no_pluralize: bool,
    pub nullable: bool,
    pub configuration_files: bool,
    pub configuration_suffix: Option<String>,
    pub project_dir: Option<PathBuf>,
    pub force: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scaffold(mut self, scaffold: ScaffoldConfig) -> Self {
        self.scaffold = scaffold;
        self
    }

    pub fn connection(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.connections.insert(name.into(), value.into());
        self
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("parsing {}", path.display()))
    }

    /// Loads `path`, or `scaffold.toml` from the working directory when it
    /// exists, or the defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::load(CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl ScaffoldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn nullable(mut self, enabled: bool) -> Self {
        self.nullable = enabled;
        self
    }

    pub fn force(mut self, enabled: bool) -> Self {
        self.force = enabled;
        self
    }
}
