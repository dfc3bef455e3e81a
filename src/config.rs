use crate::error::{ConfigErrorKind, InfraError};
use crate::models::types::Target;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: PathBuf,     // where downloads are written, e.g. "./out"
    pub default_target: Target,  // "ox" or "qb"
    pub check_lua: bool,         // compile snippets before writing them
    pub log_filter: String,      // used when RUST_LOG is not set
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            default_target: Target::Ox,
            check_lua: true,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InfraError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Read(e),
        })?;
        toml::from_str(&data).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Parse(e),
        })
    }

    pub fn from_env() -> Result<Self, InfraError> {
        Self::resolve(None)
    }

    /// Config file (if any), then `.env`, then the process environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self, InfraError> {
        let base = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        let _ = dotenvy::from_filename(".env");
        base.with_env(|key| std::env::var(key).ok())
    }

    /// Applies `ITEMFORGE_*` overrides from `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InfraError> {
        if let Some(dir) = lookup("ITEMFORGE_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(target) = lookup("ITEMFORGE_TARGET") {
            self.default_target = target
                .parse()
                .map_err(|_| invalid_env("ITEMFORGE_TARGET", &target))?;
        }
        if let Some(check) = lookup("ITEMFORGE_CHECK_LUA") {
            self.check_lua = crate::edit::parse_flag(&check)
                .map_err(|_| invalid_env("ITEMFORGE_CHECK_LUA", &check))?;
        }
        if let Some(filter) = lookup("ITEMFORGE_LOG") {
            self.log_filter = filter;
        }
        Ok(self)
    }
}

fn invalid_env(key: &str, value: &str) -> InfraError {
    InfraError::Env(ConfigErrorKind::InvalidEnv(key.to_string(), value.to_string()))
}
