use thiserror::Error;

pub type AppResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed: {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// Field path not known to the edit surface
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unsupported item file: {0}")]
    UnsupportedFormat(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("script lua error: {0}")]
    ScriptLua(#[from] mlua::Error),

    #[error(transparent)]
    Infra(#[from] InfraError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse file: {0}")]
    Parse(toml::de::Error),

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: ConfigErrorKind,
    },

    #[error("environment: {0}")]
    Env(ConfigErrorKind),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
