pub mod config;
pub mod edit;
pub mod error;
pub mod export;
pub mod generator;
pub mod hardening;
pub mod import;
pub mod lua;
pub mod models;
pub mod presets;
pub mod shell;
pub mod state;
pub mod util;

// Convenient re-exports (so call sites can do `itemforge::ItemRecord`, etc.)
pub use error::{AppResult, DomainError};
pub use models::{ItemRecord, Target};
pub use shell::Shell;
pub use state::Session;
