//! Setting definitions and value sources
//!
//! Resolves each setting with precedence CLI > Env > template default.

pub mod settings;
pub mod sources;

pub use settings::{Setting, SettingKind, ENV_PREFIX};
pub use sources::{EnvSource, Environment, FlagSource, Found, ProcessEnv, SettingSource, Sources};
