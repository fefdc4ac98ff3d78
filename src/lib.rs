//! override-yaml: inject deployment settings into YAML configuration templates
//!
//! Values come from command-line flags or `INIT_*` environment variables and
//! replace the defaults of three templates: the storage configuration, the
//! main configuration and the client configuration.

pub mod cli;
pub mod config;
pub mod error;
pub mod overrides;
pub mod render;
pub mod template;

pub use error::{OverrideError, Result};
