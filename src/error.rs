//! Error types for template loading, override resolution and output

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverrideError {
    /// A template file is missing or unreadable.
    #[error("Failed reading template {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template file is not valid YAML.
    #[error("Invalid YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A flag or environment value could not be interpreted.
    #[error("Invalid value '{value}' for --{flag}: {reason}")]
    InvalidValue { flag: &'static str, value: String, reason: String },

    /// A destination path runs through something that is not a mapping.
    #[error("Cannot override '{path}' in {document}: '{segment}' is a {found}, expected a mapping")]
    TemplateShape { document: &'static str, path: String, segment: String, found: &'static str },

    #[error("Failed serializing {document}: {source}")]
    Serialize {
        document: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    /// A rendered document contains the separator line text, so the combined
    /// stream could not be split back into its documents.
    #[error("Cannot print {document} in the combined stream: it contains '---'. Use --save to write the templates in place")]
    AmbiguousStream { document: &'static str },

    #[error("Failed writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OverrideError>;
