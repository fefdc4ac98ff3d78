//! Shared helpers for override tests

use std::collections::HashMap;
use std::path::PathBuf;

use super::Overrides;
use crate::config::{FlagSource, Sources};
use crate::template::{Document, DocumentKind};

pub fn document(kind: DocumentKind, yaml: &str) -> Document {
    Document {
        kind,
        path: PathBuf::from(format!("{}.yml", kind.name())),
        value: serde_yaml::from_str(yaml).expect("template yaml"),
    }
}

/// Resolve flags against an empty environment.
pub fn resolve(flags: FlagSource) -> Overrides {
    Overrides::resolve(&Sources::standard(flags, HashMap::<String, String>::new()))
        .expect("resolve overrides")
}
