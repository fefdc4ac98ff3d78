//! Template file loading

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use super::{Document, DocumentKind};
use crate::error::{OverrideError, Result};

pub fn load_document(kind: DocumentKind, path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .map_err(|source| OverrideError::Read { path: path.to_path_buf(), source })?;

    let value = parse_document(&content)
        .map_err(|source| OverrideError::Parse { path: path.to_path_buf(), source })?;

    tracing::debug!("Loaded {} from {}", kind.name(), path.display());
    Ok(Document { kind, path: path.to_path_buf(), value })
}

/// Parse YAML text; an empty document becomes an empty mapping so overrides
/// can still be written into it.
fn parse_document(content: &str) -> std::result::Result<Value, serde_yaml::Error> {
    let value: Value = serde_yaml::from_str(content)?;
    Ok(match value {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_document() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("client-configuration.yml");
        fs::write(&path, "rest:\n  host: http://localhost:9090/opencga\n").expect("write");

        let doc = load_document(DocumentKind::Client, &path).expect("load");
        assert_eq!(doc.kind, DocumentKind::Client);
        assert_eq!(doc.value["rest"]["host"].as_str(), Some("http://localhost:9090/opencga"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let tmp = TempDir::new().expect("tmp");
        let result = load_document(DocumentKind::Storage, &tmp.path().join("nope.yml"));
        assert!(matches!(result, Err(OverrideError::Read { .. })));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("configuration.yml");
        fs::write(&path, "catalog: [unclosed\n").expect("write");

        let result = load_document(DocumentKind::Configuration, &path);
        assert!(matches!(result, Err(OverrideError::Parse { .. })));
    }

    #[test]
    fn test_empty_file_is_empty_mapping() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("client-configuration.yml");
        fs::write(&path, "").expect("write");

        let doc = load_document(DocumentKind::Client, &path).expect("load");
        assert!(doc.value.as_mapping().is_some_and(|m| m.is_empty()));
    }
}
