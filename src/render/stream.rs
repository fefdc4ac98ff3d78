//! YAML serialization of the overridden templates

use std::fs;

use crate::error::{OverrideError, Result};
use crate::template::{Document, DocumentKind, Templates};

/// Line placed between documents in the combined stream.
pub const DOCUMENT_SEPARATOR: &str = "---";

pub fn render_document(document: &Document) -> Result<String> {
    let mut text = serde_yaml::to_string(&document.value)
        .map_err(|source| OverrideError::Serialize { document: document.kind.name(), source })?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Storage, configuration and client documents joined by `---` lines.
///
/// Fails if any document already contains `---`, since splitting the stream
/// would no longer give back three documents.
pub fn render_stream(templates: &Templates) -> Result<String> {
    let mut rendered = Vec::with_capacity(DocumentKind::ORDER.len());
    for document in templates.iter() {
        let text = render_document(document)?;
        if text.contains(DOCUMENT_SEPARATOR) {
            return Err(OverrideError::AmbiguousStream { document: document.kind.name() });
        }
        rendered.push(text);
    }
    let separator = format!("{DOCUMENT_SEPARATOR}\n");
    Ok(rendered.join(separator.as_str()))
}

/// Write each document back to the file it was loaded from.
pub fn save_in_place(templates: &Templates) -> Result<()> {
    for document in templates.iter() {
        let text = render_document(document)?;
        fs::write(&document.path, text)
            .map_err(|source| OverrideError::Write { path: document.path.clone(), source })?;
        tracing::info!("Saved {} to {}", document.kind.name(), document.path.display());
    }
    Ok(())
}
