//! Template documents: the three YAML files being overridden

pub mod loader;

use serde_yaml::Value;
use std::path::PathBuf;

pub use loader::load_document;

/// Which of the three templates a document is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Storage,
    Configuration,
    Client,
}

impl DocumentKind {
    /// Output order of the combined stream.
    pub const ORDER: [DocumentKind; 3] =
        [DocumentKind::Storage, DocumentKind::Configuration, DocumentKind::Client];

    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::Storage => "storage-configuration",
            DocumentKind::Configuration => "configuration",
            DocumentKind::Client => "client-configuration",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub kind: DocumentKind,
    /// File the document was read from, and written back to with `--save`.
    pub path: PathBuf,
    pub value: Value,
}

#[derive(Debug, Clone)]
pub struct TemplatePaths {
    pub storage: PathBuf,
    pub configuration: PathBuf,
    pub client: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Templates {
    pub storage: Document,
    pub configuration: Document,
    pub client: Document,
}

impl Templates {
    pub fn load(paths: &TemplatePaths) -> crate::error::Result<Self> {
        Ok(Self {
            storage: load_document(DocumentKind::Storage, &paths.storage)?,
            configuration: load_document(DocumentKind::Configuration, &paths.configuration)?,
            client: load_document(DocumentKind::Client, &paths.client)?,
        })
    }

    /// Documents in output order: storage, configuration, client.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        [&self.storage, &self.configuration, &self.client].into_iter()
    }
}
