//! Override engine
//!
//! Applies resolved settings to the three templates in the fixed order
//! storage, configuration, client. A setting that did not resolve leaves
//! its destination untouched; one that did replaces it entirely.

pub mod client;
pub mod configuration;
pub mod editor;
pub mod storage;
pub mod values;

#[cfg(test)]
mod test_support;

use crate::config::Setting;
use crate::error::Result;
use crate::template::{DocumentKind, Templates};

pub use values::{parse_list, Overrides, ResolvedValue};

/// A destination for one setting: the key under the mapping at `parent`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub setting: Setting,
    pub parent: &'static [&'static str],
    pub key: &'static str,
}

impl Rule {
    pub const fn new(setting: Setting, parent: &'static [&'static str], key: &'static str) -> Self {
        Self { setting, parent, key }
    }
}

/// One value written into a document. Secret values are masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub document: DocumentKind,
    pub path: String,
    pub value: String,
}

pub fn apply(templates: &mut Templates, overrides: &Overrides) -> Result<Vec<Applied>> {
    let mut applied = Vec::new();
    storage::apply(&mut templates.storage, overrides, &mut applied)?;
    configuration::apply(&mut templates.configuration, overrides, &mut applied)?;
    client::apply(&mut templates.client, overrides, &mut applied)?;

    for entry in &applied {
        tracing::debug!("{}: {} = {}", entry.document.name(), entry.path, entry.value);
    }
    Ok(applied)
}
