//! In-place edits of a template document
//!
//! Paths are lists of mapping keys. A numeric segment indexes into a
//! sequence. Missing or `null` intermediate nodes become empty mappings;
//! any other non-mapping node on the way is a template-shape error.

use serde_yaml::{Mapping, Value};

use super::values::ResolvedValue;
use super::{Applied, Rule, Overrides};
use crate::config::Setting;
use crate::error::{OverrideError, Result};
use crate::template::{Document, DocumentKind};

pub const MASK: &str = "********";

pub struct Editor<'a> {
    kind: DocumentKind,
    root: &'a mut Value,
    applied: &'a mut Vec<Applied>,
}

impl<'a> Editor<'a> {
    pub fn new(document: &'a mut Document, applied: &'a mut Vec<Applied>) -> Self {
        Self { kind: document.kind, root: &mut document.value, applied }
    }

    /// Write `value` under `key` in the mapping at `parent`.
    pub fn set(&mut self, parent: &[&str], key: &str, value: Value, shown: String) -> Result<()> {
        let location = dotted(parent, key);
        let map = mapping_at(&mut *self.root, self.kind, parent, &location)?;
        map.insert(Value::String(key.to_string()), value);
        self.applied.push(Applied { document: self.kind, path: location, value: shown });
        Ok(())
    }

    /// Write a value that is derived rather than read from a setting.
    pub fn set_derived(&mut self, parent: &[&str], key: &str, value: Value) -> Result<()> {
        let shown = display_yaml(&value);
        self.set(parent, key, value, shown)
    }

    /// Write the setting's value if it resolved. Returns whether anything was written.
    pub fn apply_setting(
        &mut self,
        overrides: &Overrides,
        setting: Setting,
        parent: &[&str],
        key: &str,
    ) -> Result<bool> {
        let Some(value) = overrides.get(setting) else {
            return Ok(false);
        };
        self.set(parent, key, value.to_yaml(), shown(setting, value))?;
        Ok(true)
    }

    pub fn apply_rules(&mut self, overrides: &Overrides, rules: &[Rule]) -> Result<()> {
        for rule in rules {
            self.apply_setting(overrides, rule.setting, rule.parent, rule.key)?;
        }
        Ok(())
    }

    /// Position of the first mapping in the sequence at `path` whose `field` equals `id`.
    pub fn find_in_sequence(&self, path: &[&str], field: &str, id: &str) -> Option<usize> {
        let mut current: &Value = &*self.root;
        for segment in path {
            current = current.get(*segment)?;
        }
        current
            .as_sequence()?
            .iter()
            .position(|item| item.get(field).and_then(Value::as_str) == Some(id))
    }
}

fn mapping_at<'v>(
    root: &'v mut Value,
    kind: DocumentKind,
    parent: &[&str],
    location: &str,
) -> Result<&'v mut Mapping> {
    let mut current = root;
    let mut holder: &str = "<root>";
    for segment in parent {
        current = child_mut(current, segment, kind, holder, location)?;
        holder = *segment;
    }
    as_mapping(current, kind, holder, location)
}

fn child_mut<'v>(
    value: &'v mut Value,
    segment: &str,
    kind: DocumentKind,
    holder: &str,
    location: &str,
) -> Result<&'v mut Value> {
    if value.is_null() {
        *value = Value::Mapping(Mapping::new());
    }
    match value {
        Value::Mapping(map) => {
            Ok(map.entry(Value::String(segment.to_string())).or_insert(Value::Null))
        }
        Value::Sequence(items) => {
            let len = items.len();
            match segment.parse::<usize>().ok().filter(|index| *index < len) {
                Some(index) => Ok(&mut items[index]),
                None => Err(shape_error(kind, location, holder, "sequence")),
            }
        }
        other => Err(shape_error(kind, location, holder, type_name(other))),
    }
}

fn as_mapping<'v>(
    value: &'v mut Value,
    kind: DocumentKind,
    holder: &str,
    location: &str,
) -> Result<&'v mut Mapping> {
    if value.is_null() {
        *value = Value::Mapping(Mapping::new());
    }
    match value {
        Value::Mapping(map) => Ok(map),
        other => Err(shape_error(kind, location, holder, type_name(other))),
    }
}

fn shape_error(kind: DocumentKind, location: &str, holder: &str, found: &'static str) -> OverrideError {
    OverrideError::TemplateShape {
        document: kind.name(),
        path: location.to_string(),
        segment: holder.to_string(),
        found,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn dotted(parent: &[&str], key: &str) -> String {
    let mut parts = parent.to_vec();
    parts.push(key);
    parts.join(".")
}

fn shown(setting: Setting, value: &ResolvedValue) -> String {
    if setting.is_secret() {
        MASK.to_string()
    } else {
        value.to_string()
    }
}

fn display_yaml(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(display_yaml).collect();
            format!("[{}]", items.join(", "))
        }
        other => type_name(other).to_string(),
    }
}
