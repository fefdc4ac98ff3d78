//! Resolved override values

use serde_yaml::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::{Setting, SettingKind, Sources};
use crate::error::{OverrideError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    List(Vec<String>),
    Text(String),
    Integer(u32),
}

impl ResolvedValue {
    pub fn to_yaml(&self) -> Value {
        match self {
            ResolvedValue::List(items) => {
                Value::Sequence(items.iter().map(|item| Value::String(item.clone())).collect())
            }
            ResolvedValue::Text(text) => Value::String(text.clone()),
            ResolvedValue::Integer(n) => Value::Number(Number::from(u64::from(*n))),
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedValue::List(items) => write!(f, "[{}]", items.join(", ")),
            ResolvedValue::Text(text) => f.write_str(text),
            ResolvedValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// Every setting that resolved to a usable value.
///
/// Settings that are absent from all sources, or present but empty, are not
/// stored: their template values stay untouched.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    values: BTreeMap<Setting, ResolvedValue>,
}

impl Overrides {
    pub fn resolve(sources: &Sources) -> Result<Self> {
        let mut values = BTreeMap::new();
        for setting in Setting::ALL {
            let Some(found) = sources.lookup(setting) else {
                continue;
            };
            match parse_value(setting, &found.value)? {
                Some(value) => {
                    tracing::debug!("{} resolved from {}", setting, found.source);
                    values.insert(setting, value);
                }
                None => tracing::debug!("{} is empty in {}; treated as unset", setting, found.source),
            }
        }
        Ok(Self { values })
    }

    pub fn get(&self, setting: Setting) -> Option<&ResolvedValue> {
        self.values.get(&setting)
    }

    pub fn is_set(&self, setting: Setting) -> bool {
        self.values.contains_key(&setting)
    }

    pub fn text(&self, setting: Setting) -> Option<&str> {
        match self.values.get(&setting)? {
            ResolvedValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn list(&self, setting: Setting) -> Option<&[String]> {
        match self.values.get(&setting)? {
            ResolvedValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn integer(&self, setting: Setting) -> Option<u32> {
        match self.values.get(&setting)? {
            ResolvedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Interpret a raw string for a setting. `Ok(None)` means "unset".
pub fn parse_value(setting: Setting, raw: &str) -> Result<Option<ResolvedValue>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let value = match setting.kind() {
        SettingKind::List => {
            let items = parse_list(raw);
            if items.is_empty() {
                return Ok(None);
            }
            ResolvedValue::List(items)
        }
        SettingKind::Integer => {
            let n = raw.trim().parse::<u32>().map_err(|_| invalid(setting, raw))?;
            ResolvedValue::Integer(n)
        }
        SettingKind::Text if setting == Setting::HealthCheckInterval => {
            // Validated as a number but written back as the string given.
            let interval = raw.trim();
            interval.parse::<u64>().map_err(|_| invalid(setting, raw))?;
            ResolvedValue::Text(interval.to_string())
        }
        SettingKind::Text => ResolvedValue::Text(raw.to_string()),
    };
    Ok(Some(value))
}

/// Split a comma-separated list, trimming whitespace and discarding empty
/// segments. Quotes and square brackets are dropped first so JSON-style
/// values such as `["a","b"]` are accepted too.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.replace(['"', '[', ']'], "")
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

fn invalid(setting: Setting, raw: &str) -> OverrideError {
    OverrideError::InvalidValue {
        flag: setting.flag(),
        value: raw.to_string(),
        reason: "expected a non-negative integer".to_string(),
    }
}
