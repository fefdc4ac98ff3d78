//! Value sources and precedence resolution
//!
//! Sources are consulted in order and the first one holding a value wins.
//! The command line is registered before the environment, so an explicit
//! flag always shadows an `INIT_*` variable, even when the flag is empty.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::settings::{Setting, ENV_VARS_BY_SETTING};

/// Read access to environment variables.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

pub trait SettingSource: fmt::Debug {
    /// Short label used in log lines.
    fn name(&self) -> &'static str;

    fn get(&self, setting: Setting) -> Option<String>;
}

/// Values given on the command line.
#[derive(Debug, Default, Clone)]
pub struct FlagSource {
    values: BTreeMap<Setting, String>,
}

impl FlagSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a flag value. A later call for the same setting replaces the earlier one.
    pub fn set(&mut self, setting: Setting, value: impl Into<String>) {
        self.values.insert(setting, value.into());
    }

    pub fn with(mut self, setting: Setting, value: impl Into<String>) -> Self {
        self.set(setting, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingSource for FlagSource {
    fn name(&self) -> &'static str {
        "flag"
    }

    fn get(&self, setting: Setting) -> Option<String> {
        self.values.get(&setting).cloned()
    }
}

/// Settings imported from environment variables through the `INIT_*` table.
pub struct EnvSource<E: Environment> {
    env: E,
}

impl<E: Environment> EnvSource<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: Environment> fmt::Debug for EnvSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvSource").finish_non_exhaustive()
    }
}

impl<E: Environment> SettingSource for EnvSource<E> {
    fn name(&self) -> &'static str {
        "env"
    }

    fn get(&self, setting: Setting) -> Option<String> {
        ENV_VARS_BY_SETTING
            .get(&setting)?
            .iter()
            .find_map(|name| self.env.var(name))
    }
}

/// A value found for a setting, with the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub value: String,
    pub source: &'static str,
}

/// Ordered stack of sources, highest precedence first.
#[derive(Debug, Default)]
pub struct Sources {
    stack: Vec<Box<dyn SettingSource>>,
}

impl Sources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source below every source already registered.
    pub fn push(mut self, source: impl SettingSource + 'static) -> Self {
        self.stack.push(Box::new(source));
        self
    }

    /// Command-line flags over the given environment.
    pub fn standard<E: Environment + 'static>(flags: FlagSource, env: E) -> Self {
        Self::new().push(flags).push(EnvSource::new(env))
    }

    pub fn lookup(&self, setting: Setting) -> Option<Found> {
        self.stack.iter().find_map(|source| {
            source.get(setting).map(|value| Found { value, source: source.name() })
        })
    }
}
