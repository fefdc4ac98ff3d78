//! Main configuration overrides: catalog, health check and execution backend

use serde_yaml::Value;

use super::editor::Editor;
use super::{Applied, Overrides, Rule};
use crate::config::Setting;
use crate::error::Result;
use crate::template::Document;

const CATALOG_DATABASE: &[&str] = &["catalog", "database"];
const CATALOG_DATABASE_OPTIONS: &[&str] = &["catalog", "database", "options"];
const CATALOG_SEARCH: &[&str] = &["catalog", "searchEngine"];
const EXECUTION: &[&str] = &["analysis", "execution"];
const EXECUTION_OPTIONS: &[&str] = &["analysis", "execution", "options"];

const RULES: &[Rule] = &[
    Rule::new(Setting::HealthCheckInterval, &["healthCheck"], "interval"),
    Rule::new(Setting::CatalogDatabaseHosts, CATALOG_DATABASE, "hosts"),
    Rule::new(Setting::CatalogDatabaseUser, CATALOG_DATABASE, "user"),
    Rule::new(Setting::CatalogDatabasePassword, CATALOG_DATABASE, "password"),
    Rule::new(Setting::CatalogSearchHosts, CATALOG_SEARCH, "hosts"),
    Rule::new(Setting::CatalogSearchUser, CATALOG_SEARCH, "user"),
    Rule::new(Setting::CatalogSearchPassword, CATALOG_SEARCH, "password"),
    Rule::new(Setting::BatchExecutionMode, EXECUTION, "id"),
    Rule::new(Setting::BatchMaxConcurrentJobs, EXECUTION, "maxConcurrentIndexJobs"),
    // Azure Batch executor options live in a flat string-keyed map.
    Rule::new(Setting::BatchAccountName, EXECUTION_OPTIONS, "azure.batchAccount"),
    Rule::new(Setting::BatchAccountKey, EXECUTION_OPTIONS, "azure.batchKey"),
    Rule::new(Setting::BatchEndpoint, EXECUTION_OPTIONS, "azure.batchUri"),
    Rule::new(Setting::BatchPoolId, EXECUTION_OPTIONS, "azure.batchPoolId"),
    Rule::new(Setting::BatchDockerImage, EXECUTION_OPTIONS, "azure.dockerImageName"),
    Rule::new(Setting::BatchDockerArgs, EXECUTION_OPTIONS, "azure.dockerArgs"),
];

pub fn apply(document: &mut Document, overrides: &Overrides, applied: &mut Vec<Applied>) -> Result<()> {
    let mut editor = Editor::new(document, applied);
    editor.apply_rules(overrides, RULES)?;

    if overrides.is_set(Setting::CatalogDatabaseHosts) {
        editor.set_derived(CATALOG_DATABASE_OPTIONS, "enableSSL", Value::Bool(true))?;
    }
    Ok(())
}
