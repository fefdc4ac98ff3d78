//! Storage configuration overrides: search, cellbase and the hadoop ssh executor

use serde_yaml::Value;

use super::editor::Editor;
use super::{Applied, Overrides, Rule};
use crate::config::Setting;
use crate::error::Result;
use crate::template::Document;

/// Public cellbase REST endpoint used when no annotation source is configured.
pub const DEFAULT_CELLBASE_REST_URL: &str = "http://bioinfo.hpc.cam.ac.uk/cellbase/";

pub const ANNOTATOR_DB_ADAPTOR: &str = "cellbase_db_adaptor";
pub const ANNOTATOR_REST: &str = "cellbase_rest";

const HADOOP_ENGINE_ID: &str = "hadoop";
const ENGINES: &[&str] = &["variant", "engines"];
const MR_EXECUTOR: &str = "storage.hadoop.mr.executor";

const CELLBASE_DATABASE: &[&str] = &["cellbase", "database"];

const RULES: &[Rule] = &[
    Rule::new(Setting::SearchHosts, &["search"], "hosts"),
    Rule::new(Setting::CellbaseMongoHosts, CELLBASE_DATABASE, "hosts"),
    Rule::new(Setting::CellbaseMongoHostsUser, CELLBASE_DATABASE, "user"),
    Rule::new(Setting::CellbaseMongoHostsPassword, CELLBASE_DATABASE, "password"),
    Rule::new(Setting::CellbaseRestUrl, &["cellbase"], "hosts"),
];

/// Keys written into the hadoop engine's option map.
const SSH_OPTIONS: &[(Setting, &str)] = &[
    (Setting::HbaseSshDns, "storage.hadoop.mr.executor.ssh.host"),
    (Setting::HbaseSshUser, "storage.hadoop.mr.executor.ssh.user"),
    (Setting::HbaseSshPass, "storage.hadoop.mr.executor.ssh.password"),
    (Setting::HbaseSshRemoteOpencgaHome, "storage.hadoop.mr.executor.ssh.remoteOpenCgaHome"),
];

pub fn apply(document: &mut Document, overrides: &Overrides, applied: &mut Vec<Applied>) -> Result<()> {
    let mut editor = Editor::new(document, applied);
    editor.apply_rules(overrides, RULES)?;
    apply_annotator(&mut editor, overrides)?;
    apply_hadoop_ssh(&mut editor, overrides)
}

/// Pick the annotator from the cellbase source that was configured.
///
/// Mongo hosts select the database adaptor and enable SSL on its connection.
/// Without them annotation goes through REST, and with no REST URL either the
/// public endpoint is used.
fn apply_annotator(editor: &mut Editor<'_>, overrides: &Overrides) -> Result<()> {
    let has_mongo_hosts = overrides.is_set(Setting::CellbaseMongoHosts);
    let has_rest_url = overrides.is_set(Setting::CellbaseRestUrl);

    if has_mongo_hosts {
        editor.set_derived(&["cellbase", "database", "options"], "enableSSL", Value::Bool(true))?;
    }

    let annotator = if has_mongo_hosts { ANNOTATOR_DB_ADAPTOR } else { ANNOTATOR_REST };
    editor.set_derived(&["variant", "options"], "annotator", Value::String(annotator.to_string()))?;

    if !has_mongo_hosts && !has_rest_url {
        let hosts = Value::Sequence(vec![Value::String(DEFAULT_CELLBASE_REST_URL.to_string())]);
        editor.set_derived(&["cellbase"], "hosts", hosts)?;
    }
    Ok(())
}

fn apply_hadoop_ssh(editor: &mut Editor<'_>, overrides: &Overrides) -> Result<()> {
    if !SSH_OPTIONS.iter().any(|(setting, _)| overrides.is_set(*setting)) {
        return Ok(());
    }

    let Some(index) = editor.find_in_sequence(ENGINES, "id", HADOOP_ENGINE_ID) else {
        tracing::warn!(
            "No '{}' entry under variant.engines; skipping hadoop ssh executor overrides",
            HADOOP_ENGINE_ID
        );
        return Ok(());
    };
    let index = index.to_string();
    let options = ["variant", "engines", index.as_str(), "options"];

    if overrides.is_set(Setting::HbaseSshDns) {
        editor.set_derived(&options, MR_EXECUTOR, Value::String("ssh".to_string()))?;
    }
    for (setting, key) in SSH_OPTIONS {
        editor.apply_setting(overrides, *setting, &options, key)?;
    }
    Ok(())
}
