//! Client configuration overrides

use super::editor::Editor;
use super::{Applied, Overrides, Rule};
use crate::config::Setting;
use crate::error::Result;
use crate::template::Document;

const RULES: &[Rule] = &[
    Rule::new(Setting::RestHost, &["rest"], "host"),
    Rule::new(Setting::GrpcHost, &["grpc"], "host"),
];

pub fn apply(document: &mut Document, overrides: &Overrides, applied: &mut Vec<Applied>) -> Result<()> {
    Editor::new(document, applied).apply_rules(overrides, RULES)
}
