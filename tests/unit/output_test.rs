//! Tests for report structures and their JSON shape

use std::path::PathBuf;
use std::sync::Arc;

use pipetrack::core::models::{PipelineRules, Severity};
use pipetrack::output::{DependencyReport, DependencySummary, PathReport, RulesReport};
use serde_json::{Value, json};

use crate::common::fixtures::sandbox;
use crate::common::resolver_over;

fn shot_report() -> DependencyReport {
    let resolver = resolver_over(Arc::new(sandbox().build()));
    DependencyReport::new(31, resolver.get_dependencies(31).unwrap())
}

#[test]
fn report_summary_for_shot_task() {
    let report = shot_report();
    assert_eq!(
        report.summary,
        DependencySummary {
            total: 3,
            upstream: 1,
            asset: 2,
            without_version: 1,
            fallbacks: 1,
        }
    );
}

#[test]
fn report_json_shape() {
    let value: Value = serde_json::to_value(shot_report()).unwrap();
    assert_eq!(value["task_id"], 31);
    assert_eq!(value["summary"]["total"], 3);

    let deps = value["dependencies"].as_array().unwrap();
    assert_eq!(deps[0]["source"], "upstream_task");
    assert!(deps[0].get("preferred_step").is_none());

    let sword = &deps[2];
    assert_eq!(sword["source"], "asset_dependency");
    assert_eq!(sword["preferred_step"], "Rig");
    assert_eq!(sword["actual_step"], "Model");
    assert_eq!(sword["is_fallback"], true);
    assert_eq!(sword["skipped_steps"], json!(["Rig"]));
    assert_eq!(sword["version"], Value::Null);
    assert_eq!(sword["published_files"], json!([]));
    assert_eq!(sword["version_warning"], "Using Model for sword (no Rig available)");
}

#[test]
fn path_report_json() {
    let report = PathReport {
        task_id: 6799,
        path: Some(PathBuf::from("/work/SandBox/SHOTS/sq010_050/02_Layout")),
    };
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["path"], "/work/SandBox/SHOTS/sq010_050/02_Layout");
}

#[test]
fn rules_report_omits_issues_unless_checked() {
    let unchecked = RulesReport {
        rules: PipelineRules::default(),
        issues: None,
    };
    let value = serde_json::to_value(&unchecked).unwrap();
    assert!(value.get("issues").is_none());
    assert_eq!(value["rules"]["asset"]["Rig"], json!(["Model"]));

    let mut rules = PipelineRules::default();
    rules.shot.insert("Comp".into(), vec!["Comp".into()]);
    let issues = rules.validate();
    assert_eq!(issues[0].severity, Severity::Error);
    let checked = RulesReport {
        rules,
        issues: Some(issues),
    };
    let value = serde_json::to_value(&checked).unwrap();
    assert_eq!(value["issues"][0]["severity"], "error");
    assert_eq!(value["issues"][0]["kind"], "shot");
}
